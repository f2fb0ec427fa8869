//! Shared fixtures: the Fisher Ridge sample trips, and plain-text renderings
//! of converted output for assertions.

#![allow(dead_code)]

use chrono::NaiveDate;
use grotto::InputCave;
use grotto_frcs::{Lruds, Shot, ShotKind, SurveyFile, Trip, TripHeader, TripSummary, TripSummaryFile};
use grotto_units::{Angle, AngleUnit, Length, LengthUnit};
use grotto_walls::{
    self as walls, Book, DisplayLatLongFormat, FixDirective, Georeference, LrudStyle, ProjectFile,
    ProjectNode, Sighting, SrvFile, SrvLine, TapingMethod, UnitsOption,
};

pub fn ft(value: f64) -> Length {
    Length::feet(value)
}

pub fn deg(value: f64) -> Angle {
    Angle::degrees(value)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn lruds(l: f64, r: f64, u: f64, d: f64) -> Lruds {
    Lruds::new(Some(ft(l)), Some(ft(r)), Some(ft(u)), Some(ft(d)))
}

/// A normal shot with frontsight/backsight azimuths and a frontsight inclination.
fn leg(from: &str, to: &str, distance: f64, fs_az: f64, bs_az: f64, inc: f64) -> Shot {
    Shot::between(from, to, ft(distance))
        .with_frontsight_azimuth(deg(fs_az))
        .with_backsight_azimuth(deg(bs_az))
        .with_frontsight_inclination(deg(inc))
}

/// A normal shot with backsights on both azimuth and inclination.
fn leg_vb(from: &str, to: &str, distance: f64, az: (f64, f64), inc: (f64, f64)) -> Shot {
    leg(from, to, distance, az.0, az.1, inc.0).with_backsight_inclination(deg(inc.1))
}

/// A diagonal or horizontal shot with its vertical offset.
fn offset_leg(kind: ShotKind, from: &str, to: &str, distance: f64, az: (f64, f64), vertical: f64) -> Shot {
    let shot = Shot::between(from, to, ft(distance))
        .with_kind(kind)
        .with_frontsight_azimuth(deg(az.0))
        .with_backsight_azimuth(deg(az.1))
        .with_vertical_distance(ft(vertical));
    match kind {
        ShotKind::Horizontal => shot.with_horizontal_distance(ft(distance)),
        _ => shot,
    }
}

pub fn trip1() -> Trip {
    Trip::new(
        TripHeader::new("ENTRANCE DROPS, JOE'S \"I LOVE MY WIFE TRAVERSE\", TRICKY TRAVERSE")
            .with_team(["Peter Quick", "Keith Ortiz"])
            .with_date(date(1981, 2, 15))
            .with_backsight_azimuth(true),
    )
    .with_shots([
        leg("AE20", "AE19", 9.3, 60.0, 60.0, -36.0)
            .with_from_lruds(lruds(1.0, 3.0, 0.0, 2.0))
            .with_to_lruds(lruds(2.0, 12.0, 0.0, 20.0))
            .with_comment(
                "AE20     0        0        0        Bug-can't put before so put after-so can't make 2 fixed 10/28/12",
            ),
        leg("AE19", "AE18", 24.5, 0.0, 0.0, -90.0).with_to_lruds(lruds(6.0, 10.0, 25.0, 0.0)),
        leg("AE18", "AE17", 8.0, 350.5, 350.5, 17.0).with_to_lruds(lruds(3.0, 5.0, 0.0, 0.0)),
        leg("AE17", "AE16", 6.7, 0.0, 0.0, -90.0).with_to_lruds(lruds(3.0, 5.0, 6.0, 1.0)),
        leg("AE16", "AE15", 12.6, 70.5, 71.0, -18.0).with_to_lruds(lruds(4.0, 0.0, 2.0, 1.0)),
        leg("AE15", "AE14", 10.0, 21.5, 20.0, 6.0).with_to_lruds(lruds(5.0, 5.0, 0.0, 3.0)),
        leg("AE14", "AE13", 26.8, 288.0, 286.0, -50.0).with_to_lruds(lruds(0.0, 7.0, 20.0, 5.0)),
        leg("AE13", "AE12", 20.7, 236.0, 236.0, 34.0)
            .with_to_lruds(lruds(3.0, 5.0, 4.0, 4.0))
            .with_comment("SHORT CANYON AT THE BASE OF THE SECOND DROP"),
        Shot::between("AE12", "AE11", ft(26.8))
            .with_frontsight_inclination(deg(-90.0))
            .with_to_lruds(Lruds::new(None, Some(ft(7.0)), Some(ft(20.0)), Some(ft(5.0))))
            .with_comment("Multiline\nComment\nTest"),
    ])
}

/// Recorded in feet and inches; the header date is superseded by the summary.
pub fn trip2() -> Trip {
    let inches = Length::inches;
    Trip::new(
        TripHeader::new("TRICKY TRAVERSE AND THEN FIRST SURVEY IN UPPER CROWLWAY")
            .with_team(["Dan Crowl", "Keith Ortiz", "Chip Hopper", "Peter Quick", "Larry Bean"])
            .with_date(date(1981, 2, 1))
            .with_distance_unit(LengthUnit::Inches)
            .with_backsight_azimuth(false),
    )
    .with_shots([
        Shot::between("A1", "A2", inches(586.0))
            .with_frontsight_azimuth(deg(292.0))
            .with_backsight_azimuth(deg(110.0))
            .with_frontsight_inclination(deg(-42.0))
            .with_from_lruds(Lruds::new(Some(ft(2.0)), Some(ft(7.0)), Some(ft(3.0)), Some(ft(4.5))))
            .with_to_lruds(lruds(5.0, 10.0, 35.0, 5.0)),
        Shot::between("A2", "A3", inches(149.0))
            .with_frontsight_azimuth(deg(333.5))
            .with_backsight_azimuth(deg(153.5))
            .with_frontsight_inclination(deg(35.0))
            .with_to_lruds(lruds(3.0, 1.0, 15.0, 5.0)),
        Shot::between("A3", "A4", inches(50.0))
            .with_frontsight_azimuth(deg(0.0))
            .with_backsight_azimuth(deg(0.0))
            .with_frontsight_inclination(deg(90.0))
            .with_to_lruds(lruds(3.0, 1.0, 10.0, 10.0)),
    ])
}

pub fn trip3() -> Trip {
    Trip::new(
        TripHeader::new("CONNECT UPPER HILTON TO FISHER AVE AND SURVEY IN PRESSURE PASSAGE.")
            .with_team(["J.SAUNDERS", "NANCY COLTER", "TOM JOHENGEN", "C SANTERRE", "LINDA JAGGER"])
            .with_date(date(1982, 5, 16))
            .with_backsight_azimuth(false)
            .with_backsight_inclination(false),
    )
    .with_shots([
        leg_vb("J6", "ML$1", 50.0, (124.0, 303.5), (11.0, -11.0)).with_to_lruds(lruds(12.0, 12.0, 35.0, 15.0)),
        leg_vb("ML$1", "ML$2", 32.0, (157.0, 337.0), (53.0, -53.0)).with_to_lruds(lruds(30.0, 2.0, 16.0, 5.0)),
        leg_vb("ML$2", "ML$3", 25.1, (142.5, 324.0), (-5.0, 5.0)).with_to_lruds(lruds(0.0, 4.0, 5.0, 7.0)),
        Shot::between("ML$3", "ML$4", ft(6.0))
            .with_frontsight_inclination(deg(-90.0))
            .with_backsight_inclination(deg(90.0))
            .with_to_lruds(lruds(0.0, 4.0, 11.0, 1.0)),
    ])
}

/// Trips 4 to 6 have no team in their headers; it comes from the summaries.
pub fn trip4() -> Trip {
    Trip::new(
        TripHeader::new("Hunky-Dory Mopup:  Q19-PD7 loop (Quap Passage), Q1 Side Lead, Others.")
            .with_date(date(1983, 3, 5))
            .with_backsight_azimuth(true)
            .with_backsight_inclination(true),
    )
    .with_shots([
        leg_vb("Q19", "QAP1", 25.0, (49.5, 49.5), (-12.0, -11.0))
            .with_to_lruds(lruds(3.0, 3.0, 1.0, 7.0))
            .with_comment("Quap Passage short cut from the Hunky-Dory access crawl."),
        leg_vb("QAP1", "QAP2", 27.2, (100.5, 100.0), (2.5, 2.5)).with_to_lruds(lruds(2.0, 3.0, 0.0, 10.0)),
        leg_vb("QAP2", "QAP3", 14.8, (39.5, 39.5), (-11.0, -10.5)).with_to_lruds(lruds(1.0, 4.0, 1.0, 12.0)),
        leg_vb("QAP3", "QAP4", 21.1, (355.0, 354.0), (2.0, 2.5)).with_to_lruds(lruds(4.0, 4.0, 2.0, 12.0)),
        leg_vb("QAP4", "QAP5", 43.6, (343.0, 341.5), (-5.0, -4.5)).with_to_lruds(lruds(2.0, 7.0, 5.0, 12.0)),
        leg_vb("QAP5", "QAP6", 23.0, (39.5, 39.0), (9.0, 9.5)).with_to_lruds(lruds(3.0, 4.0, 0.0, 15.0)),
        leg_vb("QAP6", "QAP7", 35.1, (11.5, 11.0), (0.5, 1.0)).with_to_lruds(lruds(3.0, 6.0, 1.0, 25.0)),
        Shot::between("QAP7", "QAP8", ft(5.8))
            .with_frontsight_inclination(deg(-90.0))
            .with_backsight_inclination(deg(-90.0))
            .with_to_lruds(lruds(2.0, 4.0, 6.0, 20.0)),
    ])
}

pub fn trip5() -> Trip {
    Trip::new(
        TripHeader::new("DOUG'S DEMISE (50 FT DROP), CHRIS CROSS, CRAWL ABOVE DROP")
            .with_team(Vec::<String>::new())
            .with_date(date(1981, 3, 6))
            .with_backsight_azimuth(true),
    )
    .with_shots([
        Shot::between("B29", "B30", ft(29.6))
            .with_kind(ShotKind::Horizontal)
            .with_horizontal_distance(ft(29.5))
            .with_vertical_distance(ft(0.5))
            .with_frontsight_azimuth(deg(320.0))
            .with_backsight_azimuth(deg(321.0))
            .with_to_lruds(lruds(2.0, 3.0, 4.0, 2.0)),
        leg("B30", "B31", 13.7, 0.0, 0.0, 40.0).with_to_lruds(lruds(2.0, 4.0, 6.0, 9.0)),
        leg("B30", "B30sp", 13.7, 0.0, 0.0, 40.0)
            .with_to_lruds(Lruds::new(Some(ft(2.0)), Some(ft(4.0)), Some(ft(6.0)), None)),
        Shot::between("B32", "B33", ft(0.0))
            .with_frontsight_inclination(deg(-1.0))
            .with_to_lruds(lruds(6.0, 7.0, 8.0, 9.0)),
    ])
}

pub fn trip6() -> Trip {
    use ShotKind::{Diagonal, Horizontal};
    Trip::new(
        TripHeader::new("CONTINUATION OF E SURVEY TO WEST ROOM")
            .with_date(date(1983, 3, 5))
            .with_backsight_azimuth(true),
    )
    .with_shots([
        offset_leg(Diagonal, "E36", "E37", 31.6, (231.0, 232.0), 2.0).with_to_lruds(lruds(3.0, 10.0, 20.0, 32.0)),
        offset_leg(Diagonal, "E37", "E38", 19.2, (258.5, 259.0), -1.0).with_to_lruds(lruds(10.0, 5.0, 20.0, 30.0)),
        offset_leg(Horizontal, "E38", "E39", 36.5, (227.0, 228.0), -1.0).with_to_lruds(lruds(10.0, 4.0, 12.0, 30.0)),
        leg("E39", "E40", 27.0, 0.0, 0.0, -90.0).with_to_lruds(lruds(10.0, 4.0, 29.0, 3.0)),
        offset_leg(Diagonal, "E40", "E41", 18.5, (260.0, 261.5), 2.2).with_to_lruds(lruds(3.0, 3.0, 15.0, 3.0)),
    ])
}

pub fn fisher_ridge() -> SurveyFile {
    SurveyFile::new()
        .with_cave("Fisher Ridge Cave System")
        .with_trip(trip1())
        .with_trip(trip2())
        .with_trip(trip3())
        .with_trip(trip4())
        .with_trip(trip5())
        .with_trip(trip6())
}

pub fn fisher_ridge_summaries() -> TripSummaryFile {
    let quick_and_hopper = ["PETER QUICK", "CHIP HOPPER"];
    TripSummaryFile::new()
        .with_summary(
            TripSummary::new(1, "ENTRANCE DROPS")
                .with_date(date(1981, 2, 15))
                .with_footage(ft(136.3)),
        )
        .with_summary(TripSummary::new(2, "TRICKY TRAVERSE").with_date(date(1981, 2, 14)))
        .with_summary(TripSummary::new(3, "CONNECT UPPER HILTON").with_date(date(1982, 5, 16)))
        .with_summary(
            TripSummary::new(4, "Hunky-Dory Mopup")
                .with_date(date(1983, 3, 5))
                .with_team(quick_and_hopper),
        )
        .with_summary(
            TripSummary::new(5, "DOUG'S DEMISE")
                .with_date(date(1981, 3, 6))
                .with_team(quick_and_hopper),
        )
        .with_summary(
            TripSummary::new(6, "CONTINUATION OF E SURVEY")
                .with_date(date(1983, 3, 5))
                .with_team(quick_and_hopper),
        )
}

pub fn fisher_ridge_georeference() -> Georeference {
    Georeference {
        display_lat_long_format: DisplayLatLongFormat::Degrees,
        utm_zone: 14,
        utm_northing: Length::meters(0.0),
        utm_easting: Length::meters(0.0),
        utm_convergence_angle: deg(0.0),
        elevation: Length::meters(0.0),
        latitude: deg(0.0),
        longitude: deg(0.0),
        walls_datum_index: 0,
        datum: "WGS1984".to_string(),
    }
}

pub fn a20() -> FixDirective {
    FixDirective::new("A20", Length::meters(50.0), Length::meters(40.0), Length::meters(80.0))
}

pub fn fisher_ridge_cave() -> InputCave {
    InputCave::new("fr", fisher_ridge())
        .with_summaries(fisher_ridge_summaries())
        .with_georeference(fisher_ridge_georeference())
        .with_fixed_stations(vec![a20()])
}

/// Book/survey tree, one node per line, children indented.
pub fn outline(project: &ProjectFile) -> String {
    let mut lines = Vec::new();
    outline_book(&project.root, 0, &mut lines);
    lines.join("\n")
}

fn outline_book(book: &Book, depth: usize, lines: &mut Vec<String>) {
    let mut attrs = Vec::new();
    if let Some(name) = &book.name {
        attrs.push(format!("name={name}"));
    }
    if let Some(options) = &book.options {
        attrs.push(format!("options={options}"));
    }
    if let Some(path) = &book.path {
        attrs.push(format!("path={path}"));
    }
    if let Some(georeference) = &book.georeference {
        attrs.push(format!("ref={}", georeference.datum));
    }
    let attrs = if attrs.is_empty() {
        String::new()
    } else {
        format!(" ({})", attrs.join(", "))
    };
    lines.push(format!("{}book: {}{attrs}", "  ".repeat(depth), book.title));

    for child in &book.children {
        match child {
            ProjectNode::Book(book) => outline_book(book, depth + 1, lines),
            ProjectNode::Survey(survey) => lines.push(format!(
                "{}survey: {} (name={})",
                "  ".repeat(depth + 1),
                survey.title,
                survey.name
            )),
        }
    }
}

/// Survey content in a compact Walls-like syntax, one line per entry.
pub fn render_srv(file: &SrvFile) -> String {
    file.lines.iter().map(render_line).collect::<Vec<_>>().join("\n")
}

fn render_line(line: &SrvLine) -> String {
    match line {
        SrvLine::Comment(text) if text.contains(['\n', '\r']) => format!("#[\n{text}\n#]"),
        SrvLine::Comment(text) => format!(";{text}"),
        SrvLine::Date(date) => format!("#DATE {date}"),
        SrvLine::Units(options) => {
            let options: Vec<String> = options.iter().map(render_units_option).collect();
            format!("#UNITS {}", options.join(" "))
        }
        SrvLine::StationLruds(station) => {
            format!("{} {}", station.station, render_lruds(&station.lruds))
        }
        SrvLine::Shot(shot) => render_shot(shot),
        SrvLine::Fix(fix) => format!(
            "#FIX {} {} {} {}",
            fix.station,
            render_length(fix.easting),
            render_length(fix.northing),
            render_length(fix.elevation)
        ),
    }
}

fn render_units_option(option: &UnitsOption) -> String {
    match option {
        UnitsOption::DistanceUnit(unit) => format!("{unit:?}"),
        UnitsOption::FrontsightAzimuthUnit(unit) => format!("A={unit:?}"),
        UnitsOption::FrontsightInclinationUnit(unit) => format!("V={unit:?}"),
        UnitsOption::LrudStyle(style) => {
            let style = match style {
                LrudStyle::FromStationPerpendicular => "FP",
                LrudStyle::FromStationBisector => "FB",
                LrudStyle::ToStationPerpendicular => "TP",
                LrudStyle::ToStationBisector => "TB",
            };
            format!("LRUD={style}")
        }
        UnitsOption::BacksightAzimuthType(t) => format!(
            "TYPEAB={},{}",
            if t.corrected { "C" } else { "N" },
            t.tolerance.get(AngleUnit::Degrees)
        ),
        UnitsOption::BacksightInclinationType(t) => format!(
            "TYPEVB={},{}",
            if t.corrected { "C" } else { "N" },
            t.tolerance.get(AngleUnit::Degrees)
        ),
        UnitsOption::TapingMethod(method) => {
            let method = match method {
                TapingMethod::InstrumentToTarget => "IT",
                TapingMethod::InstrumentToStation => "IS",
                TapingMethod::StationToTarget => "ST",
                TapingMethod::StationToStation => "SS",
            };
            format!("TAPE={method}")
        }
    }
}

fn render_shot(shot: &walls::Shot) -> String {
    let mut fields = vec![
        shot.from.clone(),
        shot.to.clone(),
        render_length(shot.distance),
        render_sighting(&shot.azimuth),
        render_sighting(&shot.inclination),
    ];
    if let Some(height) = shot.target_height {
        fields.push("--".to_string());
        fields.push(render_length(height));
    }
    if let Some(lruds) = &shot.lruds {
        fields.push(render_lruds(lruds));
    }
    if let Some(comment) = &shot.comment {
        fields.push(format!(";{comment}"));
    }
    fields.join(" ")
}

fn render_sighting(sighting: &Sighting) -> String {
    let angle = |angle: Option<Angle>| angle.map_or("--".to_string(), |a| a.value().to_string());
    match sighting {
        Sighting::Frontsight(frontsight) => angle(*frontsight),
        Sighting::FrontAndBack(frontsight, backsight) => {
            format!("{}/{}", angle(*frontsight), angle(Some(*backsight)))
        }
    }
}

fn render_lruds(lruds: &walls::Lruds) -> String {
    let parts: Vec<String> = lruds
        .to_array()
        .iter()
        .map(|value| value.map_or("--".to_string(), render_length))
        .collect();
    format!("<{}>", parts.join(","))
}

/// Inches are written as feet and inches (`48i10`).
fn render_length(length: Length) -> String {
    match length.unit() {
        LengthUnit::Inches => {
            let feet = (length.value() / 12.0).floor();
            format!("{}i{}", feet, length.value() - feet * 12.0)
        }
        _ => length.value().to_string(),
    }
}
