//! Trip conversion: one FRCS trip becomes one Walls survey.
//!
//! The survey file opens with the trip title, team and date, then a single
//! `#UNITS` line carrying everything that holds for the whole trip. Shots
//! follow in order (see `shot`).

use super::Converter;
use crate::config::ConvertConfig;
use crate::error::ConvertError;
use chrono::NaiveDate;
use grotto_frcs::{Trip, TripHeader, TripSummary};
use grotto_units::LengthUnit;
use grotto_walls::{
    BacksightType, LrudStyle, SrvFile, SrvLine, Survey, TapingMethod, UnitsOption,
};

/// Trip header values after merging in the trip summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHeader<'a> {
    pub trip_number: u32,
    pub name: &'a str,
    pub team: Option<&'a [String]>,
    pub date: Option<NaiveDate>,
    pub distance_unit: LengthUnit,
}

impl<'a> ResolvedHeader<'a> {
    /// Resolve the header of the trip at slot `index`.
    ///
    /// The summary's trip number and date take precedence; the header's own
    /// team does unless it is empty. An inches distance unit is read as feet.
    pub fn resolve(index: usize, header: &'a TripHeader, summary: Option<&'a TripSummary>) -> Self {
        let trip_number = summary.map_or(index as u32 + 1, |summary| summary.trip_number);
        let team = header
            .team
            .as_deref()
            .filter(|team| !team.is_empty())
            .or_else(|| {
                summary
                    .map(|summary| summary.team.as_slice())
                    .filter(|team| !team.is_empty())
            });
        let date = summary.and_then(|summary| summary.date).or(header.date);

        let distance_unit = match header.distance_unit {
            LengthUnit::Inches => {
                tracing::debug!(trip = trip_number, "treating inches distance unit as feet");
                LengthUnit::Feet
            }
            unit => unit,
        };

        Self {
            trip_number,
            name: &header.name,
            team,
            date,
            distance_unit,
        }
    }

    /// `<trip number> <trip name>`
    pub fn title(&self) -> String {
        format!("{} {}", self.trip_number, self.name)
    }
}

/// Team members on one line. Names that already contain commas (e.g.
/// "Quick, Peter") are separated with semicolons instead.
fn join_team(team: &[String]) -> String {
    let separator = if team.iter().any(|member| member.contains(',')) {
        "; "
    } else {
        ", "
    };
    team.join(separator)
}

/// Accumulates the lines of one trip's survey file.
pub(super) struct TripWriter<'a> {
    config: &'a ConvertConfig,
    pub(super) trip_number: u32,
    pub(super) lines: Vec<SrvLine>,
}

impl<'a> TripWriter<'a> {
    pub(super) fn new(config: &'a ConvertConfig, trip_number: u32) -> Self {
        Self {
            config,
            trip_number,
            lines: Vec::new(),
        }
    }

    fn write_header(&mut self, resolved: &ResolvedHeader<'_>, header: &TripHeader) {
        self.lines.push(SrvLine::comment(resolved.title()));
        if let Some(team) = resolved.team {
            self.lines.push(SrvLine::comment(join_team(team)));
        }
        if let Some(date) = resolved.date {
            self.lines.push(SrvLine::date(date));
        }
        self.lines
            .push(SrvLine::units(self.baseline_units(resolved, header)));
    }

    fn baseline_units(&self, resolved: &ResolvedHeader<'_>, header: &TripHeader) -> Vec<UnitsOption> {
        let mut options = vec![
            UnitsOption::DistanceUnit(resolved.distance_unit),
            UnitsOption::FrontsightAzimuthUnit(header.azimuth_unit),
            UnitsOption::FrontsightInclinationUnit(header.inclination_unit),
            UnitsOption::LrudStyle(LrudStyle::ToStationBisector),
        ];
        let tolerance = self.config.backsight_tolerance();
        if header.has_backsight_azimuth {
            options.push(UnitsOption::BacksightAzimuthType(BacksightType::new(
                header.backsight_azimuth_corrected,
                tolerance,
                false,
            )));
        }
        if header.has_backsight_inclination {
            options.push(UnitsOption::BacksightInclinationType(BacksightType::new(
                header.backsight_inclination_corrected,
                tolerance,
                false,
            )));
        }
        options
    }

    pub(super) fn finish(self) -> SrvFile {
        self.lines.into()
    }
}

impl Converter {
    /// Convert the trip at slot `index` of its survey file.
    ///
    /// The survey's short name is `prefix` followed by the resolved trip number.
    pub fn convert_trip(
        &self,
        index: usize,
        trip: &Trip,
        summary: Option<&TripSummary>,
        prefix: &str,
    ) -> Result<Survey, ConvertError> {
        let resolved = ResolvedHeader::resolve(index, &trip.header, summary);
        tracing::debug!(
            trip = resolved.trip_number,
            name = resolved.name,
            shots = trip.shots.len(),
            "converting trip"
        );

        let mut writer = TripWriter::new(self.config(), resolved.trip_number);
        writer.write_header(&resolved, &trip.header);
        trip.shots
            .iter()
            .enumerate()
            .try_fold(TapingMethod::InstrumentToTarget, |taping, (index, shot)| {
                writer.write_shot(index, shot, taping)
            })?;

        Ok(Survey::new(
            resolved.title(),
            format!("{prefix}{}", resolved.trip_number),
            writer.finish(),
        )
        .with_name_defines_segment(true)
        .with_review_distance_unit(self.config().review_distance_unit()))
    }
}
