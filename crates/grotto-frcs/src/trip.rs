//! Trips and the shots recorded on them.

use chrono::NaiveDate;
use grotto_units::{Angle, AngleUnit, Length, LengthUnit};
use serde::{Deserialize, Serialize};

/// One survey trip: a header followed by its shots in recorded order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub header: TripHeader,
    pub shots: Vec<Shot>,
}

impl Trip {
    pub fn new(header: TripHeader) -> Self {
        Self {
            header,
            shots: Vec::new(),
        }
    }

    pub fn with_shot(mut self, shot: Shot) -> Self {
        self.shots.push(shot);
        self
    }

    pub fn with_shots(mut self, shots: impl IntoIterator<Item = Shot>) -> Self {
        self.shots.extend(shots);
        self
    }
}

/// Trip header block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripHeader {
    /// Trip name (the free-text title line).
    pub name: String,
    pub comment: Option<String>,
    pub team: Option<Vec<String>>,
    pub date: Option<NaiveDate>,
    pub distance_unit: LengthUnit,
    pub azimuth_unit: AngleUnit,
    pub inclination_unit: AngleUnit,
    pub has_backsight_azimuth: bool,
    pub has_backsight_inclination: bool,
    /// Backsight azimuths are stored already reduced to the frontsight direction.
    pub backsight_azimuth_corrected: bool,
    /// Backsight inclinations are stored already reduced to the frontsight sign.
    pub backsight_inclination_corrected: bool,
}

impl TripHeader {
    /// A header in feet and degrees with no backsights.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            team: None,
            date: None,
            distance_unit: LengthUnit::Feet,
            azimuth_unit: AngleUnit::Degrees,
            inclination_unit: AngleUnit::Degrees,
            has_backsight_azimuth: false,
            has_backsight_inclination: false,
            backsight_azimuth_corrected: false,
            backsight_inclination_corrected: false,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_team<I, S>(mut self, team: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team = Some(team.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_distance_unit(mut self, unit: LengthUnit) -> Self {
        self.distance_unit = unit;
        self
    }

    pub fn with_azimuth_unit(mut self, unit: AngleUnit) -> Self {
        self.azimuth_unit = unit;
        self
    }

    pub fn with_inclination_unit(mut self, unit: AngleUnit) -> Self {
        self.inclination_unit = unit;
        self
    }

    /// Declare that shots carry backsight azimuths.
    pub fn with_backsight_azimuth(mut self, corrected: bool) -> Self {
        self.has_backsight_azimuth = true;
        self.backsight_azimuth_corrected = corrected;
        self
    }

    /// Declare that shots carry backsight inclinations.
    pub fn with_backsight_inclination(mut self, corrected: bool) -> Self {
        self.has_backsight_inclination = true;
        self.backsight_inclination_corrected = corrected;
        self
    }
}

/// How a shot's distance and vertical offset were measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotKind {
    /// Slope distance with inclination.
    #[default]
    Normal,
    /// Diagonal distance with a separately measured vertical offset.
    Diagonal,
    /// Horizontal distance with a separately measured vertical offset.
    Horizontal,
}

/// Left/right/up/down clearances at a station. `None` means "no data".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lruds {
    pub left: Option<Length>,
    pub right: Option<Length>,
    pub up: Option<Length>,
    pub down: Option<Length>,
}

impl Lruds {
    pub fn new(
        left: Option<Length>,
        right: Option<Length>,
        up: Option<Length>,
        down: Option<Length>,
    ) -> Self {
        Self {
            left,
            right,
            up,
            down,
        }
    }
}

/// A single shot line.
///
/// Either station may be absent: a line with only a `from` station records
/// LRUDs (or an isolated reading) without contributing a leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub kind: ShotKind,
    pub from: Option<String>,
    pub to: Option<String>,
    /// Slope distance (or diagonal distance for [`ShotKind::Diagonal`]).
    pub distance: Length,
    /// Required when `kind` is [`ShotKind::Horizontal`].
    pub horizontal_distance: Option<Length>,
    /// Signed vertical offset; only meaningful for non-normal kinds.
    pub vertical_distance: Option<Length>,
    pub frontsight_azimuth: Option<Angle>,
    pub backsight_azimuth: Option<Angle>,
    pub frontsight_inclination: Option<Angle>,
    pub backsight_inclination: Option<Angle>,
    pub from_lruds: Option<Lruds>,
    pub to_lruds: Option<Lruds>,
    pub comment: Option<String>,
}

impl Shot {
    /// A shot of `kind` with no stations or readings yet.
    pub fn new(kind: ShotKind, distance: Length) -> Self {
        Self {
            kind,
            from: None,
            to: None,
            distance,
            horizontal_distance: None,
            vertical_distance: None,
            frontsight_azimuth: None,
            backsight_azimuth: None,
            frontsight_inclination: None,
            backsight_inclination: None,
            from_lruds: None,
            to_lruds: None,
            comment: None,
        }
    }

    /// A normal shot between two stations.
    pub fn between(from: impl Into<String>, to: impl Into<String>, distance: Length) -> Self {
        Self::new(ShotKind::Normal, distance)
            .with_from(from)
            .with_to(to)
    }

    pub fn with_kind(mut self, kind: ShotKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_from(mut self, station: impl Into<String>) -> Self {
        self.from = Some(station.into());
        self
    }

    pub fn with_to(mut self, station: impl Into<String>) -> Self {
        self.to = Some(station.into());
        self
    }

    pub fn with_horizontal_distance(mut self, distance: Length) -> Self {
        self.horizontal_distance = Some(distance);
        self
    }

    pub fn with_vertical_distance(mut self, distance: Length) -> Self {
        self.vertical_distance = Some(distance);
        self
    }

    pub fn with_frontsight_azimuth(mut self, azimuth: Angle) -> Self {
        self.frontsight_azimuth = Some(azimuth);
        self
    }

    pub fn with_backsight_azimuth(mut self, azimuth: Angle) -> Self {
        self.backsight_azimuth = Some(azimuth);
        self
    }

    pub fn with_frontsight_inclination(mut self, inclination: Angle) -> Self {
        self.frontsight_inclination = Some(inclination);
        self
    }

    pub fn with_backsight_inclination(mut self, inclination: Angle) -> Self {
        self.backsight_inclination = Some(inclination);
        self
    }

    pub fn with_from_lruds(mut self, lruds: Lruds) -> Self {
        self.from_lruds = Some(lruds);
        self
    }

    pub fn with_to_lruds(mut self, lruds: Lruds) -> Self {
        self.to_lruds = Some(lruds);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
