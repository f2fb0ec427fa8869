//! Shot lines, station LRUD lines and fixed stations.

use grotto_units::{Angle, Length};
use serde::{Deserialize, Serialize};

/// An azimuth or inclination column: a frontsight alone, or `fs/bs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Sighting {
    /// A single value; `None` is written as `--`.
    Frontsight(Option<Angle>),
    /// A frontsight/backsight pair.
    FrontAndBack(Option<Angle>, Angle),
}

impl Sighting {
    /// A pair when there is a backsight, otherwise the frontsight alone.
    pub fn from_readings(frontsight: Option<Angle>, backsight: Option<Angle>) -> Self {
        match backsight {
            Some(backsight) => Sighting::FrontAndBack(frontsight, backsight),
            None => Sighting::Frontsight(frontsight),
        }
    }

    pub fn frontsight(&self) -> Option<Angle> {
        match self {
            Sighting::Frontsight(fs) | Sighting::FrontAndBack(fs, _) => *fs,
        }
    }

    pub fn backsight(&self) -> Option<Angle> {
        match self {
            Sighting::Frontsight(_) => None,
            Sighting::FrontAndBack(_, bs) => Some(*bs),
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Sighting::FrontAndBack(..))
    }
}

/// `<left,right,up,down>`; `None` is written as `--`.
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

    /// Measurements in left, right, up, down order.
    pub fn to_array(&self) -> [Option<Length>; 4] {
        [self.left, self.right, self.up, self.down]
    }
}

/// A station followed only by its LRUDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationLruds {
    pub station: String,
    pub lruds: Lruds,
}

/// A compass-and-tape shot line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub from: String,
    pub to: String,
    pub distance: Length,
    pub azimuth: Sighting,
    pub inclination: Sighting,
    /// LRUDs at the `to` station.
    pub lruds: Option<Lruds>,
    /// Height of the target above the station, measured downward to the
    /// instrument station.
    pub target_height: Option<Length>,
    /// Inline comment; must be a single line.
    pub comment: Option<String>,
}

impl Shot {
    pub fn compass_and_tape(
        from: impl Into<String>,
        to: impl Into<String>,
        distance: Length,
        azimuth: Sighting,
        inclination: Sighting,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            azimuth,
            inclination,
            lruds: None,
            target_height: None,
            comment: None,
        }
    }

    pub fn with_lruds(mut self, lruds: Lruds) -> Self {
        self.lruds = Some(lruds);
        self
    }

    pub fn with_target_height(mut self, height: Length) -> Self {
        self.target_height = Some(height);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// `#FIX station east north up`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixDirective {
    pub station: String,
    pub easting: Length,
    pub northing: Length,
    pub elevation: Length,
}

impl FixDirective {
    pub fn new(
        station: impl Into<String>,
        easting: Length,
        northing: Length,
        elevation: Length,
    ) -> Self {
        Self {
            station: station.into(),
            easting,
            northing,
            elevation,
        }
    }
}
