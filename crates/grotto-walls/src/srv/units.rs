//! `#UNITS` options.

use grotto_units::{Angle, AngleUnit, LengthUnit};
use serde::{Deserialize, Serialize};

/// One option of a `#UNITS` directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnitsOption {
    /// `Feet` / `Meters`: the default unit for distances.
    DistanceUnit(LengthUnit),
    /// `A=`
    FrontsightAzimuthUnit(AngleUnit),
    /// `V=`
    FrontsightInclinationUnit(AngleUnit),
    /// `LRUD=`
    LrudStyle(LrudStyle),
    /// `TYPEAB=`
    BacksightAzimuthType(BacksightType),
    /// `TYPEVB=`
    BacksightInclinationType(BacksightType),
    /// `TAPE=`
    TapingMethod(TapingMethod),
}

/// How backsight readings are stored and checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacksightType {
    /// Backsights are already corrected to the frontsight direction (`C`),
    /// rather than raw readings (`N`).
    pub corrected: bool,
    /// Allowed frontsight/backsight disagreement before a warning.
    pub tolerance: Angle,
    pub index_corrected: bool,
}

impl BacksightType {
    pub fn new(corrected: bool, tolerance: Angle, index_corrected: bool) -> Self {
        Self {
            corrected,
            tolerance,
            index_corrected,
        }
    }
}

/// Where LRUDs are measured and how they are oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LrudStyle {
    /// `F`
    FromStationPerpendicular,
    /// `FB`
    FromStationBisector,
    /// `T`
    ToStationPerpendicular,
    /// `TB`
    ToStationBisector,
}

/// Which points a taped distance runs between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TapingMethod {
    /// `IT`
    #[default]
    InstrumentToTarget,
    /// `IS`
    InstrumentToStation,
    /// `ST`
    StationToTarget,
    /// `SS`
    StationToStation,
}
