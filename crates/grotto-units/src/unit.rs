//! Unit enums and the conversion trait they share.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit of measure that can convert to and from a fixed base unit.
pub trait Unit: Copy + PartialEq + fmt::Debug {
    /// Express `value` (in this unit) in the base unit.
    fn to_base(self, value: f64) -> f64;

    /// Express `value` (in the base unit) in this unit.
    fn from_base(self, value: f64) -> f64;

    /// Short symbol used when displaying a quantity (e.g., "ft", "deg").
    fn symbol(self) -> &'static str;
}

/// Length units. The base unit is meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Centimeters,
    Kilometers,
    Feet,
    Inches,
    Yards,
    Miles,
}

impl LengthUnit {
    fn meters_per_unit(self) -> f64 {
        match self {
            LengthUnit::Meters => 1.0,
            LengthUnit::Centimeters => 0.01,
            LengthUnit::Kilometers => 1000.0,
            LengthUnit::Feet => 0.3048,
            LengthUnit::Inches => 0.0254,
            LengthUnit::Yards => 0.9144,
            LengthUnit::Miles => 1609.344,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Centimeters => "centimeters",
            LengthUnit::Kilometers => "kilometers",
            LengthUnit::Feet => "feet",
            LengthUnit::Inches => "inches",
            LengthUnit::Yards => "yards",
            LengthUnit::Miles => "miles",
        }
    }
}

impl Unit for LengthUnit {
    fn to_base(self, value: f64) -> f64 {
        value * self.meters_per_unit()
    }

    fn from_base(self, value: f64) -> f64 {
        value / self.meters_per_unit()
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meters => "m",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Kilometers => "km",
            LengthUnit::Feet => "ft",
            LengthUnit::Inches => "in",
            LengthUnit::Yards => "yd",
            LengthUnit::Miles => "mi",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Angle units. The base unit is degrees.
///
/// Percent grade is not a linear scale: a grade of `g` percent is the angle
/// whose tangent is `g / 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degrees,
    Gradians,
    Milliradians,
    Radians,
    #[serde(rename = "percent")]
    PercentGrade,
}

impl AngleUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Gradians => "gradians",
            AngleUnit::Milliradians => "milliradians",
            AngleUnit::Radians => "radians",
            AngleUnit::PercentGrade => "percent",
        }
    }
}

impl Unit for AngleUnit {
    fn to_base(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Gradians => value * 0.9,
            AngleUnit::Milliradians => (value / 1000.0).to_degrees(),
            AngleUnit::Radians => value.to_degrees(),
            AngleUnit::PercentGrade => (value / 100.0).atan().to_degrees(),
        }
    }

    fn from_base(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Gradians => value / 0.9,
            AngleUnit::Milliradians => value.to_radians() * 1000.0,
            AngleUnit::Radians => value.to_radians(),
            AngleUnit::PercentGrade => value.to_radians().tan() * 100.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "deg",
            AngleUnit::Gradians => "grad",
            AngleUnit::Milliradians => "mil",
            AngleUnit::Radians => "rad",
            AngleUnit::PercentGrade => "%",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
