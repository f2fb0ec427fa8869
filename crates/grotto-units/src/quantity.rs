//! A numeric value tagged with its unit.

use crate::unit::{AngleUnit, LengthUnit, Unit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// A value recorded in a specific unit.
///
/// Equality is structural: `1 ft` and `12 in` are different quantities even
/// though they describe the same length. Compare with [`Quantity::get`] when
/// the unit should not matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity<U> {
    value: f64,
    unit: U,
}

pub type Length = Quantity<LengthUnit>;
pub type Angle = Quantity<AngleUnit>;

impl<U: Unit> Quantity<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// The value in the unit it was recorded in.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// The value expressed in `unit`.
    ///
    /// Asking for the recorded unit returns the stored value untouched, so
    /// `Angle::degrees(90.0).get(AngleUnit::Degrees) == 90.0` holds exactly.
    pub fn get(&self, unit: U) -> f64 {
        if unit == self.unit {
            self.value
        } else {
            unit.from_base(self.unit.to_base(self.value))
        }
    }

    /// The same quantity re-expressed in `unit`.
    pub fn in_unit(&self, unit: U) -> Self {
        Self::new(self.get(unit), unit)
    }

    pub fn abs(&self) -> Self {
        Self::new(self.value.abs(), self.unit)
    }

    pub fn negate(&self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

impl Quantity<LengthUnit> {
    pub fn meters(value: f64) -> Self {
        Self::new(value, LengthUnit::Meters)
    }

    pub fn feet(value: f64) -> Self {
        Self::new(value, LengthUnit::Feet)
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, LengthUnit::Inches)
    }

    pub fn yards(value: f64) -> Self {
        Self::new(value, LengthUnit::Yards)
    }
}

impl Quantity<AngleUnit> {
    pub fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Degrees)
    }

    pub fn gradians(value: f64) -> Self {
        Self::new(value, AngleUnit::Gradians)
    }

    pub fn radians(value: f64) -> Self {
        Self::new(value, AngleUnit::Radians)
    }

    pub fn percent_grade(value: f64) -> Self {
        Self::new(value, AngleUnit::PercentGrade)
    }
}
