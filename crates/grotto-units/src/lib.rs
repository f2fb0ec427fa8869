//! Typed length and angle quantities.
//!
//! `grotto-units` is the small unit layer the survey models are built on. A
//! [`Quantity`] pairs a raw `f64` with the unit it was recorded in, so a
//! reading of `48.83 ft` and one of `12 m` can sit side by side in the same
//! trip without being normalized first.
//!
//! # Example
//!
//! ```
//! use grotto_units::{Angle, AngleUnit, Length, LengthUnit};
//!
//! let incl = Angle::degrees(-90.0);
//! assert_eq!(incl.abs().get(AngleUnit::Degrees), 90.0);
//!
//! let height = Length::feet(3.5).negate();
//! assert_eq!(height.value(), -3.5);
//! assert_eq!(height.unit(), LengthUnit::Feet);
//! ```

pub mod quantity;
pub mod unit;

pub use quantity::{Angle, Length, Quantity};
pub use unit::{AngleUnit, LengthUnit, Unit};
