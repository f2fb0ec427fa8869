//! FRCS to Walls conversion.
//!
//! Takes parsed FRCS survey data for one or more caves and builds the
//! equivalent Walls project: a book per cave, a survey per trip, and an
//! optional fixed-station survey per cave.
//!
//! # Architecture
//!
//! ```text
//! grotto-frcs (SurveyFile, TripSummaryFile)
//!        │
//!        ▼
//! ProjectInput ──> Converter ──> grotto-walls (ProjectFile)
//!                     │
//!                 ConvertConfig (tolerance, review unit, fix title)
//! ```
//!
//! # Example
//!
//! ```
//! use grotto::{convert_to_walls, InputCave, ProjectInput};
//! use grotto_frcs::{Shot, SurveyFile, Trip, TripHeader};
//! use grotto_units::{Angle, Length};
//!
//! let trip = Trip::new(TripHeader::new("ENTRANCE DROPS")).with_shot(
//!     Shot::between("A1", "A2", Length::feet(12.5))
//!         .with_frontsight_azimuth(Angle::degrees(45.0))
//!         .with_frontsight_inclination(Angle::degrees(-10.0)),
//! );
//! let project = ProjectInput::new("Fisher Ridge")
//!     .with_cave(InputCave::new("fr", SurveyFile::new().with_trip(trip)));
//!
//! let walls = convert_to_walls(&project).unwrap();
//! assert_eq!(walls.root.survey("1").unwrap().title, "1 ENTRANCE DROPS");
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod input;

pub use config::ConvertConfig;
pub use convert::{Converter, ResolvedHeader};
pub use error::{ConfigError, ConvertError};
pub use input::{InputCave, ProjectInput};

use grotto_walls::ProjectFile;

/// Convert a project with the default configuration.
pub fn convert_to_walls(project: &ProjectInput) -> Result<ProjectFile, ConvertError> {
    Converter::default().convert_project(project)
}
