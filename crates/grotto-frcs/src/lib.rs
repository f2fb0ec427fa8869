//! In-memory model of parsed FRCS survey data.
//!
//! FRCS (Fisher Ridge Cave System) data is kept as a `cdata.fr` survey file
//! holding one block per trip, plus an optional `STAT_sum.txt` with
//! authoritative trip numbers, dates and teams. This crate only models the
//! parsed result; reading the text formats happens elsewhere.
//!
//! ```text
//! SurveyFile
//! ├── cave: Option<String>
//! └── trips: [Option<Trip>]          (sparse, index-aligned with summaries)
//!     ├── header: TripHeader          (name, team, date, units, backsight flags)
//!     └── shots: [Shot]               (kind, stations, readings, LRUDs, comment)
//!
//! TripSummaryFile
//! └── trip_summaries: [Option<TripSummary>]
//! ```

pub mod summary;
pub mod survey;
pub mod trip;

pub use summary::{TripSummary, TripSummaryFile};
pub use survey::SurveyFile;
pub use trip::{Lruds, Shot, ShotKind, Trip, TripHeader};
