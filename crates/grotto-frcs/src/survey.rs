//! The parsed survey file.

use crate::trip::Trip;
use serde::{Deserialize, Serialize};

/// A parsed `cdata.fr` survey file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SurveyFile {
    /// Cave name declared at the top of the file, if any.
    pub cave: Option<String>,
    /// Trips in file order. A `None` slot is a trip number with no data; later
    /// trips keep their positions.
    pub trips: Vec<Option<Trip>>,
}

impl SurveyFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cave(mut self, cave: impl Into<String>) -> Self {
        self.cave = Some(cave.into());
        self
    }

    pub fn with_trip(mut self, trip: Trip) -> Self {
        self.trips.push(Some(trip));
        self
    }

    /// Leave an empty slot at the next trip index.
    pub fn with_gap(mut self) -> Self {
        self.trips.push(None);
        self
    }

    /// Trips that are present, with their slot index.
    pub fn present_trips(&self) -> impl Iterator<Item = (usize, &Trip)> {
        self.trips
            .iter()
            .enumerate()
            .filter_map(|(index, trip)| trip.as_ref().map(|trip| (index, trip)))
    }
}
