//! Trip summaries (`STAT_sum.txt`).

use chrono::NaiveDate;
use grotto_units::Length;
use serde::{Deserialize, Serialize};

/// Parsed trip summary file, index-aligned with [`crate::SurveyFile::trips`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripSummaryFile {
    pub trip_summaries: Vec<Option<TripSummary>>,
}

impl TripSummaryFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, summary: TripSummary) -> Self {
        self.trip_summaries.push(Some(summary));
        self
    }

    pub fn with_gap(mut self) -> Self {
        self.trip_summaries.push(None);
        self
    }

    /// The summary in the same slot as trip `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<&TripSummary> {
        self.trip_summaries.get(index).and_then(Option::as_ref)
    }
}

/// Authoritative trip metadata from the summary file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub trip_number: u32,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub team: Vec<String>,
    /// Total surveyed footage as tallied in the summary.
    pub footage: Option<Length>,
}

impl TripSummary {
    pub fn new(trip_number: u32, name: impl Into<String>) -> Self {
        Self {
            trip_number,
            name: name.into(),
            date: None,
            team: Vec::new(),
            footage: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_team<I, S>(mut self, team: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team = team.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_footage(mut self, footage: Length) -> Self {
        self.footage = Some(footage);
        self
    }
}
