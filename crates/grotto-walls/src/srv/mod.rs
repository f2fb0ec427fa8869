//! Survey file (`.srv`) content.

mod shot;
mod units;

pub use shot::{FixDirective, Lruds, Shot, Sighting, StationLruds};
pub use units::{BacksightType, LrudStyle, TapingMethod, UnitsOption};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The ordered lines of one survey file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SrvFile {
    pub lines: Vec<SrvLine>,
}

impl SrvFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: SrvLine) {
        self.lines.push(line);
    }

    /// Shot lines only, in order.
    pub fn shots(&self) -> impl Iterator<Item = &Shot> {
        self.lines.iter().filter_map(|line| match line {
            SrvLine::Shot(shot) => Some(shot),
            _ => None,
        })
    }
}

impl From<Vec<SrvLine>> for SrvFile {
    fn from(lines: Vec<SrvLine>) -> Self {
        Self { lines }
    }
}

impl FromIterator<SrvLine> for SrvFile {
    fn from_iter<I: IntoIterator<Item = SrvLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// One line (or block) of a survey file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SrvLine {
    /// A comment. Text containing line breaks is a block comment.
    Comment(String),
    /// `#DATE`
    Date(NaiveDate),
    /// `#UNITS` with the options in the order given.
    Units(Vec<UnitsOption>),
    /// LRUDs at a station with no shot on the same line.
    StationLruds(StationLruds),
    Shot(Shot),
    /// `#FIX`
    Fix(FixDirective),
}

impl SrvLine {
    pub fn comment(text: impl Into<String>) -> Self {
        SrvLine::Comment(text.into())
    }

    pub fn date(date: NaiveDate) -> Self {
        SrvLine::Date(date)
    }

    pub fn units(options: Vec<UnitsOption>) -> Self {
        SrvLine::Units(options)
    }

    pub fn station_lruds(station: impl Into<String>, lruds: Lruds) -> Self {
        SrvLine::StationLruds(StationLruds {
            station: station.into(),
            lruds,
        })
    }

    pub fn is_units(&self) -> bool {
        matches!(self, SrvLine::Units(_))
    }
}

impl From<Shot> for SrvLine {
    fn from(shot: Shot) -> Self {
        SrvLine::Shot(shot)
    }
}

impl From<FixDirective> for SrvLine {
    fn from(fix: FixDirective) -> Self {
        SrvLine::Fix(fix)
    }
}
