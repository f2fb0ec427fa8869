//! Conversion inputs: a project title and the caves that go into it.

use grotto_frcs::{SurveyFile, TripSummaryFile};
use grotto_walls::{FixDirective, Georeference};

/// Everything needed to build one Walls project.
#[derive(Debug, Clone)]
pub struct ProjectInput {
    pub title: String,
    pub name: Option<String>,
    pub caves: Vec<InputCave>,
}

impl ProjectInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            name: None,
            caves: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_cave(mut self, cave: InputCave) -> Self {
        self.caves.push(cave);
        self
    }
}

/// One cave's parsed data.
#[derive(Debug, Clone)]
pub struct InputCave {
    /// Directory token: book path, and station prefix in multicave projects.
    pub subdir: String,
    /// Overrides the prefix put in front of survey short names.
    pub name_prefix: Option<String>,
    pub survey: SurveyFile,
    pub summaries: Option<TripSummaryFile>,
    pub fixed_stations: Option<Vec<FixDirective>>,
    pub georeference: Option<Georeference>,
}

impl InputCave {
    pub fn new(subdir: impl Into<String>, survey: SurveyFile) -> Self {
        Self {
            subdir: subdir.into(),
            name_prefix: None,
            survey,
            summaries: None,
            fixed_stations: None,
            georeference: None,
        }
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = Some(prefix.into());
        self
    }

    pub fn with_summaries(mut self, summaries: TripSummaryFile) -> Self {
        self.summaries = Some(summaries);
        self
    }

    pub fn with_fixed_stations(mut self, stations: Vec<FixDirective>) -> Self {
        self.fixed_stations = Some(stations);
        self
    }

    pub fn with_georeference(mut self, georeference: Georeference) -> Self {
        self.georeference = Some(georeference);
        self
    }
}
