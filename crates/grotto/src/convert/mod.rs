//! Project and cave conversion.
//!
//! ```text
//! ProjectInput ──> convert_project ──┬─ one cave:   cave book is the root
//!                                    └─ otherwise:  root book ─> cave books (PREFIX=<subdir>)
//! InputCave    ──> convert_cave    ──> Book [ fix survey?, trip surveys... ]
//! Trip         ──> convert_trip    ──> Survey (see `trip`)
//! ```

mod shot;
mod trip;

pub use trip::ResolvedHeader;

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::input::{InputCave, ProjectInput};
use grotto_walls::{Book, ProjectFile, SrvLine, Survey};

/// Converts FRCS input into a Walls project tree.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert a whole project.
    ///
    /// A single cave becomes the root book itself. Any other number of caves
    /// (including none) is wrapped in a root book with one child book per
    /// cave, each prefixing its station names with its subdir.
    pub fn convert_project(&self, project: &ProjectInput) -> Result<ProjectFile, ConvertError> {
        tracing::debug!(
            title = %project.title,
            caves = project.caves.len(),
            "converting project"
        );

        if let [cave] = project.caves.as_slice() {
            let mut root = self.convert_cave(cave, false)?;
            root.title = project.title.clone();
            root.name = project.name.clone();
            return Ok(ProjectFile::new(root));
        }

        let mut root = Book::new(&project.title)
            .with_name(project.name.clone())
            .with_review_distance_unit(self.config.review_distance_unit());
        for cave in &project.caves {
            root.push(self.convert_cave(cave, true)?);
        }
        Ok(ProjectFile::new(root))
    }

    /// Convert one cave into a book of surveys.
    pub fn convert_cave(&self, cave: &InputCave, multicave: bool) -> Result<Book, ConvertError> {
        let prefix = match &cave.name_prefix {
            Some(prefix) => prefix.as_str(),
            None if multicave => cave.subdir.as_str(),
            None => "",
        };
        tracing::debug!(
            subdir = %cave.subdir,
            trips = cave.survey.trips.len(),
            prefix,
            multicave,
            "converting cave"
        );

        let title = cave.survey.cave.as_deref().unwrap_or(&cave.subdir);
        let mut book = Book::new(title)
            .with_path(&cave.subdir)
            .with_review_distance_unit(self.config.review_distance_unit())
            .with_georeference(cave.georeference.clone());
        if multicave {
            book = book.with_options(format!("PREFIX={}", cave.subdir));
        }

        if let Some(stations) = &cave.fixed_stations {
            let content = stations.iter().cloned().map(SrvLine::Fix).collect();
            book.push(Survey::new(
                self.config.fixed_stations_title(),
                format!("{prefix}fix"),
                content,
            ));
        }

        for (index, trip) in cave.survey.present_trips() {
            let summary = cave
                .summaries
                .as_ref()
                .and_then(|summaries| summaries.get(index));
            book.push(self.convert_trip(index, trip, summary, prefix)?);
        }

        Ok(book)
    }
}
