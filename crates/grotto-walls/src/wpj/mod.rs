//! Project file (`.wpj`) tree.

mod georeference;

pub use georeference::{DisplayLatLongFormat, Georeference};

use crate::srv::SrvFile;
use grotto_units::LengthUnit;
use serde::{Deserialize, Serialize};

/// A Walls project: a single root book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub root: Book,
}

impl ProjectFile {
    pub fn new(root: Book) -> Self {
        Self { root }
    }
}

/// A child of a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectNode {
    Book(Book),
    Survey(Survey),
}

impl ProjectNode {
    /// `.BOOK` / `.SURVEY` title.
    pub fn title(&self) -> &str {
        match self {
            ProjectNode::Book(book) => &book.title,
            ProjectNode::Survey(survey) => &survey.title,
        }
    }

    pub fn as_book(&self) -> Option<&Book> {
        match self {
            ProjectNode::Book(book) => Some(book),
            ProjectNode::Survey(_) => None,
        }
    }

    pub fn as_survey(&self) -> Option<&Survey> {
        match self {
            ProjectNode::Book(_) => None,
            ProjectNode::Survey(survey) => Some(survey),
        }
    }
}

impl From<Book> for ProjectNode {
    fn from(book: Book) -> Self {
        ProjectNode::Book(book)
    }
}

impl From<Survey> for ProjectNode {
    fn from(survey: Survey) -> Self {
        ProjectNode::Survey(survey)
    }
}

/// A folder-like grouping of books and surveys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// `.BOOK`
    pub title: String,
    /// `.NAME`
    pub name: Option<String>,
    /// `.PATH`: directory holding this book's survey files.
    pub path: Option<String>,
    /// `.OPTIONS`, e.g. `PREFIX=fr`.
    pub options: Option<String>,
    /// Unit used when reviewing statistics for this book.
    pub review_distance_unit: Option<LengthUnit>,
    /// `.REF`
    pub georeference: Option<Georeference>,
    pub children: Vec<ProjectNode>,
}

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            name: None,
            path: None,
            options: None,
            review_distance_unit: None,
            georeference: None,
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_options(mut self, options: impl Into<String>) -> Self {
        self.options = Some(options.into());
        self
    }

    pub fn with_review_distance_unit(mut self, unit: LengthUnit) -> Self {
        self.review_distance_unit = Some(unit);
        self
    }

    pub fn with_georeference(mut self, georeference: Option<Georeference>) -> Self {
        self.georeference = georeference;
        self
    }

    pub fn push(&mut self, child: impl Into<ProjectNode>) {
        self.children.push(child.into());
    }

    /// Direct child books.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.children.iter().filter_map(ProjectNode::as_book)
    }

    /// Direct child surveys.
    pub fn surveys(&self) -> impl Iterator<Item = &Survey> {
        self.children.iter().filter_map(ProjectNode::as_survey)
    }

    /// Direct child survey with the given short name.
    pub fn survey(&self, name: &str) -> Option<&Survey> {
        self.surveys().find(|survey| survey.name == name)
    }
}

/// A leaf of the project tree backed by one survey file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// `.SURVEY`
    pub title: String,
    /// `.NAME`: also the survey file's base name.
    pub name: String,
    pub content: SrvFile,
    /// The short name is also used as the station name segment.
    pub name_defines_segment: bool,
    pub review_distance_unit: Option<LengthUnit>,
}

impl Survey {
    pub fn new(title: impl Into<String>, name: impl Into<String>, content: SrvFile) -> Self {
        Self {
            title: title.into(),
            name: name.into(),
            content,
            name_defines_segment: false,
            review_distance_unit: None,
        }
    }

    pub fn with_name_defines_segment(mut self, defines: bool) -> Self {
        self.name_defines_segment = defines;
        self
    }

    pub fn with_review_distance_unit(mut self, unit: LengthUnit) -> Self {
        self.review_distance_unit = Some(unit);
        self
    }
}
