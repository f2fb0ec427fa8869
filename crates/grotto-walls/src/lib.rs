//! In-memory model of Walls survey projects.
//!
//! A Walls project is a `.wpj` tree of books and surveys; each survey is backed
//! by an `.srv` file holding comments, `#` directives and shot lines. This
//! crate models both levels so that converters can build a project and hand it
//! to a writer without going through text.
//!
//! # Architecture
//!
//! ```text
//! ProjectFile (wpj)
//! └── root: Book
//!     ├── Book ...                       (.BOOK / .ENDBOOK)
//!     └── Survey                         (.SURVEY, .NAME)
//!         └── content: SrvFile (srv)
//!             ├── Comment                ;text  or  #[ ... #]
//!             ├── Date                   #DATE
//!             ├── Units([UnitsOption])   #UNITS ...
//!             ├── StationLruds           STATION <l,r,u,d>
//!             ├── Shot                   FROM TO DIST AZ INCL <l,r,u,d> ;comment
//!             └── Fix                    #FIX
//! ```

pub mod srv;
pub mod wpj;

pub use srv::{
    BacksightType, FixDirective, LrudStyle, Lruds, Shot, Sighting, SrvFile, SrvLine,
    StationLruds, TapingMethod, UnitsOption,
};
pub use wpj::{Book, DisplayLatLongFormat, Georeference, ProjectFile, ProjectNode, Survey};
