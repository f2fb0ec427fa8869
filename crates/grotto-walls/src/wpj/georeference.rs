//! `.REF` georeference data.

use grotto_units::{Angle, Length};
use serde::{Deserialize, Serialize};

/// How latitude/longitude are shown in the Walls UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayLatLongFormat {
    #[default]
    Degrees,
    DegreesMinutes,
    DegreesMinutesSeconds,
}

/// Coordinate reference attached to a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Georeference {
    pub display_lat_long_format: DisplayLatLongFormat,
    /// Negative for the southern hemisphere.
    pub utm_zone: i32,
    pub utm_northing: Length,
    pub utm_easting: Length,
    pub utm_convergence_angle: Angle,
    pub elevation: Length,
    pub latitude: Angle,
    pub longitude: Angle,
    /// Index into Walls' datum table.
    pub walls_datum_index: u32,
    pub datum: String,
}
