//! Error types for conversion and configuration.

/// Error that aborts a conversion.
///
/// There is no partial output: the first error ends the whole project.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(
        "trip {trip}, shot {shot} ({}): horizontal distance must be provided when kind is horizontal",
        describe_stations(.from.as_deref(), .to.as_deref())
    )]
    MissingHorizontalDistance {
        /// Resolved trip number.
        trip: u32,
        /// Zero-based index of the shot within its trip.
        shot: usize,
        from: Option<String>,
        to: Option<String>,
    },
}

/// Error loading a [`crate::ConvertConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("backsight tolerance must be a non-negative number of degrees, got {0}")]
    InvalidTolerance(f64),
}

fn describe_stations(from: Option<&str>, to: Option<&str>) -> String {
    format!("{} -> {}", from.unwrap_or("?"), to.unwrap_or("?"))
}
