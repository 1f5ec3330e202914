use std::io;

/// Precondition failures detected before a generation run allocates anything.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("target zone count must be positive, the map side would be zero")]
    EmptyCity,

    #[error("target zone count {requested} exceeds the supported maximum of {max}")]
    CityTooLarge { requested: u32, max: u32 },

    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),

    #[error("city origin must have finite coordinates")]
    InvalidOrigin,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[source] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] GenerationError),
}
