pub mod activation;
pub mod config;
pub mod connector;
pub mod error;
pub mod landmarks;
pub mod mapgen;
pub mod prefab;
pub mod types;

pub use activation::{ActivationMode, ActivationSignal};
pub use config::{CityConfig, MAX_TARGET_ZONE_COUNT};
pub use connector::{Connection, ConnectionSide};
pub use error::{ConfigError, GenerationError};
pub use landmarks::{Landmarks, find_landmarks};
pub use mapgen::{
    CityGenerator, GeneratedCity, GenerationReport, Placement, Placements, WorldFrame, generate,
};
pub use prefab::{CityRenderer, PrefabCatalog, PrefabVariant, furnish, select_weighted};
pub use types::*;
