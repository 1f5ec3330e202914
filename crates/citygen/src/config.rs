//! City generation settings loaded from TOML and validated once per run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activation::ActivationMode;
use crate::error::{ConfigError, GenerationError};
use crate::mapgen::WorldFrame;
use crate::prefab::PrefabCatalog;
use crate::types::WorldPos;

pub const MAX_TARGET_ZONE_COUNT: u32 = 1_000_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CityConfig {
    pub target_zone_count: u32,
    /// Soft cap on stamped big sectors.
    pub big_sector_budget: u32,
    /// Packing attempts; `None` spends one attempt per target zone.
    pub pack_attempts: Option<u32>,
    pub cell_size: f32,
    pub origin: WorldPos,
    pub activation: ActivationMode,
    pub catalog: PrefabCatalog,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            target_zone_count: 200,
            big_sector_budget: 500,
            pack_attempts: None,
            cell_size: 20.0,
            origin: WorldPos::ORIGIN,
            activation: ActivationMode::default(),
            catalog: PrefabCatalog::default(),
        }
    }
}

impl CityConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        self.map_size()?;
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(GenerationError::InvalidCellSize(self.cell_size));
        }
        if !self.origin.is_finite() {
            return Err(GenerationError::InvalidOrigin);
        }
        Ok(())
    }

    /// Side of the square lattice: `floor(sqrt(4 * target_zone_count))`.
    pub fn map_size(&self) -> Result<usize, GenerationError> {
        if self.target_zone_count > MAX_TARGET_ZONE_COUNT {
            return Err(GenerationError::CityTooLarge {
                requested: self.target_zone_count,
                max: MAX_TARGET_ZONE_COUNT,
            });
        }
        let size = (u64::from(self.target_zone_count) * 4).isqrt() as usize;
        if size == 0 {
            return Err(GenerationError::EmptyCity);
        }
        Ok(size)
    }

    pub fn pack_attempt_budget(&self) -> usize {
        self.pack_attempts.unwrap_or(self.target_zone_count) as usize
    }

    pub fn frame(&self) -> WorldFrame {
        WorldFrame { cell_size: self.cell_size, origin: self.origin }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::types::{BigSector, ShapeFamily};

    #[test]
    fn map_size_follows_square_root_of_four_times_target() {
        let cases = [(1, 2), (2, 2), (3, 3), (9, 6), (10, 6), (200, 28), (250, 31)];
        for (target, expected) in cases {
            let config = CityConfig { target_zone_count: target, ..CityConfig::default() };
            assert_eq!(config.map_size(), Ok(expected), "target={target}");
        }
    }

    #[test]
    fn zero_target_is_rejected_before_allocation() {
        let config = CityConfig { target_zone_count: 0, ..CityConfig::default() };
        assert_eq!(config.validate(), Err(GenerationError::EmptyCity));
    }

    #[test]
    fn oversized_target_is_rejected() {
        let config = CityConfig { target_zone_count: u32::MAX, ..CityConfig::default() };
        assert!(matches!(config.validate(), Err(GenerationError::CityTooLarge { .. })));
    }

    #[test]
    fn cell_size_must_be_positive_and_finite() {
        for cell_size in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let config = CityConfig { cell_size, ..CityConfig::default() };
            assert!(matches!(config.validate(), Err(GenerationError::InvalidCellSize(_))));
        }
    }

    #[test]
    fn non_finite_origin_is_rejected() {
        let config =
            CityConfig { origin: WorldPos::new(0.0, f32::NAN, 0.0), ..CityConfig::default() };
        assert_eq!(config.validate(), Err(GenerationError::InvalidOrigin));
    }

    #[test]
    fn pack_attempts_default_to_target_zone_count() {
        let config = CityConfig::default();
        assert_eq!(config.pack_attempt_budget(), 200);
        let config = CityConfig { pack_attempts: Some(12), ..CityConfig::default() };
        assert_eq!(config.pack_attempt_budget(), 12);
    }

    #[test]
    fn parses_full_toml_document() {
        let config = CityConfig::from_toml_str(
            r#"
            target_zone_count = 64
            big_sector_budget = 8
            cell_size = 12.5
            origin = { x = 1.0, y = 2.0, z = 3.0 }
            activation = "trigger"

            [[catalog.single]]
            name = "house"
            verity = 3

            [[catalog.square]]
            name = "plaza"
            connections = [{ side = "north", is_entry = true }]
            "#,
        )
        .expect("valid config should parse");

        assert_eq!(config.target_zone_count, 64);
        assert_eq!(config.big_sector_budget, 8);
        assert_eq!(config.origin, WorldPos::new(1.0, 2.0, 3.0));
        assert_eq!(config.activation, ActivationMode::Trigger);
        assert_eq!(config.catalog.variants(ShapeFamily::Single)[0].verity, 3);
        assert_eq!(config.catalog.variants(ShapeFamily::Square)[0].verity, 1);
        assert!(config.catalog.variants(ShapeFamily::Domino).is_empty());
    }

    #[test]
    fn bundled_demo_config_is_valid() {
        let config = CityConfig::from_toml_str(include_str!("../../../demos/city.toml"))
            .expect("demo config should parse");
        assert_eq!(config.map_size(), Ok(28));
        for sector in BigSector::ALL {
            assert!(config.catalog.has_variants(sector.into()), "{sector:?}");
        }
    }

    #[test]
    fn unknown_fields_are_parse_errors() {
        let err = CityConfig::from_toml_str("zone_count = 10").expect_err("typo should fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_surface_as_invalid_config() {
        let err = CityConfig::from_toml_str("target_zone_count = 0").expect_err("zero zones");
        assert!(matches!(err, ConfigError::Invalid(GenerationError::EmptyCity)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "target_zone_count = 9\nbig_sector_budget = 0").expect("write config");
        let config = CityConfig::load(file.path()).expect("config should load");
        assert_eq!(config.map_size(), Ok(6));
        assert_eq!(config.big_sector_budget, 0);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = CityConfig::load(&dir.path().join("absent.toml")).expect_err("no file");
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
