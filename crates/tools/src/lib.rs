//! Shared setup for the command-line tools.

use std::io;

use citygen::{PrefabCatalog, PrefabVariant};
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber. An explicit `level` wins over `RUST_LOG`,
/// which wins over the `info` default.
pub fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init();
}

/// One variant per family, named after the family, for configs without a catalog.
pub fn placeholder_catalog() -> PrefabCatalog {
    PrefabCatalog {
        single: vec![PrefabVariant::new("single", 1)],
        domino: vec![PrefabVariant::new("domino", 1)],
        corner: vec![PrefabVariant::new("corner", 1)],
        square: vec![PrefabVariant::new("square", 1)],
    }
}

pub fn catalog_is_empty(catalog: &PrefabCatalog) -> bool {
    catalog.single.is_empty()
        && catalog.domino.is_empty()
        && catalog.corner.is_empty()
        && catalog.square.is_empty()
}

#[cfg(test)]
mod tests {
    use citygen::ShapeFamily;

    use super::*;

    #[test]
    fn placeholder_catalog_covers_every_family() {
        let catalog = placeholder_catalog();
        assert!(!catalog_is_empty(&catalog));
        for family in
            [ShapeFamily::Single, ShapeFamily::Domino, ShapeFamily::Corner, ShapeFamily::Square]
        {
            assert_eq!(catalog.variants(family).len(), 1);
        }
    }

    #[test]
    fn default_catalog_is_empty() {
        assert!(catalog_is_empty(&PrefabCatalog::default()));
    }
}
