//! Prefab variant catalogs, weighted variant selection and the renderer seam.

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::connector::{Connection, ConnectionSide, is_matching_connection};
use crate::mapgen::seed::random_inclusive;
use crate::mapgen::Placement;
use crate::types::ShapeFamily;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefabVariant {
    pub name: String,
    /// Relative selection weight.
    #[serde(default = "default_verity")]
    pub verity: u32,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

fn default_verity() -> u32 {
    1
}

impl PrefabVariant {
    pub fn new(name: impl Into<String>, verity: u32) -> Self {
        Self { name: name.into(), verity, connections: Vec::new() }
    }

    pub fn accepts(&self, side: ConnectionSide, is_entry: bool) -> bool {
        is_matching_connection(&self.connections, side, is_entry)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefabCatalog {
    #[serde(default)]
    pub single: Vec<PrefabVariant>,
    #[serde(default)]
    pub domino: Vec<PrefabVariant>,
    #[serde(default)]
    pub corner: Vec<PrefabVariant>,
    #[serde(default)]
    pub square: Vec<PrefabVariant>,
}

impl PrefabCatalog {
    pub fn variants(&self, family: ShapeFamily) -> &[PrefabVariant] {
        match family {
            ShapeFamily::Single => &self.single,
            ShapeFamily::Domino => &self.domino,
            ShapeFamily::Corner => &self.corner,
            ShapeFamily::Square => &self.square,
        }
    }

    pub fn has_variants(&self, family: ShapeFamily) -> bool {
        !self.variants(family).is_empty()
    }

    /// Picks one variant of `family` by verity, `None` when the family has no variants.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        family: ShapeFamily,
        rng: &mut R,
    ) -> Option<&PrefabVariant> {
        let variants = self.variants(family);
        if variants.is_empty() {
            return None;
        }
        let weights: Vec<u32> = variants.iter().map(|variant| variant.verity).collect();
        variants.get(select_weighted(&weights, rng))
    }
}

/// Weighted single draw over `weights`.
///
/// Draws uniformly in `1..=sum` and returns the first index whose running
/// total reaches the draw. An empty or all-zero list falls back to index `0`.
pub fn select_weighted<R: Rng + ?Sized>(weights: &[u32], rng: &mut R) -> usize {
    let total: u64 = weights.iter().map(|&weight| u64::from(weight)).sum();
    if total == 0 {
        warn!(variants = weights.len(), "all prefab weights are zero, defaulting to the first");
        return 0;
    }

    let draw = random_inclusive(rng, 1, total);
    let mut running = 0_u64;
    for (index, &weight) in weights.iter().enumerate() {
        running += u64::from(weight);
        if running >= draw {
            return index;
        }
    }
    weights.len() - 1
}

/// Instantiates the visual asset for one placement.
pub trait CityRenderer {
    fn place(&mut self, placement: &Placement, variant: &PrefabVariant);
}

/// Hands every placement to `renderer` with a variant chosen by verity.
/// Returns how many placements were rendered.
pub fn furnish<I, R, C>(
    placements: I,
    catalog: &PrefabCatalog,
    rng: &mut R,
    renderer: &mut C,
) -> usize
where
    I: IntoIterator<Item = Placement>,
    R: Rng + ?Sized,
    C: CityRenderer + ?Sized,
{
    let mut rendered = 0;
    for placement in placements {
        let Some(variant) = catalog.pick(placement.family, rng) else {
            warn!(family = ?placement.family, grid = ?placement.grid, "no prefab variants, skipping");
            continue;
        };
        renderer.place(&placement, variant);
        rendered += 1;
    }
    rendered
}
