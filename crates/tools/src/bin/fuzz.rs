use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use citygen::mapgen::template;
use citygen::{Cell, CityConfig, CityGenerator, GeneratedCity, GridPos};
use clap::Parser;
use tools::{catalog_is_empty, init_logging, placeholder_catalog};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u64,
    /// Base TOML config; the target zone count is varied per run
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 400)]
    max_zones: u32,
}

fn check_invariants(city: &GeneratedCity, config: &CityConfig) -> Result<(), String> {
    let mut claimed = BTreeSet::new();
    for pos in city.grid.positions() {
        let cells: Vec<GridPos> = match city.cell_at(pos) {
            Cell::Void => continue,
            Cell::Zone => vec![pos],
            Cell::Anchor(sector, orientation) => template(sector, orientation).cells(pos).collect(),
        };
        for cell in cells {
            if !claimed.insert(cell) {
                return Err(format!("Invariant failed: cell {cell:?} claimed twice"));
            }
        }
        if city.size() >= 3 && !city.grid.is_interior(pos) {
            return Err(format!("Invariant failed: outer ring cell {pos:?} occupied"));
        }
    }

    let reachable = city.size().saturating_sub(2).pow(2).saturating_sub(1);
    let expected_grown = (config.target_zone_count as usize).min(reachable);
    if city.report.zones_grown != expected_grown {
        return Err(format!(
            "Invariant failed: grew {} zones, expected {expected_grown}",
            city.report.zones_grown
        ));
    }
    if city.report.sectors_stamped > config.big_sector_budget as usize {
        return Err("Invariant failed: sector budget exceeded".to_string());
    }

    let first: Vec<_> = city.emit(&config.catalog).collect();
    let second: Vec<_> = city.emit(&config.catalog).collect();
    if first != second {
        return Err("Invariant failed: emission is not repeatable".to_string());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(Some("warn"));

    let mut base = match &args.config {
        Some(path) => CityConfig::load(path)
            .with_context(|| format!("Failed to load city config: {}", path.display()))?,
        None => CityConfig::default(),
    };
    if catalog_is_empty(&base.catalog) {
        base.catalog = placeholder_catalog();
    }

    println!("Starting fuzz harness on seed {} for {} runs...", args.seed, args.runs);
    let mut stamped_total = 0usize;
    for run in 0..args.runs {
        let seed = args.seed.wrapping_add(run);
        let config = CityConfig {
            target_zone_count: 1 + (seed % u64::from(args.max_zones.max(1))) as u32,
            ..base.clone()
        };
        let generator = CityGenerator::new(seed);
        let city = generator.generate(&config).context("City generation failed")?;
        let replay = generator.generate(&config).context("City generation failed")?;

        if city.fingerprint() != replay.fingerprint() {
            bail!("Invariant failed: seed {seed} is not deterministic");
        }
        if let Err(message) = check_invariants(&city, &config) {
            bail!("{message} (seed {seed}, zones {})", config.target_zone_count);
        }
        stamped_total += city.report.sectors_stamped;
    }

    println!("Fuzz complete: {} runs, {} big sectors stamped.", args.runs, stamped_total);
    Ok(())
}
