use std::path::PathBuf;

use anyhow::{Context, Result};
use citygen::{
    ActivationSignal, CityConfig, CityGenerator, CityRenderer, GenerationReport, Landmarks,
    Placement, PrefabVariant, find_landmarks, furnish,
};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tools::{catalog_is_empty, init_logging, placeholder_catalog};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML city configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Host signal being simulated; generation runs only if the configured activation fires on it
    #[arg(long, value_enum, default_value_t = Signal::LevelStart)]
    signal: Signal,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Log filter, overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Signal {
    LevelStart,
    Event,
    RegionEntered,
}

impl From<Signal> for ActivationSignal {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::LevelStart => Self::LevelStart,
            Signal::Event => Self::Event,
            Signal::RegionEntered => Self::RegionEntered,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Ascii,
}

#[derive(Serialize)]
struct Building {
    prefab: String,
    #[serde(flatten)]
    placement: Placement,
}

#[derive(Default)]
struct JsonScene {
    buildings: Vec<Building>,
}

impl CityRenderer for JsonScene {
    fn place(&mut self, placement: &Placement, variant: &PrefabVariant) {
        self.buildings.push(Building { prefab: variant.name.clone(), placement: placement.clone() });
    }
}

#[derive(Serialize)]
struct CityDump<'a> {
    seed: u64,
    fingerprint: String,
    report: &'a GenerationReport,
    landmarks: Option<Landmarks>,
    buildings: Vec<Building>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let mut config = match &args.config {
        Some(path) => CityConfig::load(path)
            .with_context(|| format!("Failed to load city config: {}", path.display()))?,
        None => CityConfig::default(),
    };
    if catalog_is_empty(&config.catalog) {
        config.catalog = placeholder_catalog();
    }

    if !config.activation.fires_on(args.signal.into()) {
        info!(activation = ?config.activation, "signal does not activate generation");
        return Ok(());
    }

    let generator = CityGenerator::new(args.seed);
    let city = generator.generate(&config).context("City generation failed")?;
    let placements: Vec<Placement> = city.emit(&config.catalog).collect();

    match args.format {
        OutputFormat::Ascii => print!("{}", city.render_ascii()),
        OutputFormat::Json => {
            let mut scene = JsonScene::default();
            furnish(
                placements.iter().cloned(),
                &config.catalog,
                &mut generator.furnish_rng(),
                &mut scene,
            );
            let dump = CityDump {
                seed: args.seed,
                fingerprint: format!("{:016x}", city.fingerprint()),
                report: &city.report,
                landmarks: find_landmarks(&placements),
                buildings: scene.buildings,
            };
            let json = serde_json::to_string_pretty(&dump)
                .with_context(|| "Failed to serialize city JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}
