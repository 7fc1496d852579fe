//! Command line renderer.
//!
//! Installs the bundled render addons into an [`AddonManager`], builds a
//! scene from an OBJ file or one of the preset scenes, renders it with the
//! selected engine and writes the result as a PNG.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use lumen_core::{ImportOptions, PresetScene, Resolution, import_obj, load_preset};
use lumen_engine_cosmic::{CosmicAddon, CosmicEngine};
use lumen_engine_king::{KingAddon, KingEngine};
use lumen_host::{AddonManager, HostContext, HostVersion, RenderSettings};

/// Host version reported to addons at install time.
const HOST_VERSION: HostVersion = HostVersion::new(4, 5, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Cosmic,
    King,
}

impl EngineKind {
    fn engine_name(self) -> &'static str {
        match self {
            EngineKind::Cosmic => CosmicEngine::NAME,
            EngineKind::King => KingEngine::NAME,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    Spheres,
    SingleSphere,
    SphereArray,
    Cube,
}

impl From<Preset> for PresetScene {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Spheres => PresetScene::Spheres,
            Preset::SingleSphere => PresetScene::SingleSphere,
            Preset::SphereArray => PresetScene::SphereArray,
            Preset::Cube => PresetScene::Cube,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lumen", about = "CPU renderer with pluggable engines")]
struct Cli {
    /// Render engine to use.
    #[arg(long, value_enum, default_value_t = EngineKind::Cosmic)]
    engine: EngineKind,

    /// Samples per pixel.
    #[arg(short, long, default_value_t = 1)]
    samples: u32,

    /// Maximum path length per sample.
    #[arg(short, long, default_value_t = 4)]
    bounces: u32,

    /// Output width in pixels.
    #[arg(short = 'x', long, default_value_t = 1920)]
    width: u32,

    /// Output height in pixels.
    #[arg(short = 'y', long, default_value_t = 1080)]
    height: u32,

    /// Worker threads, 0 for all available cores.
    #[arg(short = 'm', long, default_value_t = 0)]
    threads: usize,

    /// Output PNG path.
    #[arg(short, long)]
    output: PathBuf,

    /// OBJ file to render instead of a preset scene.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Preset scene, ignored when --input is given.
    #[arg(long, value_enum, default_value_t = Preset::Spheres)]
    preset: Preset,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "lumen=info".into()))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut manager = AddonManager::new(HostContext::new(HOST_VERSION));
    manager.install(Box::new(CosmicAddon::new()))?;
    manager.install(Box::new(KingAddon::new()))?;
    manager.enable("Cosmic Render Engine")?;
    manager.enable("King Render Engine")?;

    let resolution = Resolution::new(cli.width, cli.height);
    let (scene, camera) = match &cli.input {
        Some(path) => import_obj(path, resolution, &ImportOptions::default())
            .with_context(|| format!("importing {}", path.display()))?,
        None => {
            let mut rng = StdRng::from_entropy();
            load_preset(cli.preset.into(), resolution, &mut rng)
                .context("building preset scene")?
        }
    };

    let engine_name = cli.engine.engine_name();
    let engine = manager
        .engine(engine_name)
        .with_context(|| format!("engine {engine_name} is not registered"))?;

    let settings = RenderSettings {
        samples: cli.samples,
        max_bounces: cli.bounces,
        threads: cli.threads,
    };

    let start = Instant::now();
    let film = engine.render(&scene, &camera, &settings)?;
    tracing::info!(
        engine = engine_name,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "render finished"
    );

    let image = image::RgbaImage::from_raw(cli.width, cli.height, film.into_raw())
        .context("film buffer does not match the requested resolution")?;
    image
        .save(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    tracing::info!(output = %cli.output.display(), "image written");

    Ok(())
}
