//! reef-sim - Reefscape headless driver
//!
//! Inspects mesh files and runs the underwater scene for a number of frames
//! without opening a window.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use reefscape_core::{BoundsSeed, MeshAsset, RenderStyle, SceneConfig, SceneRuntime};

#[derive(Parser)]
#[command(name = "reef-sim")]
#[command(about = "Reefscape headless scene driver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a mesh file's counts and bounding geometry
    Inspect {
        /// Input mesh file (v/f text format)
        input: PathBuf,

        /// Starting value for extremum tracking
        #[arg(long, value_enum, default_value_t = SeedArg::Origin)]
        bounds_seed: SeedArg,
    },

    /// Run the scene for a number of frames
    Simulate {
        /// Path to reefscape.toml manifest
        #[arg(short, long, default_value = "reefscape.toml")]
        config: PathBuf,

        /// Frames to run
        #[arg(short, long, default_value_t = 300)]
        frames: u64,

        /// Seed (overrides manifest)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeedArg {
    Origin,
    FirstVertex,
}

impl From<SeedArg> for BoundsSeed {
    fn from(arg: SeedArg) -> Self {
        match arg {
            SeedArg::Origin => BoundsSeed::Origin,
            SeedArg::FirstVertex => BoundsSeed::FirstVertex,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { input, bounds_seed } => inspect(&input, bounds_seed.into()),
        Commands::Simulate {
            config,
            frames,
            seed,
        } => simulate(&config, frames, seed),
    }
}

fn inspect(input: &Path, seed: BoundsSeed) -> Result<()> {
    tracing::info!("Inspecting {:?}", input);
    let mesh = MeshAsset::load_with(input, RenderStyle::default(), seed)
        .with_context(|| format!("Failed to load mesh: {}", input.display()))?;

    let (min, max) = (mesh.min_extent(), mesh.max_extent());
    println!("{}", input.display());
    println!("  vertices:    {}", mesh.vertex_count());
    println!("  triangles:   {}", mesh.triangle_count());
    println!("  min:         {} {} {}", min.x, min.y, min.z);
    println!("  max:         {} {} {}", max.x, max.y, max.z);
    let origin = mesh.origin();
    println!("  origin:      {} {} {}", origin.x, origin.y, origin.z);
    let offset = mesh.centering_offset();
    println!("  offset:      {} {} {}", offset.x, offset.y, offset.z);
    let half = mesh.bounding_half_extents();
    println!("  half:        {} {} {}", half.x, half.y, half.z);
    println!("  max half:    {}", mesh.max_bounding_half_extent());
    Ok(())
}

fn simulate(config_path: &Path, frames: u64, seed: Option<u64>) -> Result<()> {
    tracing::info!("Loading scene from {:?}", config_path);
    let mut config = SceneConfig::load(config_path)
        .with_context(|| format!("Failed to load manifest: {}", config_path.display()))?;
    if let Some(seed) = seed {
        config.seed = seed;
    }

    let mut runtime = SceneRuntime::from_config(&config)?;
    let mut commands = 0usize;
    for _ in 0..frames {
        commands += runtime.step().command_count();
    }

    let state = runtime.animator().state();
    let offset = state.dolphin_offset;
    println!("frames:          {}", runtime.frame_count());
    println!("draw commands:   {}", commands);
    println!("global yaw:      {}", state.global_yaw);
    println!("swim phase:      {}", state.swim_phase);
    println!("dolphin offset:  {} {} {}", offset.x, offset.y, offset.z);
    println!("dolphin yaw:     {}", state.dolphin_yaw());
    println!("dolphin stopped: {}", state.dolphin_stopped);
    tracing::info!("Done!");
    Ok(())
}
