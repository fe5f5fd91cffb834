//! Scene loop orchestration
//!
//! Drives the scene with a fixed timestep: wall-clock deltas accumulate and
//! every whole tick becomes one frame. A frame advances the animator exactly
//! once, then composes the ground, shadow and lit passes from that state.

use std::time::Duration;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::animator::{PcgRoam, RoamSource, SceneAnimator};
use crate::composer::{Frame, SceneComposer};
use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::layout::SceneLayout;
use crate::mesh::MeshLibrary;

mod config;
mod game_loop;


pub use config::RuntimeConfig;

/// Fixed-timestep scene driver
pub struct SceneRuntime<R: RoamSource> {
    config: RuntimeConfig,
    animator: SceneAnimator<R>,
    composer: SceneComposer,
    layout: SceneLayout,
    accumulator: Duration,
    tick_duration: Duration,
    frames: u64,
}

impl<R: RoamSource> SceneRuntime<R> {
    /// Create a runtime over an already-built scene
    pub fn new(
        config: RuntimeConfig,
        animator: SceneAnimator<R>,
        composer: SceneComposer,
        layout: SceneLayout,
    ) -> Result<Self, ConfigError> {
        let tick_duration = config.tick_duration()?;
        Ok(Self {
            config,
            animator,
            composer,
            layout,
            accumulator: Duration::ZERO,
            tick_duration,
            frames: 0,
        })
    }

    /// Set the tick rate
    pub fn set_tick_rate(&mut self, tick_rate: u32) -> Result<(), ConfigError> {
        let config = RuntimeConfig {
            tick_rate,
            ..self.config.clone()
        };
        self.tick_duration = config.tick_duration()?;
        self.config = config;
        Ok(())
    }

    /// Get the tick duration (time per tick, inverse of tick rate)
    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Get the current tick rate
    pub fn tick_rate(&self) -> u32 {
        self.config.tick_rate
    }

    /// Account for `delta` of elapsed time and run every frame now due
    ///
    /// `delta` is clamped to `max_delta`; time short of a whole tick carries
    /// over to the next call.
    pub fn advance_by(&mut self, delta: Duration) -> Vec<Frame> {
        let ticks = game_loop::drain_ticks(
            &self.config,
            self.tick_duration,
            &mut self.accumulator,
            delta,
        );
        (0..ticks).map(|_| self.step()).collect()
    }

    /// Run exactly one frame
    pub fn step(&mut self) -> Frame {
        self.animator.advance();
        self.frames += 1;
        self.composer.frame(&self.layout, self.animator.state())
    }

    /// Compose the current state without advancing it
    pub fn redraw(&self) -> Frame {
        self.composer.frame(&self.layout, self.animator.state())
    }

    /// Frames run since creation
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Interpolation factor between the last frame and the next
    pub fn alpha(&self) -> f32 {
        self.accumulator.as_secs_f32() / self.tick_duration.as_secs_f32()
    }

    pub fn animator(&self) -> &SceneAnimator<R> {
        &self.animator
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }
}

impl SceneRuntime<PcgRoam> {
    /// Load the meshes named by `config` and build the seeded scene
    ///
    /// One generator scatters the barrels and then drives roam decisions.
    pub fn from_config(config: &SceneConfig) -> Result<Self> {
        let meshes = MeshLibrary::load(
            config.mesh_paths(),
            config.render.style(),
            config.render.bounds_seed,
        )?;

        let mut rng = Pcg32::seed_from_u64(config.seed);
        let layout = SceneLayout::scatter(&mut rng);
        let animator = SceneAnimator::new(config.animation, PcgRoam::from_rng(rng))
            .context("Invalid animation settings")?;

        tracing::info!(
            "Scene ready: seed {}, {} Hz",
            config.seed,
            config.runtime.tick_rate
        );

        Self::new(
            config.runtime.clone(),
            animator,
            SceneComposer::new(&meshes),
            layout,
        )
        .context("Invalid runtime settings")
    }
}
