//! Scene animation state machine
//!
//! [`SceneAnimator`] owns the [`AnimationState`] and advances it one tick at a
//! time. Each tick spins the scene yaw; every `frames_per_phase_step` ticks the
//! swim oscillator steps; every `cycles_per_roam` oscillator steps the dolphin
//! either holds still or shifts by one step per axis.
//!
//! Rendering a frame takes two passes (shadow and lit) over the same state, so
//! advancing is a separate call from reading: a shadow-pass [`SceneAnimator::tick`]
//! is a no-op.

mod config;
mod roam;
mod state;


use glam::Vec3;

use crate::error::ConfigError;

pub use config::AnimatorConfig;
pub use roam::{PcgRoam, RoamSource};
pub use state::{AnimationState, SWIM_PHASE_LIMIT};

/// Per-tick scene animator
#[derive(Debug, Clone)]
pub struct SceneAnimator<R: RoamSource> {
    config: AnimatorConfig,
    state: AnimationState,
    roam: R,
}

impl<R: RoamSource> SceneAnimator<R> {
    /// Create an animator at the initial state
    pub fn new(config: AnimatorConfig, roam: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: AnimationState::default(),
            roam,
        })
    }

    /// Tick for one render pass
    ///
    /// Only the lit pass advances the state; a shadow pass reads the state the
    /// preceding advance left behind.
    pub fn tick(&mut self, shadow_pass: bool) {
        if !shadow_pass {
            self.advance();
        }
    }

    /// Advance the state by one tick
    pub fn advance(&mut self) {
        let step = self.config.yaw_step;
        let s = &mut self.state;

        s.global_yaw += step;
        if s.dolphin_stopped {
            s.dolphin_yaw_lag += step;
        }

        let fire = s.frame_counter >= self.config.frames_per_phase_step - 1;
        s.frame_counter += 1;
        if fire {
            s.frame_counter = 0;
            s.move_cycle_counter += 1;
            self.step_oscillator();
        }

        if self.state.move_cycle_counter >= self.config.cycles_per_roam {
            self.state.move_cycle_counter = 0;
            self.decide_roam();
        }

        debug_assert!(self.state.swim_phase.abs() <= SWIM_PHASE_LIMIT);
        debug_assert!(
            self.state.dolphin_offset.abs().max_element() <= self.config.roam_bound,
            "dolphin offset {} escaped bound {}",
            self.state.dolphin_offset,
            self.config.roam_bound
        );
    }

    fn step_oscillator(&mut self) {
        let s = &mut self.state;
        if s.swim_phase.abs() >= SWIM_PHASE_LIMIT {
            s.swim_direction = -s.swim_direction;
        }
        s.swim_phase = (s.swim_phase + s.swim_direction).clamp(-SWIM_PHASE_LIMIT, SWIM_PHASE_LIMIT);
    }

    fn decide_roam(&mut self) {
        if self.roam.should_stop() {
            self.state.dolphin_stopped = true;
            tracing::debug!("dolphin holding at {}", self.state.dolphin_offset);
            return;
        }

        let bound = self.config.roam_bound;
        let step = Vec3::new(
            self.roam.offset_step() as f32,
            self.roam.offset_step() as f32,
            self.roam.offset_step() as f32,
        ) * self.config.roam_step;

        let s = &mut self.state;
        s.dolphin_stopped = false;
        s.dolphin_yaw_lag = 0.0;
        s.dolphin_offset = (s.dolphin_offset + step).clamp(Vec3::splat(-bound), Vec3::splat(bound));
        tracing::debug!("dolphin roaming to {}", s.dolphin_offset);
    }

    /// Return to the initial state, keeping the config and random source
    pub fn reset(&mut self) {
        self.state = AnimationState::default();
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Current swim phase scaled to `[-1, 1]`
    pub fn swim_wave(&self) -> f32 {
        self.state.swim_wave()
    }

    /// Current dolphin heading in degrees
    pub fn dolphin_yaw(&self) -> f32 {
        self.state.dolphin_yaw()
    }
}
