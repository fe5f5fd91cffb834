//! Animation state

use glam::Vec3;

/// Swim oscillator limit on either side of zero
pub const SWIM_PHASE_LIMIT: i32 = 10;

/// Everything the animator mutates between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Accumulated yaw in degrees, never decreases
    pub global_yaw: f32,
    /// Triangular wave position in `[-10, 10]`
    pub swim_phase: i32,
    /// `-1` or `+1`
    pub swim_direction: i32,
    /// Ticks since the last oscillator step
    pub frame_counter: u32,
    /// Oscillator steps since the last roam decision
    pub move_cycle_counter: u32,
    /// Dolphin displacement, each axis within the roam bound
    pub dolphin_offset: Vec3,
    /// Yaw accumulated while the dolphin holds still
    pub dolphin_yaw_lag: f32,
    pub dolphin_stopped: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            global_yaw: 0.0,
            swim_phase: 0,
            swim_direction: 1,
            frame_counter: 0,
            move_cycle_counter: 0,
            dolphin_offset: Vec3::ZERO,
            dolphin_yaw_lag: 0.0,
            dolphin_stopped: false,
        }
    }
}

impl AnimationState {
    /// Swim phase scaled to `[-1, 1]`
    pub fn swim_wave(&self) -> f32 {
        self.swim_phase as f32 / SWIM_PHASE_LIMIT as f32
    }

    /// Dolphin heading: the global yaw minus the lag built up while stopped
    pub fn dolphin_yaw(&self) -> f32 {
        self.global_yaw - self.dolphin_yaw_lag
    }
}
