//! Animator tuning

use serde::Deserialize;

use crate::error::ConfigError;

fn default_frames_per_phase_step() -> u32 {
    6
}

fn default_cycles_per_roam() -> u32 {
    20
}

fn default_yaw_step() -> f32 {
    0.5
}

fn default_roam_step() -> f32 {
    2.0
}

fn default_roam_bound() -> f32 {
    20.0
}

/// Animator timing and motion constants
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnimatorConfig {
    /// Ticks per swim oscillator step
    #[serde(default = "default_frames_per_phase_step")]
    pub frames_per_phase_step: u32,
    /// Oscillator steps per roam decision
    #[serde(default = "default_cycles_per_roam")]
    pub cycles_per_roam: u32,
    /// Degrees added to the global yaw per tick
    #[serde(default = "default_yaw_step")]
    pub yaw_step: f32,
    /// Distance the dolphin shifts per axis on a roam
    #[serde(default = "default_roam_step")]
    pub roam_step: f32,
    /// Dolphin offset limit on each axis
    #[serde(default = "default_roam_bound")]
    pub roam_bound: f32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            frames_per_phase_step: default_frames_per_phase_step(),
            cycles_per_roam: default_cycles_per_roam(),
            yaw_step: default_yaw_step(),
            roam_step: default_roam_step(),
            roam_bound: default_roam_bound(),
        }
    }
}

impl AnimatorConfig {
    /// Reject zero cycle lengths and non-positive steps
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cycles = [
            ("frames_per_phase_step", self.frames_per_phase_step),
            ("cycles_per_roam", self.cycles_per_roam),
        ];
        for (name, value) in cycles {
            if value == 0 {
                return Err(ConfigError::ZeroCycle { name, value });
            }
        }

        let steps = [
            ("yaw_step", self.yaw_step),
            ("roam_step", self.roam_step),
            ("roam_bound", self.roam_bound),
        ];
        for (name, value) in steps {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        Ok(())
    }
}
