//! Runtime configuration

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

fn default_tick_rate() -> u32 {
    30
}

fn default_max_delta() -> Duration {
    Duration::from_millis(100)
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    /// Target tick rate in Hz
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
    /// Maximum delta time clamp (prevents spiral of death)
    #[serde(skip, default = "default_max_delta")]
    pub max_delta: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_rate: default_tick_rate(),
            max_delta: default_max_delta(),
        }
    }
}

impl RuntimeConfig {
    /// Time per tick, inverse of the tick rate
    pub fn tick_duration(&self) -> Result<Duration, ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(Duration::from_secs_f64(1.0 / self.tick_rate as f64))
    }
}
