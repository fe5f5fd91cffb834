//! reefscape.toml manifest parsing

use std::path::Path;

use serde::Deserialize;

use crate::animator::AnimatorConfig;
use crate::error::ConfigError;
use crate::mesh::{BoundsSeed, MeshPaths, RenderStyle};
use crate::runtime::RuntimeConfig;

fn default_seed() -> u64 {
    1
}

/// reefscape.toml manifest structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneConfig {
    /// Seed for barrel scatter and roam decisions
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub meshes: MeshPaths,
    #[serde(default)]
    pub render: RenderSection,
    #[serde(default)]
    pub animation: AnimatorConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Mesh drawing options
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RenderSection {
    pub point_size: Option<f32>,
    pub line_width: Option<f32>,
    #[serde(default)]
    pub bounds_seed: BoundsSeed,
}

impl RenderSection {
    pub fn style(&self) -> RenderStyle {
        RenderStyle::new(self.point_size, self.line_width)
    }
}

impl SceneConfig {
    /// Load manifest from file
    ///
    /// Relative mesh paths are resolved against the manifest's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut config = Self::parse(&content)?;

        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.meshes = config.meshes.resolve(&base);
        Ok(config)
    }

    /// Parse and validate manifest text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Manifest(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate animator tuning and tick rate
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.animation.validate()?;
        self.runtime.tick_duration()?;
        Ok(())
    }

    /// Mesh file for each scene actor
    pub fn mesh_paths(&self) -> &MeshPaths {
        &self.meshes
    }
}
