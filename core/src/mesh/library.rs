//! The four meshes the underwater scene draws

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{BoundsSeed, MeshAsset, RenderStyle};

/// Source files for each scene mesh
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MeshPaths {
    pub dolphin: PathBuf,
    pub seaweed: PathBuf,
    pub barrel: PathBuf,
    pub fish: PathBuf,
}

impl MeshPaths {
    /// Resolve relative paths against `base`
    pub fn resolve(&self, base: &Path) -> Self {
        let join = |p: &PathBuf| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.clone()
            }
        };
        Self {
            dolphin: join(&self.dolphin),
            seaweed: join(&self.seaweed),
            barrel: join(&self.barrel),
            fish: join(&self.fish),
        }
    }
}

/// Loaded scene meshes
#[derive(Debug, Clone)]
pub struct MeshLibrary {
    pub dolphin: MeshAsset,
    pub seaweed: MeshAsset,
    pub barrel: MeshAsset,
    pub fish: MeshAsset,
}

impl MeshLibrary {
    /// Load all four meshes in parallel
    ///
    /// Loads share no state; a failure names the mesh that could not be loaded.
    pub fn load(paths: &MeshPaths, style: RenderStyle, seed: BoundsSeed) -> Result<Self> {
        let load = |name: &str, path: &Path| -> Result<MeshAsset> {
            tracing::info!("Loading {} mesh from {:?}", name, path);
            MeshAsset::load_with(path, style, seed)
                .with_context(|| format!("Failed to load {} mesh", name))
        };

        let ((dolphin, seaweed), (barrel, fish)) = rayon::join(
            || {
                rayon::join(
                    || load("dolphin", &paths.dolphin),
                    || load("seaweed", &paths.seaweed),
                )
            },
            || {
                rayon::join(
                    || load("barrel", &paths.barrel),
                    || load("fish", &paths.fish),
                )
            },
        );

        Ok(Self {
            dolphin: dolphin?,
            seaweed: seaweed?,
            barrel: barrel?,
            fish: fish?,
        })
    }
}
