//! Mesh assets
//!
//! A [`MeshAsset`] owns the vertices and triangles read from an indexed-triangle
//! text file together with the bounding quantities derived from them. Assets are
//! loaded once at scene setup and are immutable afterwards.

mod bounds;
mod library;
mod obj;
mod style;


use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use glam::Vec3;

use crate::draw::{DrawMode, Primitive, TRIANGLE_TEX_CORNERS};
use crate::error::MeshError;

pub use bounds::{Bounds, BoundsSeed};
pub use library::{MeshLibrary, MeshPaths};
pub use style::RenderStyle;

/// Three zero-based vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Triangle {
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// Indices as `usize`, in winding order
    pub fn indices(&self) -> [usize; 3] {
        [self.a as usize, self.b as usize, self.c as usize]
    }
}

/// Loaded mesh with derived bounding geometry
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAsset {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    bounds: Bounds,
    style: RenderStyle,
}

impl MeshAsset {
    /// Load a mesh file with the default style and origin-seeded bounds
    pub fn load(path: &Path) -> Result<Self, MeshError> {
        Self::load_with(path, RenderStyle::default(), BoundsSeed::default())
    }

    /// Load a mesh file
    pub fn load_with(path: &Path, style: RenderStyle, seed: BoundsSeed) -> Result<Self, MeshError> {
        let file = File::open(path).map_err(|source| MeshError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mesh = Self::from_reader(BufReader::new(file), style, seed)?;
        tracing::debug!(
            "Loaded {:?}: {} vertices, {} triangles",
            path,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Parse a mesh from any line stream
    pub fn from_reader<R: BufRead>(
        reader: R,
        style: RenderStyle,
        seed: BoundsSeed,
    ) -> Result<Self, MeshError> {
        let parsed = obj::parse_mesh(reader, seed)?;
        let mesh = Self {
            vertices: parsed.vertices,
            triangles: parsed.triangles,
            bounds: parsed.bounds,
            style,
        };
        mesh.log_diagnostics();
        Ok(mesh)
    }

    /// Replace the geometry with the contents of `path`
    ///
    /// Derived bounds are recomputed; the render style is kept. On failure the
    /// current geometry is left untouched.
    pub fn reload(&mut self, path: &Path, seed: BoundsSeed) -> Result<(), MeshError> {
        *self = Self::load_with(path, self.style, seed)?;
        Ok(())
    }

    fn log_diagnostics(&self) {
        let origin = self.origin();
        let offset = self.centering_offset();
        tracing::info!("origin: {} {} {}", origin.x, origin.y, origin.z);
        tracing::info!("offset: {} {} {}", offset.x, offset.y, offset.z);
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn min_extent(&self) -> Vec3 {
        self.bounds.min
    }

    pub fn max_extent(&self) -> Vec3 {
        self.bounds.max
    }

    /// `min_extent + max_extent`
    pub fn origin(&self) -> Vec3 {
        self.bounds.origin()
    }

    /// `-origin / 2`
    pub fn centering_offset(&self) -> Vec3 {
        self.bounds.centering_offset()
    }

    pub fn bounding_half_extents(&self) -> Vec3 {
        self.bounds.half_extents()
    }

    pub fn max_bounding_half_extent(&self) -> f32 {
        self.bounds.max_half_extent()
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// Same geometry with a different point/line style
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Build the primitive list for a draw mode
    ///
    /// `textured` only affects triangle lists, which then carry the fixed
    /// corners (0,0), (1,0), (0,1) for every triangle.
    pub fn primitive(&self, mode: DrawMode, textured: bool) -> Primitive {
        match mode {
            DrawMode::Points => Primitive::Points {
                positions: self.vertices.clone(),
                size: self.style.point_size(),
            },
            DrawMode::Lines => {
                let mut positions = Vec::with_capacity(self.triangles.len() * 6);
                for tri in &self.triangles {
                    let [a, b, c] = self.corners(tri);
                    positions.extend_from_slice(&[a, b, b, c, c, a]);
                }
                Primitive::Lines {
                    positions,
                    width: self.style.line_width(),
                }
            }
            DrawMode::Triangles => {
                let mut positions = Vec::with_capacity(self.triangles.len() * 3);
                for tri in &self.triangles {
                    positions.extend_from_slice(&self.corners(tri));
                }
                let tex_coords = textured.then(|| {
                    TRIANGLE_TEX_CORNERS
                        .iter()
                        .copied()
                        .cycle()
                        .take(positions.len())
                        .collect()
                });
                Primitive::Triangles {
                    positions,
                    tex_coords,
                }
            }
        }
    }

    fn corners(&self, tri: &Triangle) -> [Vec3; 3] {
        tri.indices().map(|i| self.vertices[i])
    }
}

impl FromStr for MeshAsset {
    type Err = MeshError;

    /// Parse a mesh held in memory with the default style and bounds seed
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::from_reader(source.as_bytes(), RenderStyle::default(), BoundsSeed::default())
    }
}
