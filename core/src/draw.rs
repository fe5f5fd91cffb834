//! Draw commands handed to the rasterization backend
//!
//! The core never touches a graphics API. Each frame it produces a list of
//! [`DrawCommand`]s; the backend turns the point, line and triangle lists into
//! pixels.

use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Texture coordinates paired with every textured mesh triangle
pub const TRIANGLE_TEX_CORNERS: [Vec2; 3] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
];

/// How a mesh is turned into a primitive list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// One point per vertex
    Points,
    /// Three edges per triangle
    Lines,
    /// Filled triangles
    Triangles,
}

/// Vertex list in one of the three request kinds the backend accepts
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Points {
        positions: Vec<Vec3>,
        /// Point size in pixels
        size: f32,
    },
    /// Pairs of positions, one pair per segment
    Lines {
        positions: Vec<Vec3>,
        /// Line width in pixels
        width: f32,
    },
    /// Triples of positions, one triple per triangle
    Triangles {
        positions: Vec<Vec3>,
        /// One coordinate per position when texturing is requested
        tex_coords: Option<Vec<Vec2>>,
    },
}

impl Primitive {
    /// Emitted vertex positions
    pub fn positions(&self) -> &[Vec3] {
        match self {
            Primitive::Points { positions, .. }
            | Primitive::Lines { positions, .. }
            | Primitive::Triangles { positions, .. } => positions,
        }
    }

    /// Number of emitted vertices
    pub fn vertex_count(&self) -> usize {
        self.positions().len()
    }

    /// Whether texture coordinates accompany the positions
    pub fn is_textured(&self) -> bool {
        matches!(
            self,
            Primitive::Triangles {
                tex_coords: Some(_),
                ..
            }
        )
    }
}

/// Texture binding requested for a draw
///
/// Decoding and uploading the images is the backend's job; the core only
/// names which one to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    Ground,
    Barrel,
    Dolphin,
    Fish,
}

/// A single draw request
#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// Geometry in model space, shared between frames
    pub primitive: Arc<Primitive>,
    /// Model-to-world transform
    pub transform: Mat4,
    /// RGBA colour modulating the draw
    pub color: Vec4,
    /// Texture to bind, `None` for untextured draws
    pub texture: Option<TextureSlot>,
}
