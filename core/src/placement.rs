//! Actor placement records

use glam::{Mat4, Vec3};

/// Position and yaw of one scene actor
///
/// A passive transform record: the layout writes it at setup, the composer
/// reads it every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActorPlacement {
    position: Vec3,
    /// Rotation about +Y in degrees
    yaw: f32,
}

impl ActorPlacement {
    pub fn new(position: Vec3) -> Self {
        Self { position, yaw: 0.0 }
    }

    /// Overwrite the position
    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
    }

    /// Move by `delta` in world space
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Add `degrees` to the yaw
    pub fn rotate_yaw(&mut self, degrees: f32) {
        self.yaw += degrees;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Model-to-world transform: translate to the position, then yaw
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_y(self.yaw.to_radians())
    }
}
