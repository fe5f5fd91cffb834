//! Per-frame draw command composition
//!
//! [`SceneComposer`] turns the layout, the mesh library and an animation state
//! into draw commands. Composition never mutates the state, so the shadow and
//! lit passes of a frame see exactly the same scene.

mod ground;
mod shadow;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use glam::{Mat4, Vec3, Vec4};

use crate::animator::AnimationState;
use crate::draw::{DrawCommand, DrawMode, Primitive, TextureSlot};
use crate::layout::SceneLayout;
use crate::mesh::MeshLibrary;

pub use ground::{GROUND_EXTENT, GROUND_STEP, GROUND_TEX_STEP, GROUND_Y, ground_primitive};
pub use shadow::{
    GROUND_PLANE_POINTS, LIGHT_POSITION, ground_shadow_matrix, plane_from_points,
    planar_shadow_matrix,
};

/// Lit draws
pub const LIT_COLOR: Vec4 = Vec4::ONE;

/// Translucent black for projected shadows
pub const SHADOW_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.6);

/// Seaweed tint in the lit pass
pub const SEAWEED_COLOR: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

const BARREL_SCALE: f32 = 0.05;
const FISH_SCALE: f32 = 0.04;
const DOLPHIN_SCALE: f32 = 0.005;
const SEAWEED_SCALE: f32 = 0.1;

/// Which of the two per-frame passes to compose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPass {
    /// Geometry flattened onto the ground, untextured
    Shadow,
    /// Normal textured geometry
    Lit,
}

/// Everything drawn for one frame, in submission order
#[derive(Debug, Clone)]
pub struct Frame {
    pub ground: DrawCommand,
    pub shadow: Vec<DrawCommand>,
    pub lit: Vec<DrawCommand>,
}

impl Frame {
    /// All commands in submission order
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        std::iter::once(&self.ground)
            .chain(&self.shadow)
            .chain(&self.lit)
    }

    pub fn command_count(&self) -> usize {
        1 + self.shadow.len() + self.lit.len()
    }
}

/// Builds draw commands from shared, precomputed primitives
#[derive(Debug, Clone)]
pub struct SceneComposer {
    ground: Arc<Primitive>,
    barrel: Arc<Primitive>,
    fish: Arc<Primitive>,
    dolphin: Arc<Primitive>,
    seaweed: Arc<Primitive>,
    shadow_matrix: Mat4,
}

impl SceneComposer {
    /// Precompute the triangle lists for every scene mesh
    pub fn new(meshes: &MeshLibrary) -> Self {
        Self {
            ground: Arc::new(ground_primitive()),
            barrel: Arc::new(meshes.barrel.primitive(DrawMode::Triangles, true)),
            fish: Arc::new(meshes.fish.primitive(DrawMode::Triangles, true)),
            dolphin: Arc::new(meshes.dolphin.primitive(DrawMode::Triangles, true)),
            seaweed: Arc::new(meshes.seaweed.primitive(DrawMode::Triangles, false)),
            shadow_matrix: ground_shadow_matrix(),
        }
    }

    pub fn shadow_matrix(&self) -> Mat4 {
        self.shadow_matrix
    }

    /// The textured sea floor
    pub fn ground(&self) -> DrawCommand {
        DrawCommand {
            primitive: Arc::clone(&self.ground),
            transform: Mat4::IDENTITY,
            color: LIT_COLOR,
            texture: Some(TextureSlot::Ground),
        }
    }

    /// Ground, shadow pass and lit pass for one state
    pub fn frame(&self, layout: &SceneLayout, state: &AnimationState) -> Frame {
        Frame {
            ground: self.ground(),
            shadow: self.compose(layout, state, RenderPass::Shadow),
            lit: self.compose(layout, state, RenderPass::Lit),
        }
    }

    /// Draw commands for every actor in one pass
    ///
    /// Order: each barrel followed by its fish pair, then the dolphin, then the
    /// seaweed.
    pub fn compose(
        &self,
        layout: &SceneLayout,
        state: &AnimationState,
        pass: RenderPass,
    ) -> Vec<DrawCommand> {
        let yaw = state.global_yaw;
        let wave = state.swim_wave();
        let mut commands = Vec::new();

        for (slot, placement) in layout.barrels() {
            let barrel = placement.transform()
                * Mat4::from_scale(Vec3::splat(BARREL_SCALE))
                * rotation_y(-2.0 * yaw)
                * Mat4::from_translation(Vec3::new(0.0, -8.0, 0.0));
            commands.push(self.command(&self.barrel, barrel, Some(TextureSlot::Barrel), pass));

            if let Some((a, b)) = layout.fish_pair(slot) {
                let fish_a = a.transform()
                    * Mat4::from_scale(Vec3::splat(FISH_SCALE))
                    * rotation_y(-1.2 * yaw)
                    * Mat4::from_translation(Vec3::new(10.0 - wave, -2.0 + wave, 0.0));
                let fish_b = b.transform()
                    * Mat4::from_scale(Vec3::splat(FISH_SCALE))
                    * rotation_y(-1.5 * yaw)
                    * Mat4::from_translation(Vec3::new(8.0 - wave, -5.0 + wave, 3.0));
                commands.push(self.command(&self.fish, fish_a, Some(TextureSlot::Fish), pass));
                commands.push(self.command(&self.fish, fish_b, Some(TextureSlot::Fish), pass));
            }
        }

        let offset = state.dolphin_offset;
        let dolphin = layout.dolphin().transform()
            * Mat4::from_scale(Vec3::splat(DOLPHIN_SCALE))
            * Mat4::from_translation(Vec3::new(0.0, 20.0, -500.0))
            * rotation_y(2.0 * state.dolphin_yaw())
            * Mat4::from_translation(Vec3::new(200.0 + offset.x, offset.y, offset.z));
        commands.push(self.command(&self.dolphin, dolphin, Some(TextureSlot::Dolphin), pass));

        let seaweed = Mat4::from_scale(Vec3::splat(SEAWEED_SCALE))
            * Mat4::from_translation(Vec3::new(-1.0, -4.3, 0.0));
        let mut weed = self.command(&self.seaweed, seaweed, None, pass);
        if pass == RenderPass::Lit {
            weed.color = SEAWEED_COLOR;
        }
        commands.push(weed);

        commands
    }

    fn command(
        &self,
        primitive: &Arc<Primitive>,
        model: Mat4,
        texture: Option<TextureSlot>,
        pass: RenderPass,
    ) -> DrawCommand {
        match pass {
            RenderPass::Lit => DrawCommand {
                primitive: Arc::clone(primitive),
                transform: model,
                color: LIT_COLOR,
                texture,
            },
            RenderPass::Shadow => DrawCommand {
                primitive: Arc::clone(primitive),
                transform: self.shadow_matrix * model,
                color: SHADOW_COLOR,
                texture: None,
            },
        }
    }
}

/// Rotation about +Y by `degrees`
fn rotation_y(degrees: f32) -> Mat4 {
    Mat4::from_rotation_y(degrees.to_radians())
}
