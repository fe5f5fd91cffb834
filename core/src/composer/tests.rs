//! Composer tests

use std::sync::Arc;

use glam::{Mat4, Vec3, Vec4};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::*;
use crate::animator::AnimationState;
use crate::draw::TextureSlot;
use crate::layout::{BARREL_COUNT, BarrelSlot, FISH_COUNT, SCATTERED_BARREL_COUNT, SceneLayout};
use crate::mesh::{MeshAsset, MeshLibrary};

const ACTOR_COUNT: usize = BARREL_COUNT + FISH_COUNT + 2;

fn triangle() -> MeshAsset {
    "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n".parse().unwrap()
}

fn library() -> MeshLibrary {
    MeshLibrary {
        dolphin: triangle(),
        seaweed: triangle(),
        barrel: triangle(),
        fish: triangle(),
    }
}

fn layout() -> SceneLayout {
    SceneLayout::scatter(&mut Pcg32::seed_from_u64(5))
}

fn assert_near(a: Vec3, b: Vec3) {
    assert!((a - b).length() < 1e-4, "{a} != {b}");
}

fn origin_of(command: &DrawCommand) -> Vec3 {
    command.transform.transform_point3(Vec3::ZERO)
}

// ============================================================================
// Command lists
// ============================================================================

#[test]
fn test_lit_pass_covers_every_actor() {
    let composer = SceneComposer::new(&library());
    let commands = composer.compose(&layout(), &AnimationState::default(), RenderPass::Lit);
    assert_eq!(commands.len(), ACTOR_COUNT);

    let count = |slot: Option<TextureSlot>| commands.iter().filter(|c| c.texture == slot).count();
    assert_eq!(count(Some(TextureSlot::Barrel)), BARREL_COUNT);
    assert_eq!(count(Some(TextureSlot::Fish)), FISH_COUNT);
    assert_eq!(count(Some(TextureSlot::Dolphin)), 1);
    assert_eq!(count(None), 1);
}

#[test]
fn test_lit_pass_colors() {
    let composer = SceneComposer::new(&library());
    let commands = composer.compose(&layout(), &AnimationState::default(), RenderPass::Lit);

    let (seaweed, rest) = commands.split_last().unwrap();
    assert_eq!(seaweed.color, SEAWEED_COLOR);
    assert_eq!(seaweed.texture, None);
    assert!(rest.iter().all(|c| c.color == LIT_COLOR));
}

#[test]
fn test_shadow_pass_mirrors_lit_pass() {
    let composer = SceneComposer::new(&library());
    let layout = layout();
    let state = AnimationState {
        global_yaw: 37.5,
        swim_phase: -4,
        dolphin_offset: Vec3::new(4.0, -2.0, 6.0),
        ..Default::default()
    };

    let lit = composer.compose(&layout, &state, RenderPass::Lit);
    let shadow = composer.compose(&layout, &state, RenderPass::Shadow);
    assert_eq!(shadow.len(), lit.len());

    for (s, l) in shadow.iter().zip(&lit) {
        assert_eq!(s.color, SHADOW_COLOR);
        assert_eq!(s.texture, None);
        assert!(Arc::ptr_eq(&s.primitive, &l.primitive));
        assert!(
            s.transform
                .abs_diff_eq(composer.shadow_matrix() * l.transform, 1e-4)
        );
    }
}

#[test]
fn test_compose_is_repeatable() {
    let composer = SceneComposer::new(&library());
    let layout = layout();
    let state = AnimationState {
        global_yaw: 12.0,
        swim_phase: 7,
        ..Default::default()
    };

    let first = composer.compose(&layout, &state, RenderPass::Lit);
    let second = composer.compose(&layout, &state, RenderPass::Lit);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.transform, b.transform);
    }
}

#[test]
fn test_primitives_shared_between_frames() {
    let composer = SceneComposer::new(&library());
    let layout = layout();
    let a = composer.frame(&layout, &AnimationState::default());
    let b = composer.frame(&layout, &AnimationState::default());

    assert!(Arc::ptr_eq(&a.ground.primitive, &b.ground.primitive));
    assert!(Arc::ptr_eq(&a.lit[0].primitive, &b.lit[0].primitive));
    assert!(Arc::ptr_eq(&a.lit[0].primitive, &a.lit[3].primitive));
}

#[test]
fn test_frame_order() {
    let composer = SceneComposer::new(&library());
    let frame = composer.frame(&layout(), &AnimationState::default());

    assert_eq!(frame.command_count(), 1 + 2 * ACTOR_COUNT);
    assert_eq!(frame.commands().count(), frame.command_count());
    assert_eq!(frame.ground.texture, Some(TextureSlot::Ground));
    assert_eq!(frame.ground.transform, Mat4::IDENTITY);
    assert_eq!(frame.commands().nth(1).map(|c| c.color), Some(SHADOW_COLOR));
    assert_eq!(frame.commands().last().map(|c| c.color), Some(SEAWEED_COLOR));
}

// ============================================================================
// Transforms
// ============================================================================

#[test]
fn test_indicator_barrel_transform() {
    let composer = SceneComposer::new(&library());
    let layout = layout();
    let commands = composer.compose(&layout, &AnimationState::default(), RenderPass::Lit);

    // Scattered barrels take three commands each (barrel plus fish pair)
    let first_indicator = &commands[SCATTERED_BARREL_COUNT * 3];
    assert_eq!(first_indicator.texture, Some(TextureSlot::Barrel));
    assert_near(origin_of(first_indicator), Vec3::new(0.0, 0.5 - 0.4, 0.0));

    let barrel_pos = layout.barrel(BarrelSlot(SCATTERED_BARREL_COUNT)).unwrap().position();
    assert_eq!(barrel_pos, Vec3::new(0.0, 0.5, 0.0));
}

#[test]
fn test_barrel_spins_against_global_yaw() {
    let composer = SceneComposer::new(&library());
    let state = AnimationState {
        global_yaw: 45.0,
        ..Default::default()
    };
    let commands = composer.compose(&layout(), &state, RenderPass::Lit);
    let barrel = &commands[0];

    // -90 degrees about Y takes +X to +Z
    let axis = barrel.transform.transform_vector3(Vec3::X) / 0.05;
    assert_near(axis, Vec3::Z);
}

#[test]
fn test_fish_follow_swim_wave() {
    let composer = SceneComposer::new(&library());
    let layout = layout();
    let state = AnimationState {
        swim_phase: 10,
        ..Default::default()
    };
    let commands = composer.compose(&layout, &state, RenderPass::Lit);

    let base = layout.barrel(BarrelSlot(0)).unwrap().position();
    assert_near(origin_of(&commands[1]), base + 0.04 * Vec3::new(9.0, -1.0, 0.0));
    assert_near(origin_of(&commands[2]), base + 0.04 * Vec3::new(7.0, -4.0, 3.0));
}

#[test]
fn test_dolphin_uses_offset_and_lagged_yaw() {
    let composer = SceneComposer::new(&library());
    let layout = layout();

    let state = AnimationState {
        dolphin_offset: Vec3::new(2.0, 0.0, 0.0),
        ..Default::default()
    };
    let commands = composer.compose(&layout, &state, RenderPass::Lit);
    let dolphin = &commands[ACTOR_COUNT - 2];
    assert_eq!(dolphin.texture, Some(TextureSlot::Dolphin));
    assert_near(origin_of(dolphin), Vec3::new(1.01, 0.1, -2.5));

    // A fully lagged heading matches the unrotated one
    let lagged = AnimationState {
        global_yaw: 30.0,
        dolphin_yaw_lag: 30.0,
        ..state
    };
    let commands = composer.compose(&layout, &lagged, RenderPass::Lit);
    assert_near(origin_of(&commands[ACTOR_COUNT - 2]), Vec3::new(1.01, 0.1, -2.5));
}

#[test]
fn test_seaweed_transform_is_static() {
    let composer = SceneComposer::new(&library());
    let layout = layout();
    let still = composer.compose(&layout, &AnimationState::default(), RenderPass::Lit);
    let moved = composer.compose(
        &layout,
        &AnimationState {
            global_yaw: 99.0,
            ..Default::default()
        },
        RenderPass::Lit,
    );

    let weed = still.last().unwrap();
    assert_eq!(weed.transform, moved.last().unwrap().transform);
    assert_near(origin_of(weed), Vec3::new(-0.1, -0.43, 0.0));
    assert_eq!(weed.color, Vec4::new(0.0, 1.0, 0.0, 1.0));
}
