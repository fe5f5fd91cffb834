//! Sea-floor plane

use glam::{Vec2, Vec3};

use crate::draw::Primitive;

/// Half-width of the ground square
pub const GROUND_EXTENT: f32 = 20.0;

/// Grid spacing between strip vertices
pub const GROUND_STEP: f32 = 1.0;

/// Height of the ground plane
pub const GROUND_Y: f32 = -0.4;

/// Texture coordinate advance per grid step
pub const GROUND_TEX_STEP: f32 = 1.0 / (GROUND_EXTENT * 0.075);

/// Build the ground as a textured triangle list
///
/// The floor is laid out as strips along x, each running from z = +extent down
/// to z = -extent with two vertices per run; every strip is unrolled into
/// independent triangles.
pub fn ground_primitive() -> Primitive {
    let cells = (2.0 * GROUND_EXTENT / GROUND_STEP) as usize;
    let strips = cells + 1;
    let runs = cells + 1;
    let per_strip = (runs * 2 - 2) * 3;

    let mut positions = Vec::with_capacity(strips * per_strip);
    let mut tex_coords = Vec::with_capacity(strips * per_strip);
    let mut strip_positions = Vec::with_capacity(runs * 2);
    let mut strip_coords = Vec::with_capacity(runs * 2);

    for strip in 0..strips {
        let x = -GROUND_EXTENT + strip as f32 * GROUND_STEP;
        let s = strip as f32 * GROUND_TEX_STEP;

        strip_positions.clear();
        strip_coords.clear();
        for run in 0..runs {
            let z = GROUND_EXTENT - run as f32 * GROUND_STEP;
            let t = run as f32 * GROUND_TEX_STEP;

            strip_positions.push(Vec3::new(x, GROUND_Y, z));
            strip_coords.push(Vec2::new(s, t));
            strip_positions.push(Vec3::new(x + GROUND_STEP, GROUND_Y, z));
            strip_coords.push(Vec2::new(s + GROUND_TEX_STEP, t));
        }

        for [a, b, c] in strip_to_list(strip_positions.len()) {
            positions.extend([strip_positions[a], strip_positions[b], strip_positions[c]]);
            tex_coords.extend([strip_coords[a], strip_coords[b], strip_coords[c]]);
        }
    }

    Primitive::Triangles {
        positions,
        tex_coords: Some(tex_coords),
    }
}

/// Triangle indices of a strip with `len` vertices, odd triangles rewound so
/// every triangle keeps the first one's orientation
fn strip_to_list(len: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..len.saturating_sub(2)).map(|k| {
        if k % 2 == 0 {
            [k, k + 1, k + 2]
        } else {
            [k + 1, k, k + 2]
        }
    })
}
