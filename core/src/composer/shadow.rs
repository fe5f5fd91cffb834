//! Planar projected shadows

use glam::{Mat4, Vec3, Vec4};

/// Three points on the ground plane
pub const GROUND_PLANE_POINTS: [Vec3; 3] = [
    Vec3::new(0.0, -0.4, 0.0),
    Vec3::new(10.0, -0.4, 0.0),
    Vec3::new(5.0, -0.4, -5.0),
];

/// Scene point light, homogeneous
pub const LIGHT_POSITION: Vec4 = Vec4::new(-100.0, 100.0, 50.0, 1.0);

/// Plane `(a, b, c, d)` with `a·x + b·y + c·z + d = 0` through three points
///
/// The normal is `(p3 - p1) × (p2 - p1)`, normalized. Collinear points give a
/// zero normal.
pub fn plane_from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec4 {
    let normal = (p3 - p1).cross(p2 - p1).normalize_or_zero();
    normal.extend(-normal.dot(p3))
}

/// Matrix flattening geometry onto `plane` along rays from `light`
///
/// `M = (P·L)·I − L ⊗ P`. Points already on the plane map to themselves up to
/// the homogeneous scale `P·L`.
pub fn planar_shadow_matrix(plane: Vec4, light: Vec4) -> Mat4 {
    let dot = plane.dot(light);
    Mat4::from_diagonal(Vec4::splat(dot))
        - Mat4::from_cols(
            light * plane.x,
            light * plane.y,
            light * plane.z,
            light * plane.w,
        )
}

/// The scene's ground shadow matrix
pub fn ground_shadow_matrix() -> Mat4 {
    let [p1, p2, p3] = GROUND_PLANE_POINTS;
    planar_shadow_matrix(plane_from_points(p1, p2, p3), LIGHT_POSITION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(m: Mat4, p: Vec3) -> Vec3 {
        let h = m * p.extend(1.0);
        h.truncate() / h.w
    }

    #[test]
    fn test_ground_plane_equation() {
        let [p1, p2, p3] = GROUND_PLANE_POINTS;
        let plane = plane_from_points(p1, p2, p3);
        assert!((plane - Vec4::new(0.0, -1.0, 0.0, -0.4)).length() < 1e-6);
        for p in GROUND_PLANE_POINTS {
            assert!(plane.dot(p.extend(1.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_collinear_points_give_zero_normal() {
        let plane = plane_from_points(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert_eq!(plane, Vec4::ZERO);
    }

    #[test]
    fn test_shadow_lands_on_ground() {
        let m = ground_shadow_matrix();
        for p in [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(3.0, 5.0, -2.0),
            Vec3::new(-7.5, 0.2, 4.0),
        ] {
            let shadow = project(m, p);
            assert!((shadow.y + 0.4).abs() < 1e-4, "{p} -> {shadow}");

            // Light, point and shadow are collinear
            let light = LIGHT_POSITION.truncate();
            let (to_point, to_shadow) = (p - light, shadow - light);
            let sine = to_point.cross(to_shadow).length() / (to_point.length() * to_shadow.length());
            assert!(sine < 1e-4, "{p} -> {shadow}");
        }
    }

    #[test]
    fn test_points_on_ground_stay_put() {
        let m = ground_shadow_matrix();
        let p = Vec3::new(4.0, -0.4, 6.0);
        assert!((project(m, p) - p).length() < 1e-4);
    }
}
