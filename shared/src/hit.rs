//! Ray picking against the cube.
//!
//! The cube is an axis-aligned box centered at the origin, so a slab test is
//! enough to find which face a pointer ray lands on.

use bevy_math::Vec3;

/// Where a ray enters the cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeHit {
    pub point: Vec3,
    /// Outward axis-aligned normal of the entry face.
    pub normal: Vec3,
    /// Ray parameter at the entry point, in units of `direction`.
    pub distance: f32,
}

/// Intersect a ray with the cube `[-half_extent, half_extent]³`.
///
/// Returns `None` when the ray misses, points away from the cube, or starts
/// inside it.
pub fn ray_cube_hit(origin: Vec3, direction: Vec3, half_extent: f32) -> Option<CubeHit> {
    if !origin.is_finite() || !direction.is_finite() || half_extent <= 0.0 {
        return None;
    }

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut entry_normal = None;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];

        if d.abs() <= f32::EPSILON {
            // Parallel to this slab: must already be between its planes
            if o < -half_extent || o > half_extent {
                return None;
            }
            continue;
        }

        let t_low = (-half_extent - o) / d;
        let t_high = (half_extent - o) / d;
        let (near, far) = if t_low < t_high {
            (t_low, t_high)
        } else {
            (t_high, t_low)
        };

        if near > t_enter {
            t_enter = near;
            let mut normal = Vec3::ZERO;
            normal[axis] = -d.signum();
            entry_normal = Some(normal);
        }
        t_exit = t_exit.min(far);
    }

    let normal = entry_normal?;
    if t_enter > t_exit || t_enter < 0.0 {
        return None;
    }

    Some(CubeHit {
        point: origin + direction * t_enter,
        normal,
        distance: t_enter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::{resolve_face, Face};

    const H: f32 = 1.5;

    #[test]
    fn axis_rays_hit_the_facing_side() {
        for face in Face::ALL {
            let n = face.normal().as_vec3();
            let hit = ray_cube_hit(n * 10.0, -n, H).expect("axis ray hits");
            assert_eq!(hit.normal, n);
            assert_eq!(resolve_face(hit.normal), Some(face));
            assert!((hit.point - n * H).length() < 1e-5);
            assert!((hit.distance - 8.5).abs() < 1e-5);
        }
    }

    #[test]
    fn oblique_ray_enters_through_nearest_slab() {
        // Camera-like position above and in front, aiming at the top front edge region
        let origin = Vec3::new(0.0, 8.0, 6.0);
        let target = Vec3::new(0.2, 1.5, 0.5);
        let hit = ray_cube_hit(origin, target - origin, H).expect("hits top");
        assert_eq!(hit.normal, Vec3::Y);
        assert!((hit.point.y - H).abs() < 1e-4);
    }

    #[test]
    fn misses_and_backward_rays_return_none() {
        assert_eq!(ray_cube_hit(Vec3::new(0.0, 5.0, 10.0), Vec3::NEG_Z, H), None);
        assert_eq!(ray_cube_hit(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, H), None);
        assert_eq!(ray_cube_hit(Vec3::ZERO, Vec3::X, H), None);
        assert_eq!(ray_cube_hit(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, H), None);
    }
}
