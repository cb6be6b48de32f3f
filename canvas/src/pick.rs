//! Pointer picking: casts a view ray against the pickable ground meshes.

#[cfg(test)]
#[path = "pick_test.rs"]
mod pick_test;

use crate::math::Vec3;
use crate::scene::{MeshId, MeshKind, Scene};

/// Parallel-ray tolerance for plane intersection.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Height rays start from in [`ground_under`]; above any ground mesh.
const DROP_HEIGHT: f64 = 1_000.0;

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    #[must_use]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Result of a successful ground pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    /// The ground mesh that was hit.
    pub mesh: MeshId,
    /// World-space point under the pointer.
    pub point: Vec3,
    /// Distance along the ray.
    pub distance: f64,
}

/// Nearest hit of `ray` on any pickable ground mesh.
///
/// Ground meshes are treated as horizontal rectangles at their position's
/// height, bounded by their geometry's XZ extent. Hits behind the ray origin
/// or outside the rectangle do not count.
#[must_use]
pub fn pick_ground(scene: &Scene, ray: &Ray) -> Option<GroundHit> {
    if ray.direction.y.abs() < PARALLEL_EPSILON {
        return None;
    }
    scene
        .meshes()
        .filter(|m| m.pickable && m.kind == MeshKind::Ground)
        .filter_map(|m| {
            let (lo, hi) = m.geometry.bounds()?;
            let t = (m.position.y - ray.origin.y) / ray.direction.y;
            if t <= 0.0 {
                return None;
            }
            let point = ray.at(t);
            let (lx, lz) = (point.x - m.position.x, point.z - m.position.z);
            let inside = lx >= lo.x && lx <= hi.x && lz >= lo.z && lz <= hi.z;
            inside.then_some(GroundHit { mesh: m.id, point, distance: t })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Ground point straight below `(x, z)`, if a pickable ground mesh covers it.
///
/// Uses the same bounds as [`pick_ground`], so a point accepted here is one
/// a pointer could have picked.
#[must_use]
pub fn ground_under(scene: &Scene, x: f64, z: f64) -> Option<GroundHit> {
    let ray = Ray { origin: Vec3::new(x, DROP_HEIGHT, z), direction: Vec3::new(0.0, -1.0, 0.0) };
    pick_ground(scene, &ray)
}
