//! Extrusion of an authored polyline into a solid.
//!
//! The picked points first become a transient [`Polyline`]; the polyline is
//! lifted into a profile and swept along the fixed vertical path. Only the
//! resulting [`Geometry`] survives: the polyline is consumed by
//! [`extrude_polyline`] and never enters the scene.

#[cfg(test)]
#[path = "extrude_test.rs"]
mod extrude_test;

use crate::consts::{EXTRUDE_HEIGHT, PROFILE_LIFT};
use crate::math::Vec3;
use crate::scene::Geometry;

/// Fixed sweep path: straight up, unit length.
pub const EXTRUDE_PATH: [Vec3; 2] = [Vec3::ZERO, Vec3::new(0.0, EXTRUDE_HEIGHT, 0.0)];

/// Line geometry through the picked points, in authoring order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Vec3>,
}

impl Polyline {
    #[must_use]
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of line segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Extrusion profile: every vertex raised by [`PROFILE_LIFT`].
    #[must_use]
    pub fn profile(&self) -> Vec<Vec3> {
        self.points
            .iter()
            .map(|p| *p + Vec3::new(0.0, PROFILE_LIFT, 0.0))
            .collect()
    }
}

/// Sweep `profile` along `path`.
///
/// Produces one ring of vertices per path node and two triangles per profile
/// segment between consecutive rings. Profiles with fewer than two points or
/// paths with fewer than two nodes yield empty geometry.
#[must_use]
pub fn sweep(profile: &[Vec3], path: &[Vec3]) -> Geometry {
    let n = profile.len();
    if n < 2 || path.len() < 2 {
        return Geometry::default();
    }
    let vertices = path
        .iter()
        .flat_map(|node| profile.iter().map(move |p| *p + *node))
        .collect();
    let mut triangles = Vec::with_capacity((path.len() - 1) * (n - 1) * 2);
    for ring in 0..path.len() - 1 {
        let (lower, upper) = (ring * n, (ring + 1) * n);
        for j in 0..n - 1 {
            let (a0, a1, b0, b1) = (lower + j, lower + j + 1, upper + j, upper + j + 1);
            triangles.push([a0, b0, a1]);
            triangles.push([a1, b0, b1]);
        }
    }
    Geometry { vertices, triangles }
}

/// Build the transient line from `points`, extrude it along
/// [`EXTRUDE_PATH`], and release the line.
#[must_use]
pub fn extrude_polyline(points: Vec<Vec3>) -> Geometry {
    let line = Polyline::new(points);
    sweep(&line.profile(), &EXTRUDE_PATH)
}
