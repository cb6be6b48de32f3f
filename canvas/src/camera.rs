//! Arc-rotate camera: orbits a target at a given radius and maps between
//! world space and the canvas.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{
    CAMERA_ALPHA, CAMERA_BETA, CAMERA_BETA_EPSILON, CAMERA_FOV, CAMERA_MAX_RADIUS, CAMERA_MIN_RADIUS, CAMERA_NEAR,
    CAMERA_RADIUS, ORBIT_SENSITIVITY, ZOOM_SENSITIVITY,
};
use crate::math::Vec3;
use crate::pick::Ray;

/// A point in screen space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the render surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether there is any area to project onto.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// A world point projected onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: Point,
    /// Distance along the view direction; larger is farther.
    pub depth: f64,
}

/// Camera orbiting `target`.
///
/// `alpha` is the azimuth around the vertical axis, `beta` the angle from the
/// vertical axis, both in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub alpha: f64,
    pub beta: f64,
    pub radius: f64,
    pub target: Vec3,
    pub fov: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self { alpha: CAMERA_ALPHA, beta: CAMERA_BETA, radius: CAMERA_RADIUS, target: Vec3::ZERO, fov: CAMERA_FOV }
    }
}

/// Orthonormal view basis.
struct Basis {
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl OrbitCamera {
    /// World-space camera position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let (sa, ca) = self.alpha.sin_cos();
        let (sb, cb) = self.beta.sin_cos();
        self.target + Vec3::new(ca * sb, cb, sa * sb) * self.radius
    }

    fn basis(&self) -> Basis {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::UP).normalize();
        let up = right.cross(forward);
        Basis { forward, right, up }
    }

    fn focal(&self) -> f64 {
        1.0 / (self.fov * 0.5).tan()
    }

    /// Project a world point. `None` when it lies behind the near plane or the
    /// viewport has no area.
    #[must_use]
    pub fn project(&self, world: Vec3, viewport: Viewport) -> Option<Projected> {
        if viewport.is_empty() {
            return None;
        }
        let basis = self.basis();
        let d = world - self.eye();
        let depth = d.dot(basis.forward);
        if depth <= CAMERA_NEAR {
            return None;
        }
        let focal = self.focal();
        let ndc_x = d.dot(basis.right) / depth * focal / viewport.aspect();
        let ndc_y = d.dot(basis.up) / depth * focal;
        Some(Projected {
            screen: Point::new((ndc_x + 1.0) * 0.5 * viewport.width, (1.0 - ndc_y) * 0.5 * viewport.height),
            depth,
        })
    }

    /// Ray from the eye through a screen point. `None` if the viewport has no area.
    #[must_use]
    pub fn view_ray(&self, screen: Point, viewport: Viewport) -> Option<Ray> {
        if viewport.is_empty() {
            return None;
        }
        let basis = self.basis();
        let focal = self.focal();
        let ndc_x = 2.0 * screen.x / viewport.width - 1.0;
        let ndc_y = 1.0 - 2.0 * screen.y / viewport.height;
        let direction =
            basis.forward + basis.right * (ndc_x * viewport.aspect() / focal) + basis.up * (ndc_y / focal);
        Some(Ray { origin: self.eye(), direction: direction.normalize() })
    }

    /// Orbit by a screen-space drag delta.
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.alpha -= dx * ORBIT_SENSITIVITY;
        self.beta = (self.beta - dy * ORBIT_SENSITIVITY)
            .clamp(CAMERA_BETA_EPSILON, std::f64::consts::PI - CAMERA_BETA_EPSILON);
    }

    /// Zoom by a wheel delta (positive = away from the target).
    pub fn zoom(&mut self, delta: f64) {
        self.radius = (self.radius * (1.0 + delta * ZOOM_SENSITIVITY)).clamp(CAMERA_MIN_RADIUS, CAMERA_MAX_RADIUS);
    }
}
