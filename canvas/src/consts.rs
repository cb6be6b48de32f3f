//! Shared numeric constants for the canvas crate.

// ── Stage ───────────────────────────────────────────────────────

/// Ground plane edge length in world units (square, centered on the origin).
pub const GROUND_SIZE: f64 = 20.0;

/// Edge length of the box that stands in for a remote player.
pub const PLAYER_BOX_SIZE: f64 = 1.0;

// ── Authoring ───────────────────────────────────────────────────

/// Fewest picked points a shape can be finalized from.
pub const MIN_SHAPE_POINTS: usize = 2;

/// Height the extrusion profile is lifted above the picked points.
pub const PROFILE_LIFT: f64 = 0.1;

/// Length of the vertical extrusion path.
pub const EXTRUDE_HEIGHT: f64 = 1.0;

/// Placement offset of a finished solid above the ground (avoids z-fighting).
pub const SHAPE_LIFT: f64 = 0.01;

// ── Camera ──────────────────────────────────────────────────────

/// Initial azimuth in radians.
pub const CAMERA_ALPHA: f64 = std::f64::consts::FRAC_PI_2;

/// Initial polar angle in radians.
pub const CAMERA_BETA: f64 = std::f64::consts::FRAC_PI_4;

/// Initial distance from the target.
pub const CAMERA_RADIUS: f64 = 10.0;

/// Closest / farthest the camera may zoom.
pub const CAMERA_MIN_RADIUS: f64 = 2.0;
pub const CAMERA_MAX_RADIUS: f64 = 100.0;

/// Keeps the polar angle off the poles so the view basis stays defined.
pub const CAMERA_BETA_EPSILON: f64 = 0.01;

/// Vertical field of view in radians.
pub const CAMERA_FOV: f64 = 0.8;

/// Near clip distance; anything closer is not projected.
pub const CAMERA_NEAR: f64 = 0.1;

/// Radians of orbit per dragged CSS pixel.
pub const ORBIT_SENSITIVITY: f64 = 0.005;

/// Fractional radius change per wheel pixel.
pub const ZOOM_SENSITIVITY: f64 = 0.001;

// ── Rendering ───────────────────────────────────────────────────

/// Radius of the marker drawn on each in-progress point, in screen pixels.
pub const POINT_MARKER_RADIUS_PX: f64 = 4.0;
