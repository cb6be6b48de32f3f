//! Shape authoring: collects picked ground points between "start drawing" and
//! "finalize".
//!
//! Two states. `Idle` ignores points. `Drawing` appends every recorded point.
//! Finalizing hands back the accumulated polyline and returns to `Idle`, but
//! only once at least [`MIN_SHAPE_POINTS`] points exist; otherwise nothing
//! changes and the caller gets an [`AuthoringError`] to show the user.

#[cfg(test)]
#[path = "authoring_test.rs"]
mod authoring_test;

use crate::consts::MIN_SHAPE_POINTS;
use crate::math::Vec3;

/// Why a finalize was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthoringError {
    /// Finalize without a preceding start.
    #[error("not drawing; start drawing first")]
    NotDrawing,
    /// Too few points for a shape.
    #[error("not enough points: have {have}, need at least {MIN_SHAPE_POINTS}")]
    NotEnoughPoints { have: usize },
}

/// Authoring state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthoringState {
    #[default]
    Idle,
    Drawing {
        /// Picked points in order.
        points: Vec<Vec3>,
    },
}

/// The drawing state machine.
#[derive(Debug, Clone, Default)]
pub struct ShapeAuthoring {
    state: AuthoringState,
}

impl ShapeAuthoring {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &AuthoringState {
        &self.state
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, AuthoringState::Drawing { .. })
    }

    /// Points collected so far; empty while idle.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        match &self.state {
            AuthoringState::Idle => &[],
            AuthoringState::Drawing { points } => points,
        }
    }

    /// Enter `Drawing` with an empty point sequence. Restarting discards any
    /// points collected so far.
    pub fn start(&mut self) {
        self.state = AuthoringState::Drawing { points: Vec::new() };
    }

    /// Append a point while drawing. Returns whether it was recorded.
    pub fn record(&mut self, point: Vec3) -> bool {
        match &mut self.state {
            AuthoringState::Idle => false,
            AuthoringState::Drawing { points } => {
                points.push(point);
                true
            }
        }
    }

    /// Abandon the in-progress shape.
    pub fn cancel(&mut self) {
        self.state = AuthoringState::Idle;
    }

    /// Finish the shape, returning its points and going back to `Idle`.
    ///
    /// # Errors
    ///
    /// [`AuthoringError::NotDrawing`] while idle and
    /// [`AuthoringError::NotEnoughPoints`] with fewer than two points; the
    /// state is left untouched in both cases.
    pub fn finalize(&mut self) -> Result<Vec<Vec3>, AuthoringError> {
        let have = match &self.state {
            AuthoringState::Idle => return Err(AuthoringError::NotDrawing),
            AuthoringState::Drawing { points } => points.len(),
        };
        if have < MIN_SHAPE_POINTS {
            return Err(AuthoringError::NotEnoughPoints { have });
        }
        match std::mem::take(&mut self.state) {
            AuthoringState::Drawing { points } => Ok(points),
            AuthoringState::Idle => Err(AuthoringError::NotDrawing),
        }
    }
}
