//! Input model: mouse buttons, modifier keys, wheel deltas and the gesture
//! state tracked between pointer-down and pointer-up.
//!
//! A primary press while drawing records a ground point and starts no
//! gesture. Any other press starts an orbit drag that rotates the camera
//! until the button is released.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Gesture in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// Waiting for the next pointer-down.
    #[default]
    Idle,
    /// Dragging to orbit the camera.
    Orbiting {
        /// Screen position of the previous pointer event.
        last_screen: Point,
    },
}

impl InputState {
    /// Advance an orbit drag to `screen`, returning the delta since the last
    /// event. `None` while idle.
    pub fn drag_to(&mut self, screen: Point) -> Option<(f64, f64)> {
        match self {
            Self::Idle => None,
            Self::Orbiting { last_screen } => {
                let delta = (screen.x - last_screen.x, screen.y - last_screen.y);
                *last_screen = screen;
                Some(delta)
            }
        }
    }
}
