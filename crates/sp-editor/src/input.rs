//! Pointer input.
//!
//! The host translates its native mouse/touch events into canvas-local
//! `InputEvent`s before they reach the drag controller.

use sp_core::Point;

/// A normalized pointer event in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start).
    PointerDown { x: f64, y: f64 },

    /// Pointer moved, pressed or not.
    PointerMove { x: f64, y: f64 },

    /// Pointer released.
    PointerUp,
}

impl InputEvent {
    pub fn from_pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up() -> Self {
        Self::PointerUp
    }

    /// Extract position if the event carries one.
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } => Some(Point::new(x, y)),
            Self::PointerUp => None,
        }
    }
}

/// Convert viewport (client) coordinates to canvas-local ones, given the
/// top-left corner of the canvas element in the same client space.
pub fn client_to_canvas(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Point {
    Point::new(client_x - origin_left, client_y - origin_top)
}
