//! 2D raster surface abstraction.
//!
//! The renderer only needs three primitives: clear a region, fill an
//! axis-aligned rectangle, fill a full circle. Backends implement `Surface`
//! for whatever they draw to (a Vello scene, a browser Canvas2D context).

use sp_core::Color;

/// A drawing target.
pub trait Surface {
    /// Erase the given region back to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fill an axis-aligned rectangle whose top-left corner is `(x, y)`.
    fn fill_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    /// Fill a full circular arc (0 → 2π) centered on `(cx, cy)`.
    fn fill_circular_arc(&mut self, cx: f64, cy: f64, radius: f64, color: Color);
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    CircularArc {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
    },
}

/// Recording surface: keeps every draw call in order.
///
/// Used for headless rendering and to assert on renderer output.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawList {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::Rectangle {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circular_arc(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.commands.push(DrawCommand::CircularArc {
            cx,
            cy,
            radius,
            color,
        });
    }
}
