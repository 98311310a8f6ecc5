//! Canvas2D surface.
//!
//! Maps the renderer's three primitives onto `CanvasRenderingContext2d`
//! calls: `clearRect`, `fillRect`, and a full `arc` filled as a path.

use sp_core::Color;
use sp_render::Surface;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

pub struct Canvas2dSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> Canvas2dSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2dSurface<'_> {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn fill_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_circular_arc(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.ctx.begin_path();
        // Only fails for a negative radius, which config validation rejects.
        let _ = self.ctx.arc(cx, cy, radius, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
        self.ctx.close_path();
    }
}
