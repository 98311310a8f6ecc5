//! `Surface` backed by a Vello scene.
//!
//! Vello scenes are append-only encodings, so a clear cannot erase pixels.
//! A clear that covers the whole surface resets the encoding; a smaller
//! region is painted over with the background color. The caller presents the
//! scene via wgpu.

use crate::surface::Surface;
use kurbo::{Affine, Circle, Rect};
use peniko::{Color, Fill};
use sp_core::Viewport;
use vello::Scene;

pub struct VelloSurface {
    scene: Scene,
    viewport: Viewport,
    background: sp_core::Color,
}

impl VelloSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scene: Scene::new(),
            viewport,
            background: sp_core::Color::rgba8(255, 255, 255, 255),
        }
    }

    pub fn with_background(mut self, background: sp_core::Color) -> Self {
        self.background = background;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }

    fn covers_viewport(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x <= 0.0
            && y <= 0.0
            && x + width >= self.viewport.width
            && y + height >= self.viewport.height
    }
}

impl Surface for VelloSurface {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if self.covers_viewport(x, y, width, height) {
            self.scene.reset();
        } else {
            let rect = Rect::new(x, y, x + width, y + height);
            let color = to_peniko(self.background);
            self.scene
                .fill(Fill::NonZero, Affine::IDENTITY, color, None, &rect);
        }
    }

    fn fill_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64, color: sp_core::Color) {
        let rect = Rect::new(x, y, x + width, y + height);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, &rect);
    }

    fn fill_circular_arc(&mut self, cx: f64, cy: f64, radius: f64, color: sp_core::Color) {
        let circle = Circle::new((cx, cy), radius);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, to_peniko(color), None, &circle);
    }
}

fn to_peniko(color: sp_core::Color) -> Color {
    let [r, g, b, a] = color.to_rgba8();
    Color::from_rgba8(r, g, b, a)
}
