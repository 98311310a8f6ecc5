//! Startup configuration: canvas size, fill palette, hit policy, and the
//! initial shapes.
//!
//! The defaults reproduce the reference scene: a 500×500 canvas holding a
//! 100×100 rectangle at (50, 60) and a circle of radius 50 centered on
//! (200, 100), both unselected, painted green (blue when selected).

use crate::color::Color;
use crate::error::ConfigError;
use crate::geometry::Shape;
use crate::scene::HitPolicy;
use serde::{Deserialize, Serialize};

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
        }
    }
}

/// The two fill colors. Which one a shape gets depends only on its
/// `selected` flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub normal: Color,
    pub selected: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            normal: Color::GREEN,
            selected: Color::BLUE,
        }
    }
}

impl Palette {
    pub fn fill_for(&self, shape: &Shape) -> Color {
        if shape.is_selected() {
            self.selected
        } else {
            self.normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneConfig {
    pub viewport: Viewport,
    pub palette: Palette,
    pub hit_policy: HitPolicy,
    pub shapes: Vec<Shape>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            palette: Palette::default(),
            hit_policy: HitPolicy::default(),
            shapes: vec![
                Shape::rect(50.0, 60.0, 100.0, 100.0),
                Shape::circle(200.0, 100.0, 50.0),
            ],
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON scene config. Missing fields fall back to
    /// the reference defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!(
            "loaded scene config: {} shapes on {}x{} canvas",
            config.shapes.len(),
            config.viewport.width,
            config.viewport.height
        );
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Viewport { width, height } = self.viewport;
        if !(is_positive(width) && is_positive(height)) {
            return Err(ConfigError::InvalidViewport { width, height });
        }

        for (index, shape) in self.shapes.iter().enumerate() {
            let invalid = |reason| ConfigError::InvalidShape {
                index,
                kind: shape.kind_name(),
                reason,
            };
            let anchor = shape.anchor();
            if !(anchor.x.is_finite() && anchor.y.is_finite()) {
                return Err(invalid("position must be finite"));
            }
            match *shape {
                Shape::Rect { width, height, .. } => {
                    if !(is_positive(width) && is_positive(height)) {
                        return Err(invalid("width and height must be positive and finite"));
                    }
                }
                Shape::Circle { radius, .. } => {
                    if !is_positive(radius) {
                        return Err(invalid("radius must be positive and finite"));
                    }
                }
            }
        }
        Ok(())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
