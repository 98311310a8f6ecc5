pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scene;

pub use color::Color;
pub use config::{Palette, SceneConfig, Viewport};
pub use error::ConfigError;
pub use geometry::{Bounds, Offset, Point, Shape};
pub use scene::{HitPolicy, Scene};
