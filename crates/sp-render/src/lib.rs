pub mod paint;
pub mod surface;
pub mod vello_surface;

pub use paint::paint_scene;
pub use surface::{DrawCommand, DrawList, Surface};
pub use vello_surface::VelloSurface;
