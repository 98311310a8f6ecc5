//! Scene → draw calls.
//!
//! Every redraw clears the whole viewport and repaints every shape in draw
//! order. There is no dirty-region tracking: scenes are a handful of shapes,
//! so the full pass is cheaper than bookkeeping.

use crate::surface::Surface;
use sp_core::{Palette, Shape, Viewport};

/// Paint the entire scene onto `surface`.
pub fn paint_scene<S: Surface + ?Sized>(
    surface: &mut S,
    shapes: &[Shape],
    viewport: Viewport,
    palette: &Palette,
) {
    log::trace!(
        "redraw: {} shapes on {}x{}",
        shapes.len(),
        viewport.width,
        viewport.height
    );
    surface.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    for shape in shapes {
        paint_shape(surface, shape, palette);
    }
}

fn paint_shape<S: Surface + ?Sized>(surface: &mut S, shape: &Shape, palette: &Palette) {
    let color = palette.fill_for(shape);
    log::trace!("paint {} {:?} with {color}", shape.kind_name(), shape.bounds());
    match *shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            ..
        } => surface.fill_rectangle(x, y, width, height, color),
        Shape::Circle { x, y, radius, .. } => surface.fill_circular_arc(x, y, radius, color),
    }
}
