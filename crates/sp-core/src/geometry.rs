//! Shape value types and hit-test predicates.
//!
//! Every shape is positioned by its *anchor*: the top-left corner for a
//! rectangle, the center for a circle. Hit testing, dragging, and painting
//! all go through the anchor, so the asymmetry lives here and nowhere else.
//!
//! Coordinates are canvas pixels: origin top-left, y increasing downward.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

// ─── Points & offsets ────────────────────────────────────────────────────

/// A position in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, rhs: Point) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, rhs: Offset) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, rhs: Offset) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

// ─── Bounds ──────────────────────────────────────────────────────────────

/// Axis-aligned bounding box of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// ─── Shape ───────────────────────────────────────────────────────────────

/// A selectable, draggable shape.
///
/// `x`/`y` is the anchor: top-left for `Rect`, center for `Circle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        selected: bool,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        #[serde(default)]
        selected: bool,
    },
}

impl Shape {
    /// Unselected rectangle with its top-left corner at `(x, y)`.
    pub const fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Rect {
            x,
            y,
            width,
            height,
            selected: false,
        }
    }

    /// Unselected circle centered on `(x, y)`.
    pub const fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self::Circle {
            x,
            y,
            radius,
            selected: false,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
        }
    }

    pub fn is_selected(&self) -> bool {
        match *self {
            Self::Rect { selected, .. } | Self::Circle { selected, .. } => selected,
        }
    }

    /// Copy with the selection flag flipped.
    pub fn toggled(&self) -> Self {
        let mut shape = *self;
        match &mut shape {
            Self::Rect { selected, .. } | Self::Circle { selected, .. } => *selected = !*selected,
        }
        shape
    }

    /// True iff `p` lies strictly inside the shape. Points on the edge miss.
    pub fn contains_point(&self, p: Point) -> bool {
        match *self {
            Self::Rect {
                x,
                y,
                width,
                height,
                ..
            } => p.x > x && p.x < x + width && p.y > y && p.y < y + height,
            Self::Circle { x, y, radius, .. } => p.distance(Point::new(x, y)) < radius,
        }
    }

    /// Reference point used for positioning and drag offsets.
    pub fn anchor(&self) -> Point {
        match *self {
            Self::Rect { x, y, .. } | Self::Circle { x, y, .. } => Point::new(x, y),
        }
    }

    /// Copy shifted by `(dx, dy)`. Size and selection are unchanged.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let mut shape = *self;
        match &mut shape {
            Self::Rect { x, y, .. } | Self::Circle { x, y, .. } => {
                *x += dx;
                *y += dy;
            }
        }
        shape
    }

    /// Copy translated so that its anchor sits exactly on `p`.
    pub fn with_anchor(&self, p: Point) -> Self {
        let mut shape = *self;
        match &mut shape {
            Self::Rect { x, y, .. } | Self::Circle { x, y, .. } => {
                *x = p.x;
                *y = p.y;
            }
        }
        shape
    }

    pub fn bounds(&self) -> Bounds {
        match *self {
            Self::Rect {
                x,
                y,
                width,
                height,
                ..
            } => Bounds {
                x,
                y,
                width,
                height,
            },
            Self::Circle { x, y, radius, .. } => Bounds {
                x: x - radius,
                y: y - radius,
                width: radius * 2.0,
                height: radius * 2.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn rect_edges_are_not_hits() {
        let rect = Shape::rect(50.0, 60.0, 100.0, 100.0);
        assert!(rect.contains_point(Point::new(51.0, 61.0)));
        assert!(rect.contains_point(Point::new(100.0, 110.0)));
        assert!(!rect.contains_point(Point::new(50.0, 100.0)), "left edge");
        assert!(!rect.contains_point(Point::new(150.0, 100.0)), "right edge");
        assert!(!rect.contains_point(Point::new(100.0, 60.0)), "top edge");
        assert!(!rect.contains_point(Point::new(100.0, 160.0)), "bottom edge");
        assert!(!rect.contains_point(Point::new(10.0, 10.0)));
    }

    #[test]
    fn circle_boundary_is_strict() {
        let circle = Shape::circle(200.0, 100.0, 50.0);
        assert!(!circle.contains_point(Point::new(250.0, 100.0)));
        assert!(!circle.contains_point(Point::new(200.0, 50.0)));
        assert!(circle.contains_point(Point::new(249.999, 100.0)));
        assert!(circle.contains_point(Point::new(200.0, 100.0 + 49.999)));
    }

    #[test]
    fn circle_is_not_its_bounding_box() {
        let circle = Shape::circle(200.0, 100.0, 50.0);
        // Inside the bounding square, outside the disc.
        assert!(!circle.contains_point(Point::new(155.0, 55.0)));
    }

    #[test]
    fn anchor_depends_on_kind() {
        assert_eq!(
            Shape::rect(50.0, 60.0, 100.0, 100.0).anchor(),
            Point::new(50.0, 60.0)
        );
        assert_eq!(
            Shape::circle(200.0, 100.0, 50.0).anchor(),
            Point::new(200.0, 100.0)
        );
    }

    #[test]
    fn translate_keeps_size_and_selection() {
        let rect = Shape::rect(50.0, 60.0, 100.0, 80.0).toggled();
        assert_eq!(
            rect.translate(10.0, -5.0),
            Shape::Rect {
                x: 60.0,
                y: 55.0,
                width: 100.0,
                height: 80.0,
                selected: true,
            }
        );

        let circle = Shape::circle(0.0, 0.0, 5.0);
        assert_eq!(circle.translate(3.0, 4.0), Shape::circle(3.0, 4.0, 5.0));
    }

    #[test]
    fn with_anchor_places_anchor_exactly() {
        let circle = Shape::circle(200.0, 100.0, 50.0);
        let moved = circle.with_anchor(Point::new(10.0, 20.0));
        assert_eq!(moved.anchor(), Point::new(10.0, 20.0));
        assert_eq!(moved, Shape::circle(10.0, 20.0, 50.0));
    }

    #[test]
    fn toggled_flips_only_selection() {
        let circle = Shape::circle(1.0, 2.0, 3.0);
        assert!(!circle.is_selected());
        assert!(circle.toggled().is_selected());
        assert_eq!(circle.toggled().toggled(), circle);
    }

    #[test]
    fn circle_bounds_surround_center() {
        let b = Shape::circle(200.0, 100.0, 50.0).bounds();
        assert_eq!(
            b,
            Bounds {
                x: 150.0,
                y: 50.0,
                width: 100.0,
                height: 100.0
            }
        );
        assert_eq!(b.center(), Point::new(200.0, 100.0));
    }

    #[test]
    fn point_offset_arithmetic() {
        let grab = Point::new(75.0, 90.0) - Point::new(50.0, 60.0);
        assert_eq!(grab, Offset::new(25.0, 30.0));
        assert_eq!(Point::new(175.0, 190.0) - grab, Point::new(150.0, 160.0));
        assert_eq!(Point::new(50.0, 60.0) + grab, Point::new(75.0, 90.0));
    }

    #[test]
    fn shape_json_is_tagged_by_kind() {
        let json = r#"{"kind":"circle","x":200,"y":100,"radius":50}"#;
        let shape: Shape = serde_json::from_str(json).unwrap();
        assert_eq!(shape, Shape::circle(200.0, 100.0, 50.0));
    }

    proptest! {
        #[test]
        fn rect_hit_matches_interval_formula(
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
            w in 0.5f64..300.0,
            h in 0.5f64..300.0,
            px in -600.0f64..900.0,
            py in -600.0f64..900.0,
        ) {
            let inside_x = x < px && px < x + w;
            let inside_y = y < py && py < y + h;
            let rect = Shape::rect(x, y, w, h);
            prop_assert_eq!(rect.contains_point(Point::new(px, py)), inside_x && inside_y);
        }

        #[test]
        fn circle_hit_matches_squared_distance(
            cx in -500.0f64..500.0,
            cy in -500.0f64..500.0,
            r in 0.5f64..300.0,
            px in -900.0f64..900.0,
            py in -900.0f64..900.0,
        ) {
            let d2 = (px - cx).powi(2) + (py - cy).powi(2);
            // Skip points within rounding distance of the rim.
            prop_assume!((d2 - r * r).abs() > 1e-6 * r * r);
            let circle = Shape::circle(cx, cy, r);
            prop_assert_eq!(circle.contains_point(Point::new(px, py)), d2 < r * r);
        }

        #[test]
        fn translate_moves_anchor_by_delta(
            x in -500.0f64..500.0,
            y in -500.0f64..500.0,
            dx in -500.0f64..500.0,
            dy in -500.0f64..500.0,
        ) {
            let shape = Shape::circle(x, y, 10.0);
            let moved = shape.translate(dx, dy).anchor();
            prop_assert!((moved.x - (x + dx)).abs() < 1e-9);
            prop_assert!((moved.y - (y + dy)).abs() < 1e-9);
        }
    }
}
