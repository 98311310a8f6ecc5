//! Scene store: the ordered shape list plus per-shape selection.
//!
//! Order is draw order. Shapes are never added or removed after the scene is
//! built; every update replaces a shape value in place. Each mutation bumps
//! `revision`, which is how observers (the renderer) learn that a redraw is
//! due.

use crate::config::SceneConfig;
use crate::geometry::{Point, Shape};
use serde::{Deserialize, Serialize};

/// Which shape wins when several overlap under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HitPolicy {
    /// Scan in draw order; the first declared shape that contains the point wins.
    #[default]
    FirstDeclared,
    /// Scan in reverse draw order; the last drawn (visually topmost) shape wins.
    Topmost,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    hit_policy: HitPolicy,
    revision: u64,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            shapes,
            hit_policy: HitPolicy::default(),
            revision: 0,
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.shapes.clone()).with_hit_policy(config.hit_policy)
    }

    pub fn with_hit_policy(mut self, policy: HitPolicy) -> Self {
        self.hit_policy = policy;
        self
    }

    pub fn hit_policy(&self) -> HitPolicy {
        self.hit_policy
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Read-only view of all shapes in draw order.
    pub fn snapshot(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of mutations applied since the scene was built.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Index of the shape under `p`, or `None` for background.
    /// At most one index is returned even when shapes overlap.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        let hit = |(_, shape): &(usize, &Shape)| shape.contains_point(p);
        let mut indexed = self.shapes.iter().enumerate();
        let found = match self.hit_policy {
            HitPolicy::FirstDeclared => indexed.find(hit),
            HitPolicy::Topmost => indexed.rev().find(hit),
        };
        found.map(|(index, _)| index)
    }

    /// Flip the `selected` flag of one shape.
    ///
    /// # Panics
    /// If `index` is out of range. Callers derive indices from `hit_test`.
    pub fn toggle_selected(&mut self, index: usize) {
        let shape = self.shape_mut(index);
        *shape = shape.toggled();
        self.revision += 1;
    }

    /// Replace the shape at `index` with a copy anchored at `(new_x, new_y)`.
    ///
    /// # Panics
    /// If `index` is out of range. Callers derive indices from `hit_test`.
    pub fn move_shape(&mut self, index: usize, new_x: f64, new_y: f64) {
        let shape = self.shape_mut(index);
        *shape = shape.with_anchor(Point::new(new_x, new_y));
        self.revision += 1;
    }

    fn shape_mut(&mut self, index: usize) -> &mut Shape {
        let len = self.shapes.len();
        match self.shapes.get_mut(index) {
            Some(shape) => shape,
            None => panic!("scene index {index} out of range (scene holds {len} shapes)"),
        }
    }
}
