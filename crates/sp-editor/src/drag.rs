//! Drag controller: pointer events → selection and position updates.
//!
//! ```text
//!            down (hit i)                 move
//!   Idle ───────────────────▶ Dragging ◀──────┐
//!    ▲  ◀─────────────────────   │  └─────────┘
//!    │          up               │
//!    └── down (miss), move, up ──┘ (no-ops while Idle)
//! ```
//!
//! A successful pointer-down toggles the hit shape's selection immediately,
//! so a click with no movement still flips it. While dragging, the shape's
//! anchor follows the pointer at the offset captured on pointer-down; the
//! grab point never jumps to the anchor.
//!
//! A drag only ends on pointer-up. Losing pointer capture does not cancel it.

use crate::input::InputEvent;
use crate::session::SceneMutation;
use smallvec::{SmallVec, smallvec};
use sp_core::{Offset, Point, Scene};

/// Mutations produced by a single pointer event.
pub type Mutations = SmallVec<[SceneMutation; 2]>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `offset` is pointer position minus the target's anchor at drag start.
    Dragging { target: usize, offset: Offset },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn target(&self) -> Option<usize> {
        match *self {
            Self::Dragging { target, .. } => Some(target),
            Self::Idle => None,
        }
    }

    pub fn offset(&self) -> Option<Offset> {
        match *self {
            Self::Dragging { offset, .. } => Some(offset),
            Self::Idle => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Handle one pointer event against the current scene, returning the
    /// mutations to apply. The scene itself is never touched here.
    pub fn handle(&mut self, event: &InputEvent, scene: &Scene) -> Mutations {
        match *event {
            InputEvent::PointerDown { x, y } => self.press(Point::new(x, y), scene),
            InputEvent::PointerMove { x, y } => self.drag(Point::new(x, y), scene),
            InputEvent::PointerUp => {
                self.release();
                SmallVec::new()
            }
        }
    }

    fn press(&mut self, p: Point, scene: &Scene) -> Mutations {
        if let DragState::Dragging { target, .. } = self.state {
            // Pointer-up never arrived (released outside the surface).
            log::debug!("dropping stale drag of shape {target}");
            self.state = DragState::Idle;
        }

        let Some(index) = scene.hit_test(p) else {
            log::debug!("pointer down at ({}, {}) hit nothing", p.x, p.y);
            return SmallVec::new();
        };
        let shape = target_shape(scene, index);
        let offset = p - shape.anchor();
        log::debug!(
            "drag start: {} {index}, grab offset ({}, {})",
            shape.kind_name(),
            offset.dx,
            offset.dy
        );

        self.state = DragState::Dragging {
            target: index,
            offset,
        };
        smallvec![SceneMutation::ToggleSelected { index }]
    }

    fn drag(&self, p: Point, scene: &Scene) -> Mutations {
        let DragState::Dragging { target, offset } = self.state else {
            return SmallVec::new();
        };
        let _ = target_shape(scene, target);

        let anchor = p - offset;
        log::trace!("drag {target} → ({}, {})", anchor.x, anchor.y);
        smallvec![SceneMutation::MoveShape {
            index: target,
            x: anchor.x,
            y: anchor.y,
        }]
    }

    fn release(&mut self) {
        if let DragState::Dragging { target, .. } = self.state {
            log::debug!("drag end: shape {target}");
        }
        self.state = DragState::Idle;
    }
}

/// Look up the drag target. A missing target means the controller and the
/// scene disagree, and continuing would move some other shape.
fn target_shape(scene: &Scene, index: usize) -> &sp_core::Shape {
    match scene.get(index) {
        Some(shape) => shape,
        None => panic!(
            "drag target {index} missing from scene of {} shapes",
            scene.len()
        ),
    }
}
