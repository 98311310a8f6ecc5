//! Editing session: controller → scene store → renderer.
//!
//! The session owns the scene and the drag controller. Each pointer event
//! runs the controller, applies the resulting mutations to the scene, and,
//! if the scene's revision moved, repaints the full scene. All of it runs to
//! completion on the caller's thread before the next event is accepted.

use crate::drag::{DragController, DragState};
use crate::input::InputEvent;
use sp_core::{Palette, Scene, SceneConfig, Viewport};
use sp_render::{Surface, paint_scene};

/// A single change to the scene, produced by the drag controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneMutation {
    ToggleSelected { index: usize },
    /// Place the shape's anchor at `(x, y)`.
    MoveShape { index: usize, x: f64, y: f64 },
}

pub struct EditorSession {
    scene: Scene,
    controller: DragController,
    viewport: Viewport,
    palette: Palette,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl EditorSession {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            scene: Scene::from_config(config),
            controller: DragController::new(),
            viewport: config.viewport,
            palette: config.palette,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn drag_state(&self) -> DragState {
        self.controller.state()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Run one pointer event through the controller and apply its
    /// mutations. Returns `true` if the scene changed.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        let before = self.scene.revision();
        let mutations = self.controller.handle(&event, &self.scene);
        for mutation in mutations {
            self.apply_mutation(mutation);
        }
        self.scene.revision() != before
    }

    /// `dispatch`, then redraw `surface` if the scene changed.
    pub fn handle<S: Surface + ?Sized>(&mut self, event: InputEvent, surface: &mut S) -> bool {
        let changed = self.dispatch(event);
        if changed {
            self.render(surface);
        }
        changed
    }

    /// Unconditional full redraw (initial paint, host-driven refresh).
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        paint_scene(surface, self.scene.snapshot(), self.viewport, &self.palette);
    }

    pub fn apply_mutation(&mut self, mutation: SceneMutation) {
        match mutation {
            SceneMutation::ToggleSelected { index } => self.scene.toggle_selected(index),
            SceneMutation::MoveShape { index, x, y } => self.scene.move_shape(index, x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_render::{DrawCommand, DrawList};

    #[test]
    fn mutation_triggers_exactly_one_redraw() {
        let mut session = EditorSession::default();
        let mut surface = DrawList::new();

        assert!(session.handle(InputEvent::from_pointer_down(60.0, 70.0), &mut surface));
        assert_eq!(surface.len(), 3, "clear + two shapes");
        assert!(matches!(surface.commands[0], DrawCommand::Clear { .. }));
    }

    #[test]
    fn unchanged_scene_is_not_redrawn() {
        let mut session = EditorSession::default();
        let mut surface = DrawList::new();

        assert!(!session.handle(InputEvent::from_pointer_down(400.0, 400.0), &mut surface));
        assert!(!session.handle(InputEvent::from_pointer_move(410.0, 410.0), &mut surface));
        assert!(!session.handle(InputEvent::from_pointer_up(), &mut surface));
        assert!(surface.is_empty());
    }

    #[test]
    fn apply_mutation_moves_anchor() {
        let mut session = EditorSession::default();
        session.apply_mutation(SceneMutation::MoveShape {
            index: 1,
            x: 0.0,
            y: 0.0,
        });
        assert_eq!(
            session.scene().get(1).map(|s| s.anchor()),
            Some(sp_core::Point::new(0.0, 0.0))
        );
    }
}
