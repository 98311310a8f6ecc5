//! WASM bridge for shapepad: exposes the editing session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards its
//! `<canvas>` mouse events and 2D context; every call that changes the scene
//! repaints the context before returning.

mod render2d;

use render2d::Canvas2dSurface;
use sp_core::SceneConfig;
use sp_editor::input::client_to_canvas;
use sp_editor::{EditorSession, InputEvent};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The JS-facing canvas controller.
#[wasm_bindgen]
pub struct ShapeCanvas {
    session: EditorSession,
}

impl Default for ShapeCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ShapeCanvas {
    /// Create a controller holding the reference scene.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook_setup();
        Self {
            session: EditorSession::default(),
        }
    }

    /// Create a controller from a JSON scene config.
    /// Returns `undefined` if the config is invalid; see `validate_config`.
    pub fn from_config(json: &str) -> Option<ShapeCanvas> {
        console_error_panic_hook_setup();
        match SceneConfig::from_json(json) {
            Ok(config) => Some(Self {
                session: EditorSession::from_config(&config),
            }),
            Err(e) => {
                log::warn!("rejected scene config: {e}");
                None
            }
        }
    }

    pub fn width(&self) -> f64 {
        self.session.viewport().width
    }

    pub fn height(&self) -> f64 {
        self.session.viewport().height
    }

    /// Paint the full scene, e.g. right after mounting the canvas.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        self.session.render(&mut Canvas2dSurface::new(ctx));
    }

    /// Pointer down at canvas-local `(x, y)`. Returns true if the scene changed.
    pub fn handle_pointer_down(&mut self, ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> bool {
        self.handle(ctx, InputEvent::from_pointer_down(x, y))
    }

    /// Pointer move at canvas-local `(x, y)`. Returns true if the scene changed.
    pub fn handle_pointer_move(&mut self, ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> bool {
        self.handle(ctx, InputEvent::from_pointer_move(x, y))
    }

    /// Pointer released. Returns true if the scene changed (it never does).
    pub fn handle_pointer_up(&mut self, ctx: &CanvasRenderingContext2d) -> bool {
        self.handle(ctx, InputEvent::from_pointer_up())
    }

    /// Pointer down in client coordinates; `rect_left`/`rect_top` are the
    /// canvas element's `getBoundingClientRect()` origin.
    pub fn handle_mouse_down_client(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        client_x: f64,
        client_y: f64,
        rect_left: f64,
        rect_top: f64,
    ) -> bool {
        let p = client_to_canvas(client_x, client_y, rect_left, rect_top);
        self.handle_pointer_down(ctx, p.x, p.y)
    }

    /// Pointer move in client coordinates. See `handle_mouse_down_client`.
    pub fn handle_mouse_move_client(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        client_x: f64,
        client_y: f64,
        rect_left: f64,
        rect_top: f64,
    ) -> bool {
        let p = client_to_canvas(client_x, client_y, rect_left, rect_top);
        self.handle_pointer_move(ctx, p.x, p.y)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.drag_state().is_active()
    }

    /// Current shapes as a JSON array, in draw order.
    pub fn shapes_json(&self) -> String {
        serde_json::to_string(self.session.scene().snapshot()).unwrap_or_else(|_| "[]".to_string())
    }
}

impl ShapeCanvas {
    fn handle(&mut self, ctx: &CanvasRenderingContext2d, event: InputEvent) -> bool {
        self.session.handle(event, &mut Canvas2dSurface::new(ctx))
    }
}

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("shapepad WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone validation (no canvas needed) ───────────────────────────

/// Validate a JSON scene config. Returns `{"ok":true}` or
/// `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn validate_config(json: &str) -> String {
    let result = match SceneConfig::from_json(json) {
        Ok(_) => serde_json::json!({ "ok": true }),
        Err(e) => serde_json::json!({ "ok": false, "error": e.to_string() }),
    };
    result.to_string()
}

/// The reference scene config as JSON, for hosts that want to tweak it.
#[wasm_bindgen]
pub fn default_config() -> String {
    SceneConfig::default().to_json()
}
