pub mod drag;
pub mod input;
pub mod session;

pub use drag::{DragController, DragState};
pub use input::InputEvent;
pub use session::{EditorSession, SceneMutation};
