//! UI-Komponenten: Toolbar, Status-Bar, Anleitung, Canvas-Input.

pub mod help;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Jede Komponente liest den `AppState` nur lesend und liefert `AppIntent`s
/// zurück; Mutationen laufen ausschließlich über den Controller.
pub mod status;
pub mod toolbar;

pub use help::render_help_panel;
pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::{render_toolbar, ToolbarState};
