//! Application State: zentrale Datenhaltung.
//!
//! Ersetzt globale Variablen: der Host besitzt genau einen `AppState`
//! pro Zeichenfläche und reicht ihn explizit an Controller und Renderer.

mod app_state;
mod interaction;

pub use app_state::AppState;
pub use interaction::{DragState, InteractionState};
