//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::{DragMode, ViewerOptions};

/// Stellt das Drag-Verhalten um.
///
/// Ein laufender Drag wird im neuen Modus fortgesetzt; eine ausstehende
/// Klick-Unterdrückung verfällt.
pub fn set_drag_mode(state: &mut AppState, mode: DragMode) {
    if state.options.drag_mode == mode {
        return;
    }
    state.options.drag_mode = mode;
    state.interaction.swallow_next_click = false;
    log::info!("Drag-Modus: {:?}", mode);
}

/// Persistiert die aktuellen Optionen in der Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = ViewerOptions::config_path();
    state.options.save_to_file(&path)
}
