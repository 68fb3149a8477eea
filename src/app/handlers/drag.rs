//! Handler für den Drag-Lifecycle (Begin → DragTo → End).

use glam::DVec2;

use crate::app::{AppState, DragState};
use crate::shared::DragMode;

/// Beginnt einen Drag auf dem Punkt an `index`.
pub fn begin(state: &mut AppState, index: usize) {
    if index >= state.curve.len() {
        log::debug!("Drag-Start ignoriert: Index {} außerhalb der Liste", index);
        return;
    }
    state.interaction.drag = DragState::Dragging { index };
    log::debug!("Drag gestartet auf Punkt {}", index);
}

/// Verschiebt den gezogenen Punkt.
///
/// Legacy: überschreibt immer den letzten Punkt der Liste, unabhängig vom
/// gegriffenen. Reposition: überschreibt den gegriffenen Punkt.
pub fn drag_to(state: &mut AppState, pos: DVec2) {
    let Some(index) = state.interaction.dragged_index() else {
        return;
    };

    let moved = match state.options.drag_mode {
        DragMode::Legacy => state.curve.move_last(pos),
        DragMode::Reposition => state.curve.move_point(index, pos),
    };
    if !moved {
        state.interaction.invalidate_beyond(state.curve.len());
    }
}

/// Beendet den Drag.
///
/// Legacy: entfernt den letzten Punkt. Reposition: behält die Position und
/// verschluckt den Klick, den dasselbe Drücken/Loslassen noch erzeugt.
pub fn end(state: &mut AppState) {
    if !state.interaction.is_dragging() {
        return;
    }
    state.interaction.drag = DragState::Idle;

    match state.options.drag_mode {
        DragMode::Legacy => {
            state.curve.remove_last();
        }
        DragMode::Reposition => {
            state.interaction.swallow_next_click = true;
        }
    }
    log::debug!("Drag beendet ({:?})", state.options.drag_mode);
}

/// Hebt die Klick-Unterdrückung nach einem Reposition-Drag auf.
pub fn reset_click_suppression(state: &mut AppState) {
    state.interaction.swallow_next_click = false;
}
