//! Handler für Kontrollpunkt-Mutationen (Append, Remove-Last, Clear).

use glam::DVec2;

use crate::app::{AppState, DragState};

/// Hängt einen neuen Kontrollpunkt an.
pub fn append(state: &mut AppState, pos: DVec2) {
    state.curve.append(pos);
    log::debug!(
        "Punkt {} hinzugefügt bei ({:.1}, {:.1})",
        state.curve.len(),
        pos.x,
        pos.y
    );
}

/// Entfernt den letzten Kontrollpunkt (No-op bei leerer Liste).
///
/// Ein laufender Drag auf dem entfernten Punkt wird abgebrochen.
pub fn remove_last(state: &mut AppState) {
    if state.curve.remove_last().is_some() {
        state.interaction.invalidate_beyond(state.curve.len());
    }
}

/// Entfernt alle Kontrollpunkte und bricht einen laufenden Drag ab.
pub fn clear(state: &mut AppState) {
    let removed = state.curve.len();
    state.curve.clear();
    state.interaction.drag = DragState::Idle;
    log::info!("Alle {} Punkte entfernt", removed);
}
