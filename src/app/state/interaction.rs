/// Zustand der Zeiger-Zustandsmaschine.
///
/// Der gezogene Punkt wird als Index gehalten, nie als Referenz. Der Index
/// wird bei jeder Verwendung gegen die aktuelle Liste geprüft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Punkt an `index` wurde gegriffen
    Dragging { index: usize },
}

/// Interaktionsbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Aktueller Drag-Zustand
    pub drag: DragState,
    /// Klick des gerade beendeten Drags verschlucken (Reposition-Modus)
    pub swallow_next_click: bool,
}

impl InteractionState {
    /// Erstellt den Leerlauf-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, solange ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Index des gezogenen Punkts, falls ein Drag aktiv ist.
    pub fn dragged_index(&self) -> Option<usize> {
        match self.drag {
            DragState::Dragging { index } => Some(index),
            DragState::Idle => None,
        }
    }

    /// Bricht einen laufenden Drag ab, wenn sein Index nicht mehr existiert.
    pub fn invalidate_beyond(&mut self, len: usize) {
        if self.dragged_index().is_some_and(|index| index >= len) {
            log::debug!("Drag abgebrochen: Punkt existiert nicht mehr");
            self.drag = DragState::Idle;
        }
    }
}
