use glam::DVec2;

use crate::shared::DragMode;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punkt ans Ende der Kontrollpunktliste hängen
    AppendPoint { pos: DVec2 },
    /// Letzten Punkt entfernen (No-op bei leerer Liste)
    RemoveLastPoint,
    /// Alle Punkte entfernen und laufenden Drag abbrechen
    ClearPoints,
    /// Drag auf dem Punkt an `index` beginnen
    BeginDrag { index: usize },
    /// Gezogenen Punkt an neue Position setzen
    DragTo { pos: DVec2 },
    /// Drag beenden (Drag-Modus entscheidet über Entfernen)
    EndDrag,
    /// Verschluckten Klick nach einem Reposition-Drag verbrauchen
    ResetClickSuppression,
    /// Unterteilungsparameter setzen (wird geklemmt)
    SetParameter { value: f64 },
    /// Kurven-Sichtbarkeit umschalten
    ToggleCurveVisibility,
    /// Drag-Modus setzen
    SetDragMode { mode: DragMode },
    /// Optionen persistieren
    SaveOptions,
}
