use glam::DVec2;

use crate::shared::DragMode;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Positionen sind flächenlokale Pixel (Ursprung = linke obere Canvas-Ecke).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primärtaste gedrückt (möglicher Drag-Start)
    PointerPressed { pos: DVec2 },
    /// Zeiger bewegt (nur während eines Drags relevant)
    PointerMoved { pos: DVec2 },
    /// Primärtaste losgelassen
    PointerReleased { pos: DVec2 },
    /// Primärklick ohne Drag (Punkt hinzufügen)
    PrimaryClicked { pos: DVec2 },
    /// Rechtsklick (letzten Punkt entfernen)
    SecondaryClicked { pos: DVec2 },
    /// Slider-Wert geändert
    ParameterChanged { value: f64 },
    /// Parameter als Text eingegeben (z.B. aus einem Eingabefeld)
    ParameterTextEntered { text: String },
    /// Alle Punkte entfernen
    ResetRequested,
    /// Letzten Punkt entfernen (Button/Shortcut)
    RemoveLastRequested,
    /// Bézier-Kurve ein-/ausblenden
    ToggleCurveVisibilityRequested,
    /// Drag-Verhalten umstellen
    DragModeChanged { mode: DragMode },
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
}
