use crate::app::CommandLog;
use crate::core::CurveModel;
use crate::shared::ViewerOptions;

use super::InteractionState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte, Parameter `t` und Kurven-Sichtbarkeit
    pub curve: CurveModel,
    /// Zeiger-Zustandsmaschine (Idle / Dragging)
    pub interaction: InteractionState,
    /// Laufzeit-Optionen (Pick-Radius, Drag-Modus, Abtastung)
    pub options: ViewerOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen leeren App-State; Startwerte für `t` und Kurve aus den Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        let mut curve = CurveModel::new();
        curve.set_parameter(options.initial_parameter);
        curve.set_show_curve(options.initial_show_curve);

        Self {
            curve,
            interaction: InteractionState::new(),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.curve.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
