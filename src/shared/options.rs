//! Zentrale Konfiguration für den Casteljau-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Farben sind feste `const`-Werte und nicht konfigurierbar.

use crate::core::{PickPolicy, DEFAULT_PARAMETER};
use serde::{Deserialize, Serialize};

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Hintergrund der Zeichenfläche (Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Kontrollpunkte und Kontrollpolygon (Grün).
pub const CONTROL_COLOR: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Zwischenpunkte der Unterteilung (Orange).
pub const SUBDIVISION_POINT_COLOR: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
/// Verbindungslinien der Zwischenpunkte (Grau).
pub const SUBDIVISION_LINE_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Letzter Unterteilungspunkt = Kurvenpunkt bei `t` (Gelb).
pub const TERMINAL_POINT_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Vollständige Bézier-Kurve (Schwarz).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius in Pixeln (inklusive).
pub const PICK_RADIUS_PX: f64 = 5.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Punkt-Marker in Pixeln.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Linienstärke aller Polylinien in Pixeln.
pub const LINE_WIDTH_PX: f32 = 1.0;
/// Schrittweite beim Abtasten der Kurve über [0, 1].
pub const CURVE_SAMPLE_STEP: f64 = 0.01;

/// Verhalten beim Ziehen eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// Zieht immer den letzten Punkt und entfernt ihn beim Loslassen
    #[default]
    Legacy,
    /// Zieht den gegriffenen Punkt und lässt ihn an der neuen Position stehen
    Reposition,
}

/// Wann wird ein neuer Frame angefordert?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedrawMode {
    /// Nur nach Zustandsänderungen
    #[default]
    OnDemand,
    /// Jeder Frame fordert bedingungslos den nächsten an
    Continuous,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `casteljau_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Pick-Radius für Drag-Start in Pixeln
    pub pick_radius_px: f64,
    /// Welcher Punkt bei mehreren Treffern gegriffen wird
    pub pick_policy: PickPolicy,
    /// Drag-Verhalten (Legacy = Löschen beim Loslassen)
    pub drag_mode: DragMode,
    /// Radius der Punkt-Marker in Pixeln
    pub point_radius_px: f32,
    /// Linienstärke in Pixeln
    pub line_width_px: f32,
    /// Abtast-Schrittweite der Kurve
    pub curve_sample_step: f64,
    /// Startwert für den Unterteilungsparameter
    pub initial_parameter: f64,
    /// Kurve beim Start einblenden
    pub initial_show_curve: bool,
    /// Frame-Anforderung (bei Bedarf / kontinuierlich)
    pub redraw_mode: RedrawMode,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            pick_radius_px: PICK_RADIUS_PX,
            pick_policy: PickPolicy::FirstMatch,
            drag_mode: DragMode::Legacy,
            point_radius_px: POINT_RADIUS_PX,
            line_width_px: LINE_WIDTH_PX,
            curve_sample_step: CURVE_SAMPLE_STEP,
            initial_parameter: DEFAULT_PARAMETER,
            initial_show_curve: false,
            redraw_mode: RedrawMode::OnDemand,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text. Fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        log::info!("Optionen geladen (Drag-Modus: {:?})", opts.drag_mode);
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("casteljau_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("casteljau_viewer.toml")
    }
}
