//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use glam::DVec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Kontrollpunkte in Listenreihenfolge (Flächen-Pixel)
    pub control_points: Vec<DVec2>,
    /// Abgetastete Bézier-Kurve (leer wenn ausgeblendet oder < 2 Punkte)
    pub curve: Vec<DVec2>,
    /// Zwischenebenen der Unterteilung bei `t`, ohne die letzte Ebene
    pub scaffolding: Vec<Vec<DVec2>>,
    /// Kurvenpunkt bei `t` (letzte Unterteilungsebene)
    pub terminal_point: Option<DVec2>,
    /// Radius der Punkt-Marker
    pub point_radius: f32,
    /// Linienstärke aller Polylinien
    pub line_width: f32,
}
