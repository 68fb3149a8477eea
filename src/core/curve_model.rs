//! Kurvenmodell: geordnete Kontrollpunkte, Unterteilungsparameter und Kurven-Sichtbarkeit.

use glam::DVec2;

/// Standardwert des Unterteilungsparameters beim Start.
pub const DEFAULT_PARAMETER: f64 = 0.5;

/// Klemmt einen Parameterwert auf [0, 1].
///
/// NaN wird als 0.0 behandelt, ±∞ landen auf der jeweiligen Grenze.
pub fn clamp_parameter(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Besitzt die Kontrollpunktliste samt Parameter `t` und Sichtbarkeits-Flag.
///
/// Die Einfügereihenfolge entspricht der Kurvenreihenfolge: der erste Punkt
/// ist das `t = 0`-Ende, der letzte das `t = 1`-Ende. Jede wirksame Mutation
/// erhöht die Revision (Grundlage für das Neuzeichnen bei Bedarf).
#[derive(Debug, Clone, PartialEq)]
pub struct CurveModel {
    points: Vec<DVec2>,
    parameter: f64,
    show_curve: bool,
    revision: u64,
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveModel {
    /// Erstellt ein leeres Modell mit `t = 0.5` und ausgeblendeter Kurve.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            parameter: DEFAULT_PARAMETER,
            show_curve: false,
            revision: 0,
        }
    }

    /// Hängt einen Punkt ans Ende der Liste.
    pub fn append(&mut self, point: DVec2) {
        self.points.push(point);
        self.bump();
    }

    /// Überschreibt die Position des letzten Punkts. No-op bei leerer Liste.
    pub fn move_last(&mut self, position: DVec2) -> bool {
        let Some(last) = self.points.last_mut() else {
            return false;
        };
        *last = position;
        self.bump();
        true
    }

    /// Überschreibt die Position des Punkts an `index`. No-op außerhalb der Liste.
    pub fn move_point(&mut self, index: usize, position: DVec2) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        *point = position;
        self.bump();
        true
    }

    /// Entfernt den letzten Punkt. No-op bei leerer Liste.
    pub fn remove_last(&mut self) -> Option<DVec2> {
        let removed = self.points.pop();
        if removed.is_some() {
            self.bump();
        }
        removed
    }

    /// Leert die Liste vollständig.
    pub fn clear(&mut self) {
        if !self.points.is_empty() {
            self.points.clear();
            self.bump();
        }
    }

    /// Setzt den Unterteilungsparameter (geklemmt auf [0, 1]).
    pub fn set_parameter(&mut self, t: f64) {
        let t = clamp_parameter(t);
        if t != self.parameter {
            self.parameter = t;
            self.bump();
        }
    }

    /// Blendet die vollständige Bézier-Kurve ein oder aus.
    pub fn set_show_curve(&mut self, show: bool) {
        if show != self.show_curve {
            self.show_curve = show;
            self.bump();
        }
    }

    /// Schaltet die Kurven-Sichtbarkeit um.
    pub fn toggle_show_curve(&mut self) {
        self.set_show_curve(!self.show_curve);
    }

    /// Read-only Sicht auf die Kontrollpunkte.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Aktueller Unterteilungsparameter `t`.
    pub fn parameter(&self) -> f64 {
        self.parameter
    }

    pub fn show_curve(&self) -> bool {
        self.show_curve
    }

    /// Zähler aller wirksamen Mutationen.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Kurvengrad (`len - 1`), `None` bei leerer Liste.
    pub fn degree(&self) -> Option<usize> {
        self.points.len().checked_sub(1)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
