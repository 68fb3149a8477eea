//! Abstrakte Zeichenfläche: Löschen, gefüllter Kreis, Polylinie.

use glam::DVec2;

/// RGBA-Farbe (0.0..=1.0 pro Kanal).
pub type Rgba = [f32; 4];

/// Minimale 2D-Zeichenfläche, auf die der Painter eine `RenderScene` zeichnet.
///
/// Koordinaten sind flächenlokale Pixel; die Umrechnung auf Bildschirm-
/// Koordinaten ist Sache der Implementierung.
pub trait DrawSurface {
    /// Löscht die gesamte Fläche mit der Hintergrundfarbe.
    fn clear(&mut self, color: Rgba);
    /// Zeichnet einen gefüllten Kreis (Punkt-Marker).
    fn fill_circle(&mut self, center: DVec2, radius: f32, color: Rgba);
    /// Zeichnet eine offene Polylinie durch `points`.
    fn stroke_polyline(&mut self, points: &[DVec2], width: f32, color: Rgba);
}

/// Ein aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear {
        color: Rgba,
    },
    Circle {
        center: DVec2,
        radius: f32,
        color: Rgba,
    },
    Polyline {
        points: Vec<DVec2>,
        width: f32,
        color: Rgba,
    },
}

/// Zeichenfläche, die alle Befehle nur protokolliert (Headless-Betrieb, Tests).
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle seit dem Erstellen aufgezeichneten Befehle.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Anzahl der gezeichneten Kreise in der angegebenen Farbe.
    pub fn circle_count(&self, color: Rgba) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { color: c, .. } if *c == color))
            .count()
    }

    /// Alle Polylinien in der angegebenen Farbe.
    pub fn polylines(&self, color: Rgba) -> Vec<&[DVec2]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polyline {
                    points, color: c, ..
                } if *c == color => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Clear { color });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[DVec2], width: f32, color: Rgba) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }
}
