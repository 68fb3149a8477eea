//! `DrawSurface`-Implementierung auf Basis des egui-Painters.

use glam::DVec2;

use super::surface::{DrawSurface, Rgba};

/// Zeichnet in ein egui-Rechteck; flächenlokale Pixel beginnen bei `rect.min`.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> EguiSurface<'a> {
    /// Erstellt eine Zeichenfläche für den Canvas-Bereich `rect`.
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: DVec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + p.x as f32, self.rect.min.y + p.y as f32)
    }
}

/// Wandelt eine RGBA-Farbe (0..1) in `Color32` um.
pub fn to_color32(color: Rgba) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

impl DrawSurface for EguiSurface<'_> {
    fn clear(&mut self, color: Rgba) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn fill_circle(&mut self, center: DVec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn stroke_polyline(&mut self, points: &[DVec2], width: f32, color: Rgba) {
        let screen_points: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter.add(egui::Shape::line(
            screen_points,
            egui::Stroke::new(width, to_color32(color)),
        ));
    }
}
