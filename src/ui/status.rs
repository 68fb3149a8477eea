//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, DragState};
use crate::core::evaluate_bezier;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Points: {}", state.point_count()));

            ui.separator();

            match state.curve.degree() {
                Some(degree) => ui.label(format!("Degree: {}", degree)),
                None => ui.label("Degree: -"),
            };

            ui.separator();

            ui.label(format!("t = {:.3}", state.curve.parameter()));

            ui.separator();

            let drag_text = match state.interaction.drag {
                DragState::Idle => "Idle".to_string(),
                DragState::Dragging { index } => format!("Dragging #{}", index),
            };
            ui.label(drag_text);

            // Kurvenpunkt erst ab zwei Kontrollpunkten sinnvoll
            if state.point_count() > 1 {
                if let Some(point) =
                    evaluate_bezier(state.curve.points(), state.curve.parameter())
                {
                    ui.separator();
                    ui.label(format!("B(t) = ({:.1}, {:.1})", point.x, point.y));
                }
            }
        });
    });
}
