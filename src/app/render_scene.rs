//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{sample_curve, subdivision_levels};
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Unter zwei Kontrollpunkten bleiben Kurve und Unterteilungs-Gerüst leer,
/// unabhängig vom Sichtbarkeits-Flag.
pub fn build(state: &AppState) -> RenderScene {
    let points = state.curve.points();
    let t = state.curve.parameter();

    let mut scaffolding = subdivision_levels(points, t);
    let terminal_point = scaffolding.pop().and_then(|last| last.first().copied());

    let curve = if state.curve.show_curve() {
        sample_curve(points, state.options.curve_sample_step)
    } else {
        Vec::new()
    };

    RenderScene {
        control_points: points.to_vec(),
        curve,
        scaffolding,
        terminal_point,
        point_radius: state.options.point_radius_px,
        line_width: state.options.line_width_px,
    }
}
