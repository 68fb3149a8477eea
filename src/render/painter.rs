//! Zeichnet eine `RenderScene` auf eine beliebige `DrawSurface`.

use glam::DVec2;

use super::surface::{DrawSurface, Rgba};
use crate::shared::options::{
    BACKGROUND_COLOR, CONTROL_COLOR, CURVE_COLOR, SUBDIVISION_LINE_COLOR,
    SUBDIVISION_POINT_COLOR, TERMINAL_POINT_COLOR,
};
use crate::shared::RenderScene;

/// Zeichnet einen kompletten Frame von Grund auf neu.
///
/// Reihenfolge: Hintergrund, Kontrollpunkte + Kontrollpolygon, dann (ab zwei
/// Punkten) Kurve, Zwischenebenen und zuletzt der Kurvenpunkt bei `t`.
pub fn paint_scene<S: DrawSurface + ?Sized>(surface: &mut S, scene: &RenderScene) {
    surface.clear(BACKGROUND_COLOR);

    paint_points(surface, &scene.control_points, scene.point_radius, CONTROL_COLOR);
    paint_lines(surface, &scene.control_points, scene.line_width, CONTROL_COLOR);

    let Some(terminal) = scene.terminal_point else {
        return;
    };

    if !scene.curve.is_empty() {
        surface.stroke_polyline(&scene.curve, scene.line_width, CURVE_COLOR);
    }

    for level in &scene.scaffolding {
        paint_points(surface, level, scene.point_radius, SUBDIVISION_POINT_COLOR);
        paint_lines(surface, level, scene.line_width, SUBDIVISION_LINE_COLOR);
    }

    surface.fill_circle(terminal, scene.point_radius, TERMINAL_POINT_COLOR);
}

fn paint_points<S: DrawSurface + ?Sized>(
    surface: &mut S,
    points: &[DVec2],
    radius: f32,
    color: Rgba,
) {
    for &p in points {
        surface.fill_circle(p, radius, color);
    }
}

fn paint_lines<S: DrawSurface + ?Sized>(surface: &mut S, points: &[DVec2], width: f32, color: Rgba) {
    if points.len() >= 2 {
        surface.stroke_polyline(points, width, color);
    }
}
