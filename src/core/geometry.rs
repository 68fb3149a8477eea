//! De-Casteljau-Geometrie: lineare Interpolation, Unterteilung, Kurvenauswertung.
//!
//! Reine Funktionen ohne Zustand. Alle Punkte sind Pixel-Koordinaten
//! der Zeichenfläche (`DVec2`, f64).

use glam::DVec2;

/// Kleinste erlaubte Schrittweite beim Abtasten der Kurve.
pub const MIN_CURVE_STEP: f64 = 1.0e-4;

/// Lineare Interpolation zwischen `p0` und `p1`.
///
/// `t` wird nicht geklemmt: Werte außerhalb von [0, 1] extrapolieren.
#[inline]
pub fn lerp(p0: DVec2, p1: DVec2, t: f64) -> DVec2 {
    DVec2::new(p0.x + (p1.x - p0.x) * t, p0.y + (p1.y - p0.y) * t)
}

/// Eine De-Casteljau-Runde: interpoliert jedes benachbarte Punktpaar bei `t`.
///
/// Liefert `points.len() - 1` Punkte, bei weniger als zwei Punkten einen leeren Vec.
pub fn subdivide_once(points: &[DVec2], t: f64) -> Vec<DVec2> {
    points.windows(2).map(|pair| lerp(pair[0], pair[1], t)).collect()
}

/// Wertet die Bézier-Kurve der Kontrollpunkte bei `t` aus.
///
/// Grad = `points.len() - 1`; bei n+1 Punkten werden n Interpolationsrunden
/// durchlaufen. Ein einzelner Punkt wird unverändert zurückgegeben.
pub fn evaluate_bezier(points: &[DVec2], t: f64) -> Option<DVec2> {
    match points {
        [] => None,
        [single] => Some(*single),
        _ => {
            let mut current = subdivide_once(points, t);
            while current.len() > 1 {
                current = subdivide_once(&current, t);
            }
            current.first().copied()
        }
    }
}

/// Alle Zwischenebenen der Unterteilung bei `t`.
///
/// Ebene 0 hat `len - 1` Punkte, die letzte Ebene genau einen Punkt
/// (den Kurvenpunkt bei `t`). Unter zwei Kontrollpunkten: leer.
pub fn subdivision_levels(points: &[DVec2], t: f64) -> Vec<Vec<DVec2>> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut levels = Vec::with_capacity(points.len() - 1);
    let mut current = subdivide_once(points, t);
    while current.len() > 1 {
        let next = subdivide_once(&current, t);
        levels.push(current);
        current = next;
    }
    levels.push(current);
    levels
}

/// Tastet die Kurve über [0, 1] als Polylinie ab.
///
/// Die Segmentanzahl ist `round(1 / step)`; Start- und Endpunkt liegen exakt
/// auf dem ersten bzw. letzten Kontrollpunkt.
pub fn sample_curve(points: &[DVec2], step: f64) -> Vec<DVec2> {
    if points.len() < 2 {
        return Vec::new();
    }

    let step = if step.is_finite() {
        step.clamp(MIN_CURVE_STEP, 1.0)
    } else {
        MIN_CURVE_STEP
    };
    let segments = (1.0 / step).round().max(1.0) as usize;

    (0..=segments)
        .filter_map(|i| evaluate_bezier(points, i as f64 / segments as f64))
        .collect()
}
