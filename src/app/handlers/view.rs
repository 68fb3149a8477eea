//! Handler für Parameter und Kurven-Sichtbarkeit.

use crate::app::AppState;

/// Setzt den Unterteilungsparameter (geklemmt auf [0, 1]).
pub fn set_parameter(state: &mut AppState, value: f64) {
    state.curve.set_parameter(value);
}

/// Schaltet die Sichtbarkeit der vollständigen Bézier-Kurve um.
pub fn toggle_curve_visibility(state: &mut AppState) {
    state.curve.toggle_show_curve();
    log::info!(
        "Bézier-Kurve {}",
        if state.curve.show_curve() {
            "eingeblendet"
        } else {
            "ausgeblendet"
        }
    );
}
