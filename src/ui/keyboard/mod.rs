//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Hat ein Textfeld den Fokus (z.B. die Parameter-Eingabe), werden keine
/// Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (key_r_pressed, key_b_pressed, key_backspace_pressed, key_delete_pressed) =
        ui.input(|i| {
            (
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::B),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Delete),
            )
        });

    if key_r_pressed {
        events.push(AppIntent::ResetRequested);
    }

    if key_b_pressed {
        events.push(AppIntent::ToggleCurveVisibilityRequested);
    }

    // Backspace und Entf sind gleichwertig
    if key_backspace_pressed || key_delete_pressed {
        events.push(AppIntent::RemoveLastRequested);
    }

    events
}
