//! Canvas-Input-Handling: Maus-Events → AppIntent.
//!
//! Drücken/Bewegen/Loslassen werden roh weitergereicht; Klick und Rechtsklick
//! kommen als eigene Intents. Die Zustandsmaschine lebt im App-Layer.

use glam::DVec2;

use super::keyboard;
use crate::app::AppIntent;

/// Verwaltet den Input-Zustand des Canvas (gedrückte Primärtaste)
#[derive(Default)]
pub struct InputState {
    primary_down_on_canvas: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_down_on_canvas: false,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge innerhalb eines Frames: Drücken, Bewegen, Loslassen, Klick.
    /// So sieht der Controller ein Loslassen immer vor dem zugehörigen Klick.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui);

        let (pressed, released, press_origin, latest_pos, delta) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.pointer.delta(),
            )
        });

        // Nur Drücken, das egui dem Canvas zuordnet: Popups und Areas über dem
        // Canvas (z.B. die Drag-Modus-Auswahl) verdecken ihn im Hit-Test.
        // press_origin() liefert die exakte Druckposition (vor Drag-Schwelle).
        if pressed && response.contains_pointer() {
            if let Some(origin) = press_origin.filter(|p| response.rect.contains(*p)) {
                self.primary_down_on_canvas = true;
                events.push(AppIntent::PointerPressed {
                    pos: canvas_local(origin, response.rect),
                });
            }
        }

        if self.primary_down_on_canvas && delta != egui::Vec2::ZERO {
            if let Some(pos) = latest_pos {
                events.push(AppIntent::PointerMoved {
                    pos: canvas_local(pos, response.rect),
                });
            }
        }

        if self.primary_down_on_canvas && released {
            self.primary_down_on_canvas = false;
            let pos = latest_pos.or(press_origin).unwrap_or(response.rect.min);
            events.push(AppIntent::PointerReleased {
                pos: canvas_local(pos, response.rect),
            });
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PrimaryClicked {
                    pos: canvas_local(pos, response.rect),
                });
            }
        }

        // Kein context_menu() am Canvas: der Rechtsklick löscht nur den letzten Punkt
        if response.secondary_clicked() {
            let pos = response.interact_pointer_pos().unwrap_or(response.rect.min);
            events.push(AppIntent::SecondaryClicked {
                pos: canvas_local(pos, response.rect),
            });
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in flächenlokale Canvas-Pixel um.
pub fn canvas_local(screen_pos: egui::Pos2, canvas_rect: egui::Rect) -> DVec2 {
    let local = screen_pos - canvas_rect.min;
    DVec2::new(local.x as f64, local.y as f64)
}
