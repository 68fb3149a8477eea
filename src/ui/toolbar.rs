//! Toolbar mit Parameter-Slider und Kurven-Aktionen.

use crate::app::{AppIntent, AppState};
use crate::core::DEFAULT_PARAMETER;
use crate::shared::DragMode;

/// Puffer für die textuelle Parameter-Eingabe
pub struct ToolbarState {
    parameter_text: String,
}

impl ToolbarState {
    pub fn new() -> Self {
        Self {
            parameter_text: format!("{DEFAULT_PARAMETER}"),
        }
    }
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(
    ctx: &egui::Context,
    state: &AppState,
    toolbar: &mut ToolbarState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let parameter = state.curve.parameter();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // ── Parameter t ──
            ui.label("t:");
            ui.label("Min: 0");

            let mut value = parameter;
            if ui
                .add(egui::Slider::new(&mut value, 0.0..=1.0).show_value(false))
                .changed()
            {
                events.push(AppIntent::ParameterChanged { value });
            }

            ui.label("Max: 1");
            ui.label(format!("Current: {:.2}", parameter));

            ui.separator();

            let text_response = ui.add(
                egui::TextEdit::singleline(&mut toolbar.parameter_text)
                    .desired_width(60.0)
                    .hint_text("t"),
            );
            let submitted =
                text_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted || ui.button("Setzen").clicked() {
                events.push(AppIntent::ParameterTextEntered {
                    text: toolbar.parameter_text.clone(),
                });
            }
            if !text_response.has_focus() && !submitted {
                // Eingabefeld folgt dem Slider, solange nicht editiert wird
                toolbar.parameter_text = format!("{:.2}", parameter);
            }

            ui.separator();

            // ── Aktionen ──
            if ui.button("Remove All (R)").clicked() {
                events.push(AppIntent::ResetRequested);
            }

            if ui
                .add_enabled(!state.curve.is_empty(), egui::Button::new("Remove Last (Del)"))
                .clicked()
            {
                events.push(AppIntent::RemoveLastRequested);
            }

            let toggle_text = if state.curve.show_curve() {
                "Hide Bézier (B)"
            } else {
                "Show Bézier (B)"
            };
            if ui.button(toggle_text).clicked() {
                events.push(AppIntent::ToggleCurveVisibilityRequested);
            }

            // ── Optionen (rechts ausgerichtet) ──
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("💾 Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }

                let current = state.options.drag_mode;
                let mut selected = current;
                egui::ComboBox::from_id_salt("drag_mode")
                    .selected_text(drag_mode_label(current))
                    .show_ui(ui, |ui| {
                        for mode in [DragMode::Legacy, DragMode::Reposition] {
                            ui.selectable_value(&mut selected, mode, drag_mode_label(mode));
                        }
                    });
                if selected != current {
                    events.push(AppIntent::DragModeChanged { mode: selected });
                }
                ui.label("Drag:");
            });
        });
    });

    events
}

fn drag_mode_label(mode: DragMode) -> &'static str {
    match mode {
        DragMode::Legacy => "Letzten Punkt ziehen",
        DragMode::Reposition => "Punkt verschieben",
    }
}
