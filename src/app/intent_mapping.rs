//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier lebt die Zeiger-Zustandsmaschine: abhängig von `DragState` und den
//! Optionen wird aus einem Zeiger-Event ein Pick, Drag, Append oder Remove.

use glam::DVec2;

use super::{AppCommand, AppIntent, AppState};
use crate::core::pick_point;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => {
            if !is_valid_pointer(pos) || state.interaction.is_dragging() {
                return vec![];
            }

            let mut commands = Vec::with_capacity(2);
            if state.interaction.swallow_next_click {
                commands.push(AppCommand::ResetClickSuppression);
            }

            if let Some(hit) = pick_point(
                state.curve.points(),
                pos,
                state.options.pick_radius_px,
                state.options.pick_policy,
            ) {
                log::debug!(
                    "Punkt {} getroffen (Abstand {:.2} px)",
                    hit.index,
                    hit.distance
                );
                commands.push(AppCommand::BeginDrag { index: hit.index });
            }
            commands
        }
        AppIntent::PointerMoved { pos } => {
            if state.interaction.is_dragging() && is_valid_pointer(pos) {
                vec![AppCommand::DragTo { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { .. } => {
            if state.interaction.is_dragging() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::PrimaryClicked { pos } => {
            if state.interaction.swallow_next_click {
                vec![AppCommand::ResetClickSuppression]
            } else if is_valid_pointer(pos) {
                vec![AppCommand::AppendPoint { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::SecondaryClicked { .. } => vec![AppCommand::RemoveLastPoint],
        AppIntent::ParameterChanged { value } => vec![AppCommand::SetParameter { value }],
        AppIntent::ParameterTextEntered { text } => match text.trim().parse::<f64>() {
            Ok(value) => vec![AppCommand::SetParameter { value }],
            Err(e) => {
                log::warn!("Ungültiger Parameterwert '{}' ignoriert: {}", text, e);
                vec![]
            }
        },
        AppIntent::ResetRequested => vec![AppCommand::ClearPoints],
        AppIntent::RemoveLastRequested => vec![AppCommand::RemoveLastPoint],
        AppIntent::ToggleCurveVisibilityRequested => vec![AppCommand::ToggleCurveVisibility],
        AppIntent::DragModeChanged { mode } => vec![AppCommand::SetDragMode { mode }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}

/// Zeigerpositionen müssen endlich sein; alles andere wird verworfen.
fn is_valid_pointer(pos: DVec2) -> bool {
    if pos.is_finite() {
        true
    } else {
        log::debug!("Nicht-endliche Zeigerposition verworfen: {:?}", pos);
        false
    }
}
