//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kontrollpunkte ===
            AppCommand::AppendPoint { pos } => handlers::curve::append(state, pos),
            AppCommand::RemoveLastPoint => handlers::curve::remove_last(state),
            AppCommand::ClearPoints => handlers::curve::clear(state),

            // === Drag ===
            AppCommand::BeginDrag { index } => handlers::drag::begin(state, index),
            AppCommand::DragTo { pos } => handlers::drag::drag_to(state, pos),
            AppCommand::EndDrag => handlers::drag::end(state),
            AppCommand::ResetClickSuppression => handlers::drag::reset_click_suppression(state),

            // === Parameter & Anzeige ===
            AppCommand::SetParameter { value } => handlers::view::set_parameter(state, value),
            AppCommand::ToggleCurveVisibility => handlers::view::toggle_curve_visibility(state),

            // === Optionen ===
            AppCommand::SetDragMode { mode } => handlers::options::set_drag_mode(state, mode),
            AppCommand::SaveOptions => handlers::options::save_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
