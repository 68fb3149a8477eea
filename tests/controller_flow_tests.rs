use approx::assert_relative_eq;
use casteljau_viewer::{
    evaluate_bezier, AppCommand, AppController, AppIntent, AppState, DragMode, DragState,
    ViewerOptions,
};
use glam::DVec2;

fn click(controller: &mut AppController, state: &mut AppState, x: f64, y: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::PrimaryClicked {
                pos: DVec2::new(x, y),
            },
        )
        .expect("PrimaryClicked sollte ohne Fehler durchlaufen");
}

/// Event-Folge eines Drags über die Drag-Schwelle: egui meldet danach keinen Klick.
fn drag(controller: &mut AppController, state: &mut AppState, from: DVec2, to: DVec2) {
    for intent in [
        AppIntent::PointerPressed { pos: from },
        AppIntent::PointerMoved { pos: to },
        AppIntent::PointerReleased { pos: to },
    ] {
        controller
            .handle_intent(state, intent)
            .expect("Drag-Intent sollte ohne Fehler durchlaufen");
    }
}

/// Event-Folge eines Klicks ohne Bewegung: Drücken, Loslassen, Klick im selben Frame.
fn tap(controller: &mut AppController, state: &mut AppState, pos: DVec2) {
    for intent in [
        AppIntent::PointerPressed { pos },
        AppIntent::PointerReleased { pos },
        AppIntent::PrimaryClicked { pos },
    ] {
        controller
            .handle_intent(state, intent)
            .expect("Klick-Intent sollte ohne Fehler durchlaufen");
    }
}

fn state_with_drag_mode(drag_mode: DragMode) -> AppState {
    AppState::with_options(ViewerOptions {
        drag_mode,
        ..ViewerOptions::default()
    })
}

#[test]
fn test_three_clicks_build_quadratic_with_expected_curve_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 100.0, 10.0);
    click(&mut controller, &mut state, 55.0, 90.0);

    assert_eq!(state.point_count(), 3);
    assert_relative_eq!(state.curve.parameter(), 0.5);

    let scene = controller.build_render_scene(&state);
    assert_eq!(
        scene.scaffolding,
        vec![vec![DVec2::new(55.0, 10.0), DVec2::new(77.5, 50.0)]]
    );

    let terminal = scene.terminal_point.expect("Kurvenpunkt erwartet");
    assert_relative_eq!(terminal.x, 66.25);
    assert_relative_eq!(terminal.y, 30.0);

    let evaluated =
        evaluate_bezier(state.curve.points(), 0.5).expect("Kurvenpunkt erwartet");
    assert_relative_eq!(evaluated.x, terminal.x);
    assert_relative_eq!(evaluated.y, terminal.y);
}

#[test]
fn test_legacy_drag_moves_and_removes_tail() {
    let mut controller = AppController::new();
    let mut state = state_with_drag_mode(DragMode::Legacy);
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 100.0, 10.0);
    click(&mut controller, &mut state, 55.0, 90.0);

    // Punkt 0 greifen: Legacy bewegt trotzdem den letzten Punkt
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: DVec2::new(12.0, 10.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    assert_eq!(state.interaction.drag, DragState::Dragging { index: 0 });

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: DVec2::new(200.0, 200.0),
            },
        )
        .expect("PointerMoved sollte funktionieren");
    assert_eq!(state.curve.points()[0], DVec2::new(10.0, 10.0));
    assert_eq!(state.curve.points()[2], DVec2::new(200.0, 200.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerReleased {
                pos: DVec2::new(200.0, 200.0),
            },
        )
        .expect("PointerReleased sollte funktionieren");
    assert_eq!(state.interaction.drag, DragState::Idle);
    assert_eq!(
        state.curve.points(),
        &[DVec2::new(10.0, 10.0), DVec2::new(100.0, 10.0)]
    );
}

#[test]
fn test_legacy_tap_on_point_replaces_tail_with_click_position() {
    let mut controller = AppController::new();
    let mut state = state_with_drag_mode(DragMode::Legacy);
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 100.0, 10.0);
    click(&mut controller, &mut state, 55.0, 90.0);

    // Loslassen entfernt den letzten Punkt, der Klick hängt dann an
    tap(&mut controller, &mut state, DVec2::new(12.0, 10.0));

    assert_eq!(
        state.curve.points(),
        &[
            DVec2::new(10.0, 10.0),
            DVec2::new(100.0, 10.0),
            DVec2::new(12.0, 10.0)
        ]
    );
}

#[test]
fn test_reposition_drag_keeps_point_and_next_click_appends() {
    let mut controller = AppController::new();
    let mut state = state_with_drag_mode(DragMode::Reposition);
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 100.0, 10.0);

    drag(
        &mut controller,
        &mut state,
        DVec2::new(10.0, 10.0),
        DVec2::new(40.0, 60.0),
    );

    assert_eq!(
        state.curve.points(),
        &[DVec2::new(40.0, 60.0), DVec2::new(100.0, 10.0)]
    );

    // Der nächste echte Klick hebt die Unterdrückung beim Drücken auf und hängt an
    tap(&mut controller, &mut state, DVec2::new(70.0, 70.0));
    assert_eq!(state.point_count(), 3);
    assert!(!state.interaction.swallow_next_click);
}

#[test]
fn test_reposition_tap_on_point_adds_nothing() {
    let mut controller = AppController::new();
    let mut state = state_with_drag_mode(DragMode::Reposition);
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 100.0, 10.0);

    tap(&mut controller, &mut state, DVec2::new(11.0, 10.0));

    assert_eq!(
        state.curve.points(),
        &[DVec2::new(10.0, 10.0), DVec2::new(100.0, 10.0)]
    );
    assert!(!state.interaction.swallow_next_click);
}

#[test]
fn test_switching_drag_mode_clears_pending_click_suppression() {
    let mut controller = AppController::new();
    let mut state = state_with_drag_mode(DragMode::Reposition);
    click(&mut controller, &mut state, 10.0, 10.0);

    for intent in [
        AppIntent::PointerPressed {
            pos: DVec2::new(10.0, 10.0),
        },
        AppIntent::PointerReleased {
            pos: DVec2::new(10.0, 10.0),
        },
        AppIntent::DragModeChanged {
            mode: DragMode::Legacy,
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Intent sollte funktionieren");
    }

    assert_eq!(state.options.drag_mode, DragMode::Legacy);
    assert!(!state.interaction.swallow_next_click);

    click(&mut controller, &mut state, 30.0, 30.0);
    assert_eq!(state.point_count(), 2);
}

#[test]
fn test_secondary_click_on_empty_list_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let revision = state.curve.revision();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryClicked {
                pos: DVec2::new(5.0, 5.0),
            },
        )
        .expect("SecondaryClicked sollte bei leerer Liste robust sein");

    assert!(state.curve.is_empty());
    assert_eq!(state.curve.revision(), revision);
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::RemoveLastPoint)
    );
}

#[test]
fn test_secondary_click_removes_last_point() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 20.0, 20.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SecondaryClicked {
                pos: DVec2::new(300.0, 300.0),
            },
        )
        .expect("SecondaryClicked sollte funktionieren");

    assert_eq!(state.curve.points(), &[DVec2::new(10.0, 10.0)]);
}

#[test]
fn test_reset_during_drag_returns_to_idle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 10.0, 10.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: DVec2::new(10.0, 10.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    assert!(state.interaction.is_dragging());

    controller
        .handle_intent(&mut state, AppIntent::ResetRequested)
        .expect("ResetRequested sollte funktionieren");

    assert!(state.curve.is_empty());
    assert_eq!(state.interaction.drag, DragState::Idle);

    // Späte Move/Release-Events nach dem Reset bleiben folgenlos
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: DVec2::new(50.0, 50.0),
            },
        )
        .expect("PointerMoved sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerReleased {
                pos: DVec2::new(50.0, 50.0),
            },
        )
        .expect("PointerReleased sollte funktionieren");
    assert!(state.curve.is_empty());
}

#[test]
fn test_remove_last_during_drag_cancels_dangling_drag() {
    let mut controller = AppController::new();
    let mut state = state_with_drag_mode(DragMode::Reposition);
    click(&mut controller, &mut state, 10.0, 10.0);
    click(&mut controller, &mut state, 50.0, 50.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: DVec2::new(50.0, 50.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    assert_eq!(state.interaction.drag, DragState::Dragging { index: 1 });

    controller
        .handle_intent(&mut state, AppIntent::RemoveLastRequested)
        .expect("RemoveLastRequested sollte funktionieren");

    assert_eq!(state.interaction.drag, DragState::Idle);
    assert_eq!(state.curve.points(), &[DVec2::new(10.0, 10.0)]);
}

#[test]
fn test_pick_tolerance_boundary() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 100.0, 100.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: DVec2::new(105.0001, 100.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    assert_eq!(state.interaction.drag, DragState::Idle);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: DVec2::new(105.0, 100.0),
            },
        )
        .expect("PointerPressed sollte funktionieren");
    assert_eq!(state.interaction.drag, DragState::Dragging { index: 0 });
}

#[test]
fn test_parameter_intents_clamp_and_ignore_garbage() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ParameterChanged { value: 1.7 })
        .expect("ParameterChanged sollte funktionieren");
    assert_relative_eq!(state.curve.parameter(), 1.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ParameterTextEntered {
                text: " 0.25 ".to_string(),
            },
        )
        .expect("ParameterTextEntered sollte funktionieren");
    assert_relative_eq!(state.curve.parameter(), 0.25);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ParameterTextEntered {
                text: "abc".to_string(),
            },
        )
        .expect("Ungültiger Text darf keinen Fehler liefern");
    assert_relative_eq!(state.curve.parameter(), 0.25);
}

#[test]
fn test_toggle_curve_visibility_controls_sampled_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 100.0, 0.0);

    assert!(controller.build_render_scene(&state).curve.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::ToggleCurveVisibilityRequested)
        .expect("ToggleCurveVisibilityRequested sollte funktionieren");

    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.curve.len(), 101);
    assert_eq!(scene.curve.first(), Some(&DVec2::new(0.0, 0.0)));
    assert_eq!(scene.curve.last(), Some(&DVec2::new(100.0, 0.0)));
}

#[test]
fn test_command_log_records_drag_lifecycle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    click(&mut controller, &mut state, 10.0, 10.0);

    drag(
        &mut controller,
        &mut state,
        DVec2::new(10.0, 10.0),
        DVec2::new(30.0, 30.0),
    );

    assert_eq!(
        state.command_log.entries(),
        &[
            AppCommand::AppendPoint {
                pos: DVec2::new(10.0, 10.0)
            },
            AppCommand::BeginDrag { index: 0 },
            AppCommand::DragTo {
                pos: DVec2::new(30.0, 30.0)
            },
            AppCommand::EndDrag,
        ]
    );
    assert!(state.curve.is_empty());
}
