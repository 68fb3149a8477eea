#![no_main]

use casteljau_viewer::{AppController, AppIntent, AppState, DragState};
use glam::DVec2;
use libfuzzer_sys::fuzz_target;

/// Dekodiert jeweils 5 Bytes (Art + zwei i16-Koordinaten) zu einem Intent.
fn decode_intent(chunk: &[u8]) -> AppIntent {
    let x = i16::from_le_bytes([chunk[1], chunk[2]]) as f64 / 4.0;
    let y = i16::from_le_bytes([chunk[3], chunk[4]]) as f64 / 4.0;
    let pos = DVec2::new(x, y);

    match chunk[0] % 10 {
        0 => AppIntent::PointerPressed { pos },
        1 => AppIntent::PointerMoved { pos },
        2 => AppIntent::PointerReleased { pos },
        3 => AppIntent::PrimaryClicked { pos },
        4 => AppIntent::SecondaryClicked { pos },
        5 => AppIntent::ParameterChanged { value: x / 100.0 },
        6 => AppIntent::ResetRequested,
        7 => AppIntent::RemoveLastRequested,
        8 => AppIntent::ToggleCurveVisibilityRequested,
        _ => AppIntent::PrimaryClicked {
            pos: DVec2::new(f64::NAN, y),
        },
    }
}

fuzz_target!(|data: &[u8]| {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for chunk in data.chunks_exact(5) {
        let _ = controller.handle_intent(&mut state, decode_intent(chunk));

        // Ein gezogener Index zeigt immer auf einen existierenden Punkt
        if let DragState::Dragging { index } = state.interaction.drag {
            assert!(index < state.curve.len());
        }
        let parameter = state.curve.parameter();
        assert!((0.0..=1.0).contains(&parameter));

        let scene = controller.build_render_scene(&state);
        assert_eq!(scene.terminal_point.is_some(), state.curve.len() > 1);
    }
});
