//! Casteljau Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragState, InteractionState};
pub use core::{evaluate_bezier, sample_curve, subdivision_levels, CurveModel, PickPolicy};
pub use shared::{DragMode, RedrawMode, RenderScene, ViewerOptions};
