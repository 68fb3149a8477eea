//! Rendering: Zeichenflächen-Abstraktion, Painter und Frame-Scheduling.
//!
//! Der Painter kennt nur `DrawSurface`; egui ist eine von mehreren
//! möglichen Zeichenflächen (`EguiSurface`, `RecordingSurface`).

mod egui_surface;
mod painter;
mod scheduler;
mod surface;

pub use crate::shared::RenderScene;
pub use egui_surface::{to_color32, EguiSurface};
pub use painter::paint_scene;
pub use scheduler::FrameScheduler;
pub use surface::{DrawOp, DrawSurface, RecordingSurface, Rgba};
