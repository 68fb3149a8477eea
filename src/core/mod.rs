//! Core-Domäne: De-Casteljau-Geometrie, Kurvenmodell, Punkt-Hit-Test.

pub mod curve_model;
/// Reine Geometrie-Funktionen (lerp, Unterteilung, Auswertung, Abtastung)
pub mod geometry;
pub mod pick;

pub use curve_model::{clamp_parameter, CurveModel, DEFAULT_PARAMETER};
pub use geometry::{evaluate_bezier, lerp, sample_curve, subdivide_once, subdivision_levels};
pub use pick::{pick_point, PickPolicy, PointMatch};
