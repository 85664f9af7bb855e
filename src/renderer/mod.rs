//! Draw-ready data for the presentation layer
//!
//! Turns the simulation's curve and control points into colored triangle
//! lists. Window creation and GPU submission live outside this crate.

pub mod hud;
pub mod palette;
pub mod shapes;
pub mod vertex;

pub use hud::{HelpOverlay, HelpRow, TextLabel, help_overlay, help_rows, status_label, status_line};
pub use palette::HueCycle;
pub use shapes::{curve_vertices, filled_rect, point_vertices, rect_outline};
pub use vertex::{Vertex, vertex_bytes};
