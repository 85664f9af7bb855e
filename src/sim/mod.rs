//! Deterministic simulation module
//!
//! All screensaver logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (insertion order of control points)
//! - No rendering or platform dependencies

pub mod controller;
pub mod curve;
pub mod frame;
pub mod points;
pub mod vector;

pub use controller::AnimationController;
pub use curve::{de_casteljau, generate};
pub use frame::{FrameInput, FrameOutcome, InputEvent, step};
pub use points::{Bounds, ControlPoint, PointSet};
pub use vector::{Vector2, int_pair, magnitude, midpoint};
