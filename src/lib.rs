//! Knot Saver - a bouncing closed-curve screensaver core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (control points, bounce physics, curve generation)
//! - `renderer`: Draw-ready vertex data and color cycling
//! - `settings`: JSON-loadable configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};
pub use sim::{AnimationController, Bounds, FrameInput, InputEvent, Vector2, step};

/// Screensaver configuration constants
pub mod consts {
    /// Default window size
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Curve samples generated per segment
    pub const DEFAULT_RESOLUTION: u32 = 35;
    pub const MIN_RESOLUTION: u32 = 1;

    /// Minimum control points needed to produce a curve
    pub const MIN_CURVE_POINTS: usize = 3;

    /// New points get a velocity drawn from [-MAX_INITIAL_SPEED, MAX_INITIAL_SPEED] per axis
    pub const MAX_INITIAL_SPEED: f64 = 2.0;

    /// Presentation loop rate
    pub const TARGET_FPS: u32 = 60;

    /// Hue degrees added per rendered frame
    pub const HUE_STEP: u16 = 1;

    /// Control point disc radius and curve stroke width, in pixels
    pub const POINT_RADIUS: f32 = 3.0;
    pub const LINE_WIDTH: f32 = 3.0;
}
