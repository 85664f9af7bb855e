//! Animation controller
//!
//! Owns the control points, the derived curve and the pause/resolution state.
//! Driven synchronously once per frame by the presentation loop.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::curve;
use super::points::{Bounds, PointSet};
use super::vector::Vector2;
use crate::consts::*;
use crate::settings::Settings;

/// Screensaver state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct AnimationController {
    /// Seed used for point velocities
    seed: u64,
    rng: Pcg32,
    points: PointSet,
    /// Derived from `points` and `resolution`; never edited directly
    curve: Vec<Vector2>,
    /// Samples per curve segment (>= 1)
    resolution: u32,
    paused: bool,
}

impl AnimationController {
    /// Create a paused controller with the default resolution
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            points: PointSet::new(),
            curve: Vec::new(),
            resolution: DEFAULT_RESOLUTION,
            paused: true,
        }
    }

    /// Create a controller using the resolution and pause state from settings
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let mut controller = Self::new(seed);
        controller.resolution = settings.resolution.max(MIN_RESOLUTION);
        controller.paused = settings.start_paused;
        controller
    }

    /// Add a control point and refresh the curve, even while paused
    pub fn add_control_point(&mut self, pos: Vector2) {
        self.points.add_point(pos, &mut self.rng);
        log::debug!(
            "Added control point at ({:.1}, {:.1}), {} total",
            pos.x,
            pos.y,
            self.points.len()
        );
        self.recompute();
    }

    /// Advance points one frame and rebuild the curve. No-op while paused.
    pub fn tick(&mut self, bounds: Bounds) {
        if self.paused {
            return;
        }
        self.points.advance(bounds);
        self.recompute();
    }

    /// Set samples per segment (clamped to >= 1) and rebuild immediately
    pub fn set_resolution(&mut self, resolution: i64) {
        let clamped = resolution.clamp(MIN_RESOLUTION as i64, u32::MAX as i64) as u32;
        if clamped != self.resolution {
            log::info!("Resolution {} -> {}", self.resolution, clamped);
        }
        self.resolution = clamped;
        self.recompute();
    }

    pub fn increase_resolution(&mut self) {
        self.set_resolution(self.resolution as i64 + 1);
    }

    pub fn decrease_resolution(&mut self) {
        self.set_resolution(self.resolution as i64 - 1);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    /// Remove all control points and the curve
    pub fn clear(&mut self) {
        self.points.clear();
        self.curve.clear();
        log::info!("Cleared all control points");
    }

    /// Current curve samples (empty means draw nothing)
    pub fn current_curve(&self) -> &[Vector2] {
        &self.curve
    }

    /// Current control point positions in insertion order
    pub fn current_control_points(&self) -> Vec<Vector2> {
        self.points.positions()
    }

    pub fn control_points(&self) -> &PointSet {
        &self.points
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn recompute(&mut self) {
        self.curve = curve::generate(&self.points.positions(), self.resolution);
    }
}
