//! Control points and bounce physics

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::consts::MAX_INITIAL_SPEED;

/// Viewport size used for bounce reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if `x` lies outside [0, width]
    #[inline]
    fn outside_x(&self, x: f64) -> bool {
        x < 0.0 || x > self.width as f64
    }

    /// True if `y` lies outside [0, height]
    #[inline]
    fn outside_y(&self, y: f64) -> bool {
        y < 0.0 || y > self.height as f64
    }
}

/// A user-placed anchor with its own drift velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub pos: Vector2,
    pub vel: Vector2,
}

impl ControlPoint {
    pub fn new(pos: Vector2, vel: Vector2) -> Self {
        Self { pos, vel }
    }

    /// Move by one tick of velocity, then reflect any axis that ended up out of bounds.
    ///
    /// The check runs on the new position, so a point can sit past the edge for
    /// one frame before the flipped velocity brings it back.
    pub fn advance(&mut self, bounds: Bounds) {
        self.pos += self.vel;
        if bounds.outside_x(self.pos.x) {
            self.vel.x = -self.vel.x;
        }
        if bounds.outside_y(self.pos.y) {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Ordered control points. Insertion order defines the curve topology.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<ControlPoint>,
}

impl PointSet {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point with a random velocity in [-2, 2] on each axis
    pub fn add_point<R: Rng>(&mut self, pos: Vector2, rng: &mut R) {
        let vel = Vector2::new(
            rng.random_range(-MAX_INITIAL_SPEED..=MAX_INITIAL_SPEED),
            rng.random_range(-MAX_INITIAL_SPEED..=MAX_INITIAL_SPEED),
        );
        self.push(ControlPoint::new(pos, vel));
    }

    /// Append a point with a known velocity
    pub fn push(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    /// Advance every point by one tick
    pub fn advance(&mut self, bounds: Bounds) {
        for point in &mut self.points {
            point.advance(bounds);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Current positions in insertion order
    pub fn positions(&self) -> Vec<Vector2> {
        self.points.iter().map(|p| p.pos).collect()
    }
}
