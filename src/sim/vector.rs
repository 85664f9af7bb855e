//! 2D vector helpers
//!
//! Points and velocities are plain `glam::DVec2` values. Addition, subtraction
//! and scalar scaling come from glam's operators, so scaling by anything other
//! than an `f64` is rejected by the compiler.

use glam::DVec2;

/// A 2D point or velocity in window space
pub type Vector2 = DVec2;

/// Length of the vector, truncated to an integer
#[inline]
pub fn magnitude(v: Vector2) -> i64 {
    v.length().floor() as i64
}

/// Integer pixel coordinates (floored) for render targets
#[inline]
pub fn int_pair(v: Vector2) -> (i32, i32) {
    (v.x.floor() as i32, v.y.floor() as i32)
}

/// Point halfway between `a` and `b`
#[inline]
pub fn midpoint(a: Vector2, b: Vector2) -> Vector2 {
    (a + b) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_truncates() {
        assert_eq!(magnitude(Vector2::new(3.0, 4.0)), 5);
        // sqrt(2) * 10 = 14.14..
        assert_eq!(magnitude(Vector2::new(10.0, 10.0)), 14);
        assert_eq!(magnitude(Vector2::new(0.9, 0.0)), 0);
        assert_eq!(magnitude(Vector2::ZERO), 0);
    }

    #[test]
    fn test_int_pair_floors() {
        assert_eq!(int_pair(Vector2::new(12.7, 3.2)), (12, 3));
        assert_eq!(int_pair(Vector2::new(-0.5, 600.99)), (-1, 600));
    }

    #[test]
    fn test_operators_return_new_values() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(a * 2.5, Vector2::new(2.5, 5.0));
        assert_eq!(2.5 * a, Vector2::new(2.5, 5.0));
        // Operands untouched
        assert_eq!(a, Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_midpoint() {
        let m = midpoint(Vector2::new(0.0, 0.0), Vector2::new(10.0, 4.0));
        assert_eq!(m, Vector2::new(5.0, 2.0));
    }
}
