//! Closed smooth curve through a cyclic sequence of control points
//!
//! Each control point `P[i+1]` contributes one quadratic arc whose control
//! polygon is `[mid(P[i], P[i+1]), P[i+1], mid(P[i+1], P[i+2])]`, with indices
//! wrapping around the sequence. Arcs are sampled `count` times each by
//! repeated linear interpolation.
//!
//! Interpolation runs with a reversed parameter: `alpha = 0` yields the last
//! control point of the polygon and `alpha -> 1` approaches the first.

use super::vector::{Vector2, midpoint};
use crate::consts::MIN_CURVE_POINTS;

/// Evaluate a point by repeated pairwise interpolation.
///
/// Each pass replaces `p[k]` with `p[k] * alpha + p[k + 1] * (1 - alpha)` until
/// one point remains. Returns `None` for an empty slice.
pub fn de_casteljau(points: &[Vector2], alpha: f64) -> Option<Vector2> {
    let mut scratch = points.to_vec();
    reduce_in_place(&mut scratch, alpha)
}

/// In-place reduction used by both `de_casteljau` and `generate`
fn reduce_in_place(buf: &mut [Vector2], alpha: f64) -> Option<Vector2> {
    let beta = 1.0 - alpha;
    let mut len = buf.len();
    while len > 1 {
        for k in 0..len - 1 {
            buf[k] = buf[k] * alpha + buf[k + 1] * beta;
        }
        len -= 1;
    }
    buf.first().copied()
}

/// Generate `points.len() * count` samples of the closed curve.
///
/// Fewer than three points produce an empty curve. `count` below 1 is treated as 1.
pub fn generate(points: &[Vector2], count: u32) -> Vec<Vector2> {
    let n = points.len();
    if n < MIN_CURVE_POINTS {
        return Vec::new();
    }
    let count = count.max(1) as usize;
    let at = |i: isize| points[i.rem_euclid(n as isize) as usize];

    let mut curve = Vec::with_capacity(n * count);
    for i in -2..(n as isize - 2) {
        let ctrl = [
            midpoint(at(i), at(i + 1)),
            at(i + 1),
            midpoint(at(i + 1), at(i + 2)),
        ];
        for j in 0..count {
            let alpha = j as f64 / count as f64;
            let mut scratch = ctrl;
            if let Some(sample) = reduce_in_place(&mut scratch, alpha) {
                curve.push(sample);
            }
        }
    }
    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square() -> Vec<Vector2> {
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_de_casteljau_single_point() {
        let p = Vector2::new(3.5, -2.0);
        assert_eq!(de_casteljau(&[p], 0.0), Some(p));
        assert_eq!(de_casteljau(&[p], 0.73), Some(p));
        assert_eq!(de_casteljau(&[], 0.5), None);
    }

    #[test]
    fn test_de_casteljau_reversed_parameter() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(10.0, 0.0);
        assert_eq!(de_casteljau(&[a, b], 0.25), Some(Vector2::new(7.5, 0.0)));
        assert_eq!(de_casteljau(&[a, b], 0.0), Some(b));
        assert_eq!(de_casteljau(&[a, b], 1.0), Some(a));
    }

    #[test]
    fn test_de_casteljau_quadratic() {
        let pts = [
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 8.0),
            Vector2::new(8.0, 0.0),
        ];
        // Midpoint of a symmetric quadratic arc sits at half the apex height
        assert_eq!(de_casteljau(&pts, 0.5), Some(Vector2::new(4.0, 4.0)));
    }

    #[test]
    fn test_too_few_points_is_empty() {
        assert!(generate(&[], 35).is_empty());
        assert!(generate(&[Vector2::ZERO], 35).is_empty());
        assert!(generate(&[Vector2::ZERO, Vector2::ONE], 1).is_empty());
    }

    #[test]
    fn test_square_wraps_around() {
        let pts = square();
        let curve = generate(&pts, 4);
        assert_eq!(curve.len(), 16);

        // Every segment starts (alpha = 0) at mid(P[i+1], P[i+2]).
        // The first segment is i = -2, which consumes P[3], P[0].
        assert_eq!(curve[0], midpoint(pts[3], pts[0]));
        assert_eq!(curve[4], midpoint(pts[0], pts[1]));
        assert_eq!(curve[8], midpoint(pts[1], pts[2]));
        // The last segment is i = n - 3, which consumes P[n-1] via P[i+2]
        assert_eq!(curve[12], midpoint(pts[2], pts[3]));

        // No jump between consecutive samples (including the closing one)
        // exceeds the control polygon's edge length.
        let edge = 10.0;
        for k in 0..curve.len() {
            let next = curve[(k + 1) % curve.len()];
            assert!(
                curve[k].distance(next) <= edge,
                "jump {} -> {} too large",
                k,
                (k + 1) % curve.len()
            );
        }
    }

    #[test]
    fn test_zero_count_clamped() {
        let curve = generate(&square(), 0);
        assert_eq!(curve.len(), 4);
    }

    fn arb_points(min: usize, max: usize) -> impl Strategy<Value = Vec<Vector2>> {
        prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), min..max)
            .prop_map(|v| v.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
    }

    proptest! {
        #[test]
        fn prop_fewer_than_three_is_empty(pts in arb_points(0, 3), count in 0u32..100) {
            prop_assert!(generate(&pts, count).is_empty());
        }

        #[test]
        fn prop_sample_count(pts in arb_points(3, 40), count in 1u32..60) {
            prop_assert_eq!(generate(&pts, count).len(), pts.len() * count as usize);
        }

        #[test]
        fn prop_deterministic(pts in arb_points(3, 20), count in 1u32..40) {
            let a = generate(&pts, count);
            let b = generate(&pts, count);
            prop_assert_eq!(a.len(), b.len());
            for (p, q) in a.iter().zip(&b) {
                prop_assert_eq!(p.x.to_bits(), q.x.to_bits());
                prop_assert_eq!(p.y.to_bits(), q.y.to_bits());
            }
        }

        #[test]
        fn prop_matches_de_casteljau(pts in arb_points(3, 10), count in 1u32..10) {
            let curve = generate(&pts, count);
            let n = pts.len();
            let ctrl = [
                midpoint(pts[n - 2], pts[n - 1]),
                pts[n - 1],
                midpoint(pts[n - 1], pts[0]),
            ];
            for j in 0..count as usize {
                let alpha = j as f64 / count as f64;
                prop_assert_eq!(Some(curve[j]), de_casteljau(&ctrl, alpha));
            }
        }
    }
}
