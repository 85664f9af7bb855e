//! Triangle generation for the curve, control points and panels

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::{Vector2, int_pair};

/// Segments used for each control point disc
const DISC_SEGMENTS: u32 = 12;

/// Two triangles covering the quad `a b c d` (corners in winding order)
fn quad(vertices: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    for p in [a, b, d, d, b, c] {
        vertices.push(Vertex::new(p.x, p.y, color));
    }
}

/// Thick open polyline through the curve samples (two triangles per span).
///
/// The last sample is not joined back to the first.
pub fn curve_vertices(curve: &[Vector2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if curve.len() < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity((curve.len() - 1) * 6);

    for pair in curve.windows(2) {
        let p1 = pair[0].as_vec2();
        let p2 = pair[1].as_vec2();

        // Perpendicular for width
        let dir = (p2 - p1).normalize_or_zero();
        let perp = Vec2::new(-dir.y, dir.x) * half;

        quad(&mut vertices, p1 + perp, p1 - perp, p2 - perp, p2 + perp, color);
    }

    vertices
}

/// A filled disc (triangle fan) at each control point's pixel position
pub fn point_vertices(points: &[Vector2], radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    // Unit rim shared by every disc
    let rim: Vec<Vec2> = (0..=DISC_SEGMENTS)
        .map(|i| Vec2::from_angle(i as f32 / DISC_SEGMENTS as f32 * TAU) * radius)
        .collect();

    let mut vertices = Vec::with_capacity(points.len() * (DISC_SEGMENTS * 3) as usize);
    for &p in points {
        let (x, y) = int_pair(p);
        let center = Vec2::new(x as f32, y as f32);
        for edge in rim.windows(2) {
            for q in [center, center + edge[0], center + edge[1]] {
                vertices.push(Vertex::new(q.x, q.y, color));
            }
        }
    }
    vertices
}

/// Axis-aligned filled rectangle with its top-left corner at (x, y)
pub fn filled_rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    quad(
        &mut vertices,
        Vec2::new(x, y),
        Vec2::new(x + w, y),
        Vec2::new(x + w, y + h),
        Vec2::new(x, y + h),
        color,
    );
    vertices
}

/// Rectangle border of `border` pixels drawn inside the rectangle's edge
pub fn rect_outline(x: f32, y: f32, w: f32, h: f32, border: f32, color: [f32; 4]) -> Vec<Vertex> {
    let b = border.min(w / 2.0).min(h / 2.0);
    let inner_h = h - 2.0 * b;
    [
        (x, y, w, b),
        (x, y + h - b, w, b),
        (x, y + b, b, inner_h),
        (x + w - b, y + b, b, inner_h),
    ]
    .into_iter()
    .flat_map(|(bx, by, bw, bh)| filled_rect(bx, by, bw, bh, color))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_empty_inputs_draw_nothing() {
        assert!(curve_vertices(&[], 3.0, WHITE).is_empty());
        assert!(curve_vertices(&[Vector2::ZERO], 3.0, WHITE).is_empty());
        assert!(point_vertices(&[], 3.0, WHITE).is_empty());
    }

    #[test]
    fn test_curve_is_open() {
        let curve = [
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
        ];
        let v = curve_vertices(&curve, 2.0, WHITE);
        // Two spans, no closing span back to the start
        assert_eq!(v.len(), 12);
        // First span is horizontal, offset by half the width
        assert_eq!(v[0].position, [0.0, 1.0]);
        assert_eq!(v[1].position, [0.0, -1.0]);
    }

    #[test]
    fn test_points_use_floored_coordinates() {
        let v = point_vertices(&[Vector2::new(12.9, 7.2)], 3.0, WHITE);
        assert_eq!(v.len(), (DISC_SEGMENTS * 3) as usize);
        assert_eq!(v[0].position, [12.0, 7.0]);
        // Rim vertices sit at the radius
        for tri in v.chunks(3) {
            let rim = Vec2::from(tri[1].position) - Vec2::new(12.0, 7.0);
            assert!((rim.length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rect_outline_bars() {
        let v = rect_outline(0.0, 0.0, 100.0, 50.0, 5.0, WHITE);
        assert_eq!(v.len(), 24);
        for vert in &v {
            let [x, y] = vert.position;
            // Only the border band is covered
            assert!(x <= 5.0 || x >= 95.0 || y <= 5.0 || y >= 45.0);
        }
    }
}
