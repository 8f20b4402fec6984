//! Vector primitives for feature extraction and classification.
//!
//! Feature vectors are interleaved 2-D sequences `[x0, y0, x1, y1, ...]`.
//! All functions here are deterministic for identical inputs.

/// Centroid of an interleaved point vector.
///
/// Returns (0, 0) for an empty vector.
pub fn centroid(points: &[f32]) -> (f32, f32) {
    let count = points.len() / 2;
    if count == 0 {
        return (0.0, 0.0);
    }
    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;
    for pair in points.chunks_exact(2) {
        sum_x += pair[0];
        sum_y += pair[1];
    }
    (sum_x / count as f32, sum_y / count as f32)
}

/// Translate an interleaved point vector in place.
pub fn translate(points: &mut [f32], dx: f32, dy: f32) {
    for pair in points.chunks_exact_mut(2) {
        pair[0] += dx;
        pair[1] += dy;
    }
}

/// Rotate an interleaved point vector in place around the origin.
pub fn rotate(points: &mut [f32], angle: f32) {
    let (sin_t, cos_t) = angle.sin_cos();
    for pair in points.chunks_exact_mut(2) {
        let x = pair[0] * cos_t - pair[1] * sin_t;
        let y = pair[0] * sin_t + pair[1] * cos_t;
        pair[0] = x;
        pair[1] = y;
    }
}

/// Euclidean magnitude of a vector.
pub fn magnitude(vector: &[f32]) -> f32 {
    vector.iter().map(|v| v * v).sum::<f32>().sqrt()
}

/// Mean squared Euclidean distance between two equal-length vectors.
pub fn squared_euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let mut sum = 0.0f64;
    for (va, vb) in a.iter().zip(b.iter()) {
        let diff = (va - vb) as f64;
        sum += diff * diff;
    }
    (sum / a.len().max(1) as f64) as f32
}

/// Minimum cosine distance between two unit-norm interleaved vectors,
/// taken over all rigid rotations of the first vector.
///
/// Treating each (x, y) pair as a complex number, a rotation by θ scales
/// every pair by e^{iθ}. The θ minimizing the cosine distance has a
/// closed form from the dot and cross accumulations, so no search over
/// angles is needed. Returns a value in [0, π].
pub fn minimum_cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let mut dot = 0.0f64;
    let mut cross = 0.0f64;
    for (pa, pb) in a.chunks_exact(2).zip(b.chunks_exact(2)) {
        let (ax, ay) = (pa[0] as f64, pa[1] as f64);
        let (bx, by) = (pb[0] as f64, pb[1] as f64);
        dot += ax * bx + ay * by;
        cross += ax * by - ay * bx;
    }
    if dot == 0.0 {
        return std::f64::consts::FRAC_PI_2 as f32;
    }
    let tan = cross / dot;
    let angle = tan.atan();
    let cosine = angle.cos();
    let sine = cosine * tan;
    // Rounding can push the projection just past 1 for near-identical vectors
    let projection = (dot * cosine + cross * sine).clamp(-1.0, 1.0);
    projection.acos() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_centroid() {
        let points = [0.0, 0.0, 2.0, 0.0, 1.0, 3.0];
        let (cx, cy) = centroid(&points);
        assert_relative_eq!(cx, 1.0, epsilon = 1e-6);
        assert_relative_eq!(cy, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(centroid(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_translate() {
        let mut points = [1.0, 2.0, -1.0, 0.0];
        translate(&mut points, 0.5, -2.0);
        assert_relative_eq!(points[0], 1.5);
        assert_relative_eq!(points[1], 0.0);
        assert_relative_eq!(points[2], -0.5);
        assert_relative_eq!(points[3], -2.0);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut points = [1.0, 0.0];
        rotate(&mut points, FRAC_PI_2);
        assert_relative_eq!(points[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(points[1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_magnitude() {
        assert_relative_eq!(magnitude(&[3.0, 4.0]), 5.0, epsilon = 1e-6);
        assert_relative_eq!(magnitude(&[]), 0.0);
    }

    #[test]
    fn test_squared_euclidean_distance() {
        let a = [0.0, 0.0, 1.0, 1.0];
        let b = [1.0, 0.0, 1.0, 3.0];
        // differences: 1, 0, 0, 2 -> (1 + 4) / 4
        assert_relative_eq!(squared_euclidean_distance(&a, &b), 1.25, epsilon = 1e-6);
    }

    #[test]
    fn test_squared_euclidean_distance_identical() {
        let a = [0.25, -0.75, 0.5, 0.0];
        assert_relative_eq!(squared_euclidean_distance(&a, &a), 0.0);
    }

    fn unit(points: &[f32]) -> Vec<f32> {
        let m = magnitude(points);
        points.iter().map(|v| v / m).collect()
    }

    #[test]
    fn test_minimum_cosine_distance_identical() {
        let a = unit(&[1.0, 0.0, 0.0, 1.0, -1.0, 0.0]);
        assert_relative_eq!(minimum_cosine_distance(&a, &a), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_minimum_cosine_distance_rotation_invariant() {
        // b is a rotated copy of a; the minimum over rotations is ~0
        let raw = [1.0, 0.0, 0.5, 0.5, 0.0, 1.0, -0.5, 0.5];
        let mut rotated = raw;
        rotate(&mut rotated, PI / 3.0);
        let a = unit(&raw);
        let b = unit(&rotated);
        assert_relative_eq!(minimum_cosine_distance(&a, &b), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_minimum_cosine_distance_orthogonal() {
        // Orthogonal under every rotation: dot and cross both vanish
        let a = [1.0, 0.0, -1.0, 0.0];
        let b = [1.0, 0.0, 1.0, 0.0];
        let a = unit(&a);
        let b = unit(&b);
        assert_relative_eq!(minimum_cosine_distance(&a, &b), FRAC_PI_2, epsilon = 1e-5);
    }
}
