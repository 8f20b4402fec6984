//! Gesture resampling into fixed-form feature vectors.
//!
//! Two samplers back the two sequence policies: an arc-length temporal
//! resampler for sequence-sensitive extraction and an occupancy patch
//! rasterizer for sequence-invariant extraction.

use crate::core::types::{Gesture, Stroke, TimedPoint};

/// Number of resampled points under sequence-sensitive extraction.
pub const SEQUENCE_SAMPLE_SIZE: usize = 16;

/// Side length of the occupancy patch under sequence-invariant extraction.
pub const PATCH_SAMPLE_SIZE: usize = 16;

/// Resample a stroke to `num_points` points evenly spaced along its arc
/// length.
///
/// Returns an interleaved `[x0, y0, x1, y1, ...]` vector of exactly
/// `num_points * 2` elements. A degenerate stroke (zero arc length)
/// collapses onto its first point.
pub fn temporal_sampling(stroke: &Stroke, num_points: usize) -> Vec<f32> {
    let points = stroke.points();
    let mut vector = Vec::with_capacity(num_points * 2);

    let total_length = stroke.path_length();
    if total_length <= f32::EPSILON || num_points < 2 {
        for _ in 0..num_points {
            vector.push(points[0].x);
            vector.push(points[0].y);
        }
        return vector;
    }

    let increment = total_length / (num_points - 1) as f32;
    let mut last_x = points[0].x;
    let mut last_y = points[0].y;
    let mut distance_so_far = 0.0f32;

    vector.push(last_x);
    vector.push(last_y);

    let mut i = 1;
    while i < points.len() && vector.len() < num_points * 2 {
        let dx = points[i].x - last_x;
        let dy = points[i].y - last_y;
        let segment = (dx * dx + dy * dy).sqrt();

        if distance_so_far + segment >= increment {
            // Emit a sample inside this segment and continue from it
            let ratio = (increment - distance_so_far) / segment;
            last_x += ratio * dx;
            last_y += ratio * dy;
            vector.push(last_x);
            vector.push(last_y);
            distance_so_far = 0.0;
        } else {
            distance_so_far += segment;
            last_x = points[i].x;
            last_y = points[i].y;
            i += 1;
        }
    }

    // Rounding can leave the final sample short of the endpoint
    while vector.len() < num_points * 2 {
        vector.push(last_x);
        vector.push(last_y);
    }

    vector
}

/// Rasterize a whole gesture into a `grid_size` × `grid_size` occupancy
/// patch.
///
/// The gesture is scaled (aspect preserved) and centered onto the patch,
/// then each stroke polyline is walked at sub-cell steps, splatting
/// bilinear coverage weights with max-accumulation. The result is a
/// row-major vector of `grid_size * grid_size` values in [0, 1],
/// insensitive to stroke count and draw order.
pub fn spatial_sampling(gesture: &Gesture, grid_size: usize) -> Vec<f32> {
    let target = (grid_size - 1) as f32;
    let mut sample = vec![0.0f32; grid_size * grid_size];

    let bounds = gesture.bounds();
    let extent = bounds.width().max(bounds.height());
    // A degenerate gesture (single repeated point) lands on the patch center
    let scale = if extent > f32::EPSILON {
        target / extent
    } else {
        0.0
    };
    let half = target / 2.0;

    let to_patch = |p: &TimedPoint| {
        (
            ((p.x - bounds.center_x()) * scale + half).clamp(0.0, target),
            ((p.y - bounds.center_y()) * scale + half).clamp(0.0, target),
        )
    };

    for stroke in gesture.strokes() {
        let points = stroke.points();
        let (mut prev_x, mut prev_y) = to_patch(&points[0]);
        plot(prev_x, prev_y, &mut sample, grid_size);

        for (x, y) in points[1..].iter().map(to_patch) {
            // One step per cell crossed along the longer axis
            let steps = (x - prev_x).abs().max((y - prev_y).abs()).ceil() as usize;
            for k in 1..=steps {
                let t = k as f32 / steps as f32;
                plot(
                    prev_x + (x - prev_x) * t,
                    prev_y + (y - prev_y) * t,
                    &mut sample,
                    grid_size,
                );
            }
            prev_x = x;
            prev_y = y;
        }
    }

    sample
}

/// Splat bilinear coverage weights for a patch-space position into the
/// four surrounding cells, keeping the maximum weight per cell.
fn plot(x: f32, y: f32, sample: &mut [f32], grid_size: usize) {
    let x_floor = x.floor();
    let y_floor = y.floor();
    let fx = x - x_floor;
    let fy = y - y_floor;
    let col = x_floor as usize;
    let row = y_floor as usize;

    let mut splat = |c: usize, r: usize, weight: f32| {
        if c < grid_size && r < grid_size && weight > 0.0 {
            let index = r * grid_size + c;
            if sample[index] < weight {
                sample[index] = weight;
            }
        }
    };

    splat(col, row, (1.0 - fx) * (1.0 - fy));
    splat(col + 1, row, fx * (1.0 - fy));
    splat(col, row + 1, (1.0 - fx) * fy);
    splat(col + 1, row + 1, fx * fy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TimedPoint;
    use approx::assert_relative_eq;

    fn stroke(points: &[(f32, f32)]) -> Stroke {
        Stroke::new(
            points
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| TimedPoint::new(x, y, i as i64 * 10))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_temporal_sampling_length() {
        let s = stroke(&[(0.0, 0.0), (10.0, 0.0)]);
        let vector = temporal_sampling(&s, SEQUENCE_SAMPLE_SIZE);
        assert_eq!(vector.len(), SEQUENCE_SAMPLE_SIZE * 2);
    }

    #[test]
    fn test_temporal_sampling_straight_line_is_uniform() {
        let s = stroke(&[(0.0, 0.0), (3.0, 0.0), (15.0, 0.0)]);
        let vector = temporal_sampling(&s, 16);

        // 16 samples over a 15-unit line: one per unit
        for (i, pair) in vector.chunks_exact(2).enumerate() {
            assert_relative_eq!(pair[0], i as f32, epsilon = 1e-3);
            assert_relative_eq!(pair[1], 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_temporal_sampling_ends_at_endpoint() {
        let s = stroke(&[(0.0, 0.0), (1.0, 2.0), (4.0, 6.0), (-2.0, 6.0)]);
        let vector = temporal_sampling(&s, 16);
        assert_relative_eq!(vector[30], -2.0, epsilon = 1e-3);
        assert_relative_eq!(vector[31], 6.0, epsilon = 1e-3);
    }

    #[test]
    fn test_temporal_sampling_degenerate_stroke() {
        let s = stroke(&[(2.0, 3.0), (2.0, 3.0)]);
        let vector = temporal_sampling(&s, 4);
        assert_eq!(vector, vec![2.0, 3.0, 2.0, 3.0, 2.0, 3.0, 2.0, 3.0]);
    }

    #[test]
    fn test_temporal_sampling_skips_duplicate_points() {
        let s = stroke(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (8.0, 0.0)]);
        let vector = temporal_sampling(&s, 8);
        assert_relative_eq!(vector[14], 8.0, epsilon = 1e-3);
        assert_relative_eq!(vector[2], 8.0 / 7.0, epsilon = 1e-3);
    }

    #[test]
    fn test_spatial_sampling_shape_and_range() {
        let gesture = Gesture::new(vec![stroke(&[(0.0, 0.0), (100.0, 50.0)])]).unwrap();
        let patch = spatial_sampling(&gesture, PATCH_SAMPLE_SIZE);

        assert_eq!(patch.len(), PATCH_SAMPLE_SIZE * PATCH_SAMPLE_SIZE);
        assert!(patch.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(patch.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn test_spatial_sampling_stroke_order_invariant() {
        let a = stroke(&[(0.0, 0.0), (10.0, 0.0)]);
        let b = stroke(&[(0.0, 10.0), (10.0, 10.0)]);

        let forward = Gesture::new(vec![a.clone(), b.clone()]).unwrap();
        let reversed = Gesture::new(vec![b, a]).unwrap();

        assert_eq!(
            spatial_sampling(&forward, PATCH_SAMPLE_SIZE),
            spatial_sampling(&reversed, PATCH_SAMPLE_SIZE)
        );
    }

    #[test]
    fn test_spatial_sampling_translation_invariant() {
        let base = Gesture::new(vec![stroke(&[(0.0, 0.0), (20.0, 10.0), (20.0, 30.0)])]).unwrap();
        let moved =
            Gesture::new(vec![stroke(&[(500.0, -70.0), (520.0, -60.0), (520.0, -40.0)])]).unwrap();

        let patch_a = spatial_sampling(&base, PATCH_SAMPLE_SIZE);
        let patch_b = spatial_sampling(&moved, PATCH_SAMPLE_SIZE);
        for (a, b) in patch_a.iter().zip(patch_b.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_spatial_sampling_degenerate_gesture_hits_center() {
        let gesture = Gesture::new(vec![stroke(&[(5.0, 5.0), (5.0, 5.0)])]).unwrap();
        let patch = spatial_sampling(&gesture, PATCH_SAMPLE_SIZE);

        let occupied: Vec<usize> = patch
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v > 0.0)
            .map(|(i, _)| i)
            .collect();
        assert!(!occupied.is_empty());
        // All coverage stays within the four cells around the patch center
        for index in occupied {
            let row = index / PATCH_SAMPLE_SIZE;
            let col = index % PATCH_SAMPLE_SIZE;
            assert!((7..=8).contains(&row), "row {row}");
            assert!((7..=8).contains(&col), "col {col}");
        }
    }
}
