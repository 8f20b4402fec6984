//! A finished gesture trace and its binary codec.

use std::io::{Read, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::point::{BoundingBox, TimedPoint};
use super::stroke::Stroke;
use crate::core::wire;
use crate::error::{Error, Result};

/// Next identifier handed out by [`Gesture::new`]. Advanced past any id
/// seen during decode so loaded and freshly recorded gestures never
/// collide within a process.
static NEXT_GESTURE_ID: AtomicU64 = AtomicU64::new(1);

/// A finished, possibly multi-stroke input trace with a unique identifier.
///
/// Immutable after construction. The identifier is assigned at creation
/// and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    id: u64,
    strokes: Vec<Stroke>,
}

impl Gesture {
    /// Create a gesture from its strokes, assigning a fresh identifier.
    ///
    /// Fails with [`Error::InvalidInput`] when `strokes` is empty.
    pub fn new(strokes: Vec<Stroke>) -> Result<Self> {
        let id = NEXT_GESTURE_ID.fetch_add(1, Ordering::Relaxed);
        Self::with_id(id, strokes)
    }

    /// Create a gesture with an explicit identifier.
    ///
    /// Used when reconstructing gestures from persisted data; the
    /// process-wide id counter is advanced past `id`.
    pub fn with_id(id: u64, strokes: Vec<Stroke>) -> Result<Self> {
        if strokes.is_empty() {
            return Err(Error::InvalidInput(
                "a gesture requires at least one stroke".to_string(),
            ));
        }
        NEXT_GESTURE_ID.fetch_max(id.saturating_add(1), Ordering::Relaxed);
        Ok(Self { id, strokes })
    }

    /// The gesture's identifier.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The strokes, in draw order.
    #[inline]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes.
    #[inline]
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Total number of points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// Bounding box over all strokes.
    pub fn bounds(&self) -> BoundingBox {
        let mut bounds = self.strokes[0].bounds();
        for stroke in &self.strokes[1..] {
            bounds.union(&stroke.bounds());
        }
        bounds
    }

    /// Serialize the gesture in the wire format.
    ///
    /// Layout (big-endian): `id: u64`, `stroke count: i32`, then per
    /// stroke `point count: i32` followed by `x: f32, y: f32,
    /// timestamp: i64` per point. Floats are written bit-exactly.
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        wire::write_u64(writer, self.id)?;
        wire::write_i32(writer, self.strokes.len() as i32)?;
        for stroke in &self.strokes {
            wire::write_i32(writer, stroke.len() as i32)?;
            for point in stroke.points() {
                wire::write_f32(writer, point.x)?;
                wire::write_f32(writer, point.y)?;
                wire::write_i64(writer, point.timestamp_ms)?;
            }
        }
        Ok(())
    }

    /// Deserialize a gesture from the wire format.
    ///
    /// A short read fails with [`Error::Truncated`] naming the missing
    /// field; a zero or negative stroke/point count fails with
    /// [`Error::Decode`]. No partially decoded gesture is returned.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let id = wire::read_u64(reader, "gesture id")?;
        let stroke_count = wire::read_count(reader, "stroke count")?;
        if stroke_count == 0 {
            return Err(Error::Decode {
                field: "stroke count",
                reason: "gesture has no strokes".to_string(),
            });
        }

        let mut strokes = Vec::with_capacity(stroke_count);
        for _ in 0..stroke_count {
            let point_count = wire::read_count(reader, "point count")?;
            if point_count == 0 {
                return Err(Error::Decode {
                    field: "point count",
                    reason: "stroke has no points".to_string(),
                });
            }
            let mut points = Vec::with_capacity(point_count);
            for _ in 0..point_count {
                let x = wire::read_f32(reader, "point x")?;
                let y = wire::read_f32(reader, "point y")?;
                let timestamp_ms = wire::read_i64(reader, "point timestamp")?;
                points.push(TimedPoint::new(x, y, timestamp_ms));
            }
            strokes.push(Stroke::new(points)?);
        }

        Self::with_id(id, strokes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn stroke(points: &[(f32, f32, i64)]) -> Stroke {
        Stroke::new(
            points
                .iter()
                .map(|&(x, y, t)| TimedPoint::new(x, y, t))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Gesture::new(vec![stroke(&[(0.0, 0.0, 0)])]).unwrap();
        let b = Gesture::new(vec![stroke(&[(0.0, 0.0, 0)])]).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_new_id_skips_past_decoded_id() {
        let loaded = Gesture::with_id(1_000_000, vec![stroke(&[(0.0, 0.0, 0)])]).unwrap();
        let fresh = Gesture::new(vec![stroke(&[(0.0, 0.0, 0)])]).unwrap();
        assert!(fresh.id() > loaded.id());
    }

    #[test]
    fn test_empty_gesture_rejected() {
        assert!(matches!(
            Gesture::new(Vec::new()),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_point_count_and_bounds() {
        let gesture = Gesture::new(vec![
            stroke(&[(0.0, 0.0, 0), (4.0, 0.0, 10)]),
            stroke(&[(1.0, -2.0, 20), (1.0, 3.0, 30), (2.0, 3.0, 40)]),
        ])
        .unwrap();

        assert_eq!(gesture.stroke_count(), 2);
        assert_eq!(gesture.point_count(), 5);

        let bounds = gesture.bounds();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 4.0);
        assert_eq!(bounds.min_y, -2.0);
        assert_eq!(bounds.max_y, 3.0);
    }

    #[test]
    fn test_codec_roundtrip_bit_exact() {
        let gesture = Gesture::with_id(
            42,
            vec![
                stroke(&[(1.5, -0.0, 123), (f32::MIN_POSITIVE / 2.0, 2.25, -456)]),
                stroke(&[(0.1, 0.2, i64::MAX)]),
            ],
        )
        .unwrap();

        let mut buf = Vec::new();
        gesture.encode(&mut buf).unwrap();
        let decoded = Gesture::decode(&mut Cursor::new(buf)).unwrap();

        assert_eq!(decoded.id(), 42);
        assert_eq!(decoded.stroke_count(), 2);
        for (a, b) in gesture
            .strokes()
            .iter()
            .zip(decoded.strokes())
            .flat_map(|(sa, sb)| sa.points().iter().zip(sb.points()))
        {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.timestamp_ms, b.timestamp_ms);
        }
    }

    #[test]
    fn test_decode_truncated_names_missing_field() {
        let gesture = Gesture::with_id(7, vec![stroke(&[(1.0, 2.0, 3), (4.0, 5.0, 6)])]).unwrap();
        let mut buf = Vec::new();
        gesture.encode(&mut buf).unwrap();

        // Cut the buffer inside the second point's timestamp
        buf.truncate(buf.len() - 4);
        let err = Gesture::decode(&mut Cursor::new(buf)).unwrap_err();
        assert!(matches!(err, Error::Truncated("point timestamp")));
    }

    #[test]
    fn test_decode_zero_strokes_rejected() {
        let mut buf = Vec::new();
        wire::write_u64(&mut buf, 1).unwrap();
        wire::write_i32(&mut buf, 0).unwrap();
        let err = Gesture::decode(&mut Cursor::new(buf)).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                field: "stroke count",
                ..
            }
        ));
    }

    #[test]
    fn test_decode_negative_point_count_rejected() {
        let mut buf = Vec::new();
        wire::write_u64(&mut buf, 1).unwrap();
        wire::write_i32(&mut buf, 1).unwrap();
        wire::write_i32(&mut buf, -5).unwrap();
        let err = Gesture::decode(&mut Cursor::new(buf)).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                field: "point count",
                ..
            }
        ));
    }
}
