//! Gesture store file envelope.
//!
//! Layout (big-endian network order):
//!
//! ```text
//!              Bytes   Type        Description
//!              -------------------------------
//! Header
//!              2       i16         File format version number
//!              4       i32         Number of entries
//! Entry
//!              2 + N   UTF-8       Entry name, u16 byte-length prefix
//!              4       i32         Number of gestures
//! Gesture
//!              8       u64         Gesture id
//!              4       i32         Number of strokes
//! Stroke
//!              4       i32         Number of points
//! Point
//!              4       f32         X coordinate
//!              4       f32         Y coordinate
//!              8       i64         Timestamp in milliseconds
//! ```
//!
//! Writers always emit version 1. Readers dispatch on the version field
//! and ignore unrecognized versions.

use std::collections::BTreeMap;
use std::io::{Read, Write};

use crate::core::types::Gesture;
use crate::core::wire;
use crate::error::Result;

/// The file format version written by [`write_entries`].
pub const FILE_FORMAT_VERSION: i16 = 1;

/// Write the whole label mapping, header included.
pub(crate) fn write_entries<W: Write>(
    writer: &mut W,
    entries: &BTreeMap<String, Vec<Gesture>>,
) -> Result<()> {
    wire::write_i16(writer, FILE_FORMAT_VERSION)?;
    wire::write_i32(writer, entries.len() as i32)?;

    for (name, gestures) in entries {
        wire::write_string(writer, name)?;
        wire::write_i32(writer, gestures.len() as i32)?;
        for gesture in gestures {
            gesture.encode(writer)?;
        }
    }

    Ok(())
}

/// Read the version field from the header.
pub(crate) fn read_version<R: Read>(reader: &mut R) -> Result<i16> {
    wire::read_i16(reader, "file format version")
}

/// Read the version-1 body (everything after the version field).
///
/// Fully decodes before returning, so a failure leaves the caller's
/// in-memory state untouched.
pub(crate) fn read_entries_v1<R: Read>(reader: &mut R) -> Result<Vec<(String, Vec<Gesture>)>> {
    let entry_count = wire::read_count(reader, "entry count")?;
    let mut entries = Vec::with_capacity(entry_count);

    for _ in 0..entry_count {
        let name = wire::read_string(reader, "entry name")?;
        let gesture_count = wire::read_count(reader, "gesture count")?;
        let mut gestures = Vec::with_capacity(gesture_count);
        for _ in 0..gesture_count {
            gestures.push(Gesture::decode(reader)?);
        }
        entries.push((name, gestures));
    }

    Ok(entries)
}
