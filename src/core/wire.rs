//! Big-endian wire primitives for the gesture store format.
//!
//! The on-disk format is network byte order. Every read names the field
//! it was decoding so a truncated file reports exactly where it ended.

use std::io::{Read, Write};

use crate::error::{Error, Result};

fn read_exact_field<R: Read>(reader: &mut R, buf: &mut [u8], field: &'static str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::Truncated(field),
        _ => Error::Io(e),
    })
}

pub fn read_i16<R: Read>(reader: &mut R, field: &'static str) -> Result<i16> {
    let mut buf = [0u8; 2];
    read_exact_field(reader, &mut buf, field)?;
    Ok(i16::from_be_bytes(buf))
}

pub fn read_u16<R: Read>(reader: &mut R, field: &'static str) -> Result<u16> {
    let mut buf = [0u8; 2];
    read_exact_field(reader, &mut buf, field)?;
    Ok(u16::from_be_bytes(buf))
}

pub fn read_i32<R: Read>(reader: &mut R, field: &'static str) -> Result<i32> {
    let mut buf = [0u8; 4];
    read_exact_field(reader, &mut buf, field)?;
    Ok(i32::from_be_bytes(buf))
}

pub fn read_i64<R: Read>(reader: &mut R, field: &'static str) -> Result<i64> {
    let mut buf = [0u8; 8];
    read_exact_field(reader, &mut buf, field)?;
    Ok(i64::from_be_bytes(buf))
}

pub fn read_u64<R: Read>(reader: &mut R, field: &'static str) -> Result<u64> {
    let mut buf = [0u8; 8];
    read_exact_field(reader, &mut buf, field)?;
    Ok(u64::from_be_bytes(buf))
}

/// Reads an f32 via its IEEE-754 bit pattern, preserving the exact bits
/// (including -0.0, subnormals and NaN payloads).
pub fn read_f32<R: Read>(reader: &mut R, field: &'static str) -> Result<f32> {
    let mut buf = [0u8; 4];
    read_exact_field(reader, &mut buf, field)?;
    Ok(f32::from_bits(u32::from_be_bytes(buf)))
}

/// Reads a count field and rejects negative values.
pub fn read_count<R: Read>(reader: &mut R, field: &'static str) -> Result<usize> {
    let value = read_i32(reader, field)?;
    if value < 0 {
        return Err(Error::Decode {
            field,
            reason: format!("negative count {}", value),
        });
    }
    Ok(value as usize)
}

/// Reads a u16-length-prefixed UTF-8 string.
pub fn read_string<R: Read>(reader: &mut R, field: &'static str) -> Result<String> {
    let len = read_u16(reader, field)? as usize;
    let mut buf = vec![0u8; len];
    read_exact_field(reader, &mut buf, field)?;
    String::from_utf8(buf).map_err(|e| Error::Decode {
        field,
        reason: format!("invalid UTF-8: {}", e),
    })
}

pub fn write_i16<W: Write>(writer: &mut W, value: i16) -> Result<()> {
    writer.write_all(&value.to_be_bytes())?;
    Ok(())
}

pub fn write_i32<W: Write>(writer: &mut W, value: i32) -> Result<()> {
    writer.write_all(&value.to_be_bytes())?;
    Ok(())
}

pub fn write_i64<W: Write>(writer: &mut W, value: i64) -> Result<()> {
    writer.write_all(&value.to_be_bytes())?;
    Ok(())
}

pub fn write_u64<W: Write>(writer: &mut W, value: u64) -> Result<()> {
    writer.write_all(&value.to_be_bytes())?;
    Ok(())
}

/// Writes an f32 via its IEEE-754 bit pattern.
pub fn write_f32<W: Write>(writer: &mut W, value: f32) -> Result<()> {
    writer.write_all(&value.to_bits().to_be_bytes())?;
    Ok(())
}

/// Writes a u16-length-prefixed UTF-8 string.
///
/// Names longer than 65535 bytes do not fit the length prefix and are
/// rejected rather than silently truncated.
pub fn write_string<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    let bytes = value.as_bytes();
    if bytes.len() > u16::MAX as usize {
        return Err(Error::InvalidInput(format!(
            "entry name too long for wire format: {} bytes",
            bytes.len()
        )));
    }
    writer.write_all(&(bytes.len() as u16).to_be_bytes())?;
    writer.write_all(bytes)?;
    Ok(())
}
