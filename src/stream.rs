use std::io::{Result, Error, ErrorKind, Read, Write};

use crate::common::bit7::{self, MAX_BYTES};

fn read_byte<R: Read + ?Sized>(reader: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Reads one 7-bit integer. A stream that ends mid-integer fails with
/// `UnexpectedEof`; an integer longer than the cap is truncated.
pub fn read_7bit<R: Read + ?Sized>(reader: &mut R) -> Result<u64> {
    bit7::try_decode(|| read_byte(reader))
}

/// Reads one 7-bit integer, failing with `InvalidData` if it does not end
/// within the cap.
pub fn read_7bit_strict<R: Read + ?Sized>(reader: &mut R) -> Result<u64> {
    let (value, size, terminated) = bit7::read_groups(|| read_byte(reader))?;

    if !terminated {
        tracing::debug!(value = value, size = size, "rejecting overlong 7-bit integer");
        return Err(Error::new(ErrorKind::InvalidData, format!("7-bit integer longer than {} bytes.", MAX_BYTES)));
    }

    Ok(value)
}

/// Writes `value` and returns the number of bytes written.
pub fn write_7bit<W: Write + ?Sized>(writer: &mut W, value: u64) -> Result<usize> {
    let mut encoder = bit7::encode(value);
    let mut buf = [0u8; MAX_BYTES];
    let mut len = 0;

    for byte in &mut encoder {
        buf[len] = byte;
        len += 1;
    }

    writer.write_all(&buf[..len])?;

    Ok(encoder.size())
}

pub trait ReadBit7: Read {
    fn read_7bit(&mut self) -> Result<u64> {
        read_7bit(self)
    }

    fn read_7bit_strict(&mut self) -> Result<u64> {
        read_7bit_strict(self)
    }
}

impl<R: Read + ?Sized> ReadBit7 for R {}

pub trait WriteBit7: Write {
    fn write_7bit(&mut self, value: u64) -> Result<usize> {
        write_7bit(self, value)
    }
}

impl<W: Write + ?Sized> WriteBit7 for W {}
