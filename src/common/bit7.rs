//! 7-bit integer encoding. Every byte carries a 7-bit group of the value
//! (least significant group first) and a continuation flag in its high bit.
//! The flag is set on every byte but the last.

use std::convert::Infallible;
use std::iter::FusedIterator;

/// `0111 1111`, the mantissa group of a byte.
pub const LOWER7_MASK: u8 = 0x7F;

/// `1000 0000`, the continuation flag of a byte.
pub const HIGH8_MASK: u8 = 0x80;

/// Most bytes read or written for a single integer.
pub const MAX_BYTES: usize = 6;

/// Last shift at which a group is still accumulated while decoding.
pub const MAX_SHIFT: u32 = 35;

/// Number of bytes `value` occupies once encoded, ignoring the `MAX_BYTES` cap.
///
/// ```
/// use bit7::common::bit7::length;
///
/// assert_eq!(length(0), 1);
/// assert_eq!(length(127), 1);
/// assert_eq!(length(128), 2);
/// assert_eq!(length(16383), 2);
/// assert_eq!(length(16384), 3);
/// assert_eq!(length(268435456), 5);
/// ```
pub fn length(value: u64) -> usize {
    let mut value = value;
    let mut size = 0;

    loop {
        value >>= 7;
        size += 1;

        if value == 0 {
            return size;
        }
    }
}

/// Decodes an integer, pulling bytes from `next` until one has its
/// continuation flag clear or `MAX_BYTES` bytes were read.
pub fn decode<F>(mut next: F) -> u64
    where F: FnMut() -> u8
{
    match try_decode(|| Ok::<u8, Infallible>(next())) {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Like `decode`, for producers that can fail. The first error is returned
/// and no more bytes are requested.
pub fn try_decode<F, E>(next: F) -> Result<u64, E>
    where F: FnMut() -> Result<u8, E>
{
    let (value, _, _) = read_groups(next)?;
    Ok(value)
}

/// Like `decode`, but returns `None` when the stream hit the `MAX_BYTES`
/// cap with the continuation flag still set.
pub fn decode_strict<F>(mut next: F) -> Option<u64>
    where F: FnMut() -> u8
{
    match read_groups(|| Ok::<u8, Infallible>(next())) {
        Ok((value, _, true)) => Some(value),
        Ok((_, _, false)) => None,
        Err(never) => match never {},
    }
}

/// Decodes an integer from the front of `buf`, returning it together with
/// the number of bytes consumed. `None` if `buf` ends mid-integer.
pub fn decode_slice(buf: &[u8]) -> Option<(u64, usize)> {
    let mut bytes = buf.iter();
    let (value, size, _) = read_groups(|| bytes.next().cloned().ok_or(())).ok()?;
    Some((value, size))
}

/// Shared decoding loop. Yields the value, the bytes consumed and whether
/// the last byte read had its continuation flag clear.
pub(crate) fn read_groups<F, E>(mut next: F) -> Result<(u64, usize, bool), E>
    where F: FnMut() -> Result<u8, E>
{
    let mut value: u64 = 0;
    let mut shift: u32 = 0;
    let mut size: usize = 0;

    loop {
        let byte = next()?;
        value |= u64::from(byte & LOWER7_MASK) << shift;
        shift += 7;
        size += 1;

        if byte & HIGH8_MASK == 0 {
            return Ok((value, size, true));
        }

        if shift > MAX_SHIFT {
            tracing::trace!(value = value, size = size, "7-bit integer truncated at decode cap");
            return Ok((value, size, false));
        }
    }
}

/// Lazily encodes `value`. Each call returns a fresh, independent sequence.
///
/// ```
/// use bit7::common::bit7::encode;
///
/// let bytes: Vec<u8> = encode(300).collect();
/// assert_eq!(bytes, vec![0xAC, 0x02]);
/// ```
pub fn encode(value: u64) -> Encoder {
    Encoder {
        value:  value,
        size:   0,
        done:   false,
    }
}

pub fn encode_to_vec(value: u64) -> Vec<u8> {
    let mut result: Vec<u8> = Vec::with_capacity(length(value).min(MAX_BYTES));
    result.extend(encode(value));
    result
}

/// Iterator over the encoded bytes of a single integer.
///
/// Once exhausted, `size` holds the total number of bytes produced. If the
/// value needs more than `MAX_BYTES` groups, emission stops at the cap and
/// the last byte keeps its continuation flag.
#[derive(Clone, Debug)]
pub struct Encoder {
    value:  u64,
    size:   usize,
    done:   bool,
}

impl Encoder {
    /// Bytes emitted so far.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn remaining(&self) -> usize {
        if self.done {
            return 0;
        }
        length(self.value).min(MAX_BYTES - self.size)
    }
}

impl Iterator for Encoder {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }

        let group = (self.value as u8) & LOWER7_MASK;
        self.value >>= 7;
        self.size += 1;

        if self.value == 0 {
            self.done = true;
            return Some(group);
        }

        if self.size >= MAX_BYTES {
            tracing::trace!(remaining = self.value, "7-bit integer truncated at encode cap");
            self.done = true;
        }

        Some(group | HIGH8_MASK)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Encoder {}

impl FusedIterator for Encoder {}
