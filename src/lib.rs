//! 7-bit variable-length encoding of unsigned integers, as embedded in
//! binary file and network formats.

pub mod common;
pub mod stream;

pub use common::bit7::{length, decode, try_decode, decode_strict, decode_slice, encode, encode_to_vec, Encoder};
pub use stream::{read_7bit, read_7bit_strict, write_7bit, ReadBit7, WriteBit7};
