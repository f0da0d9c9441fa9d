extern crate bit7;
extern crate tracing;
extern crate tracing_subscriber;

use std::io::{Cursor, ErrorKind, Read};

use bit7::{read_7bit, read_7bit_strict, write_7bit, ReadBit7, WriteBit7};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_cursor_round_trip() {
    let values: Vec<u64> = vec![0, 1, 127, 128, 300, 16384, 1 << 28, (1 << 35) - 1];
    let mut buf: Vec<u8> = Vec::new();
    let mut written = 0;

    for &value in &values {
        written += write_7bit(&mut buf, value).unwrap();
    }
    assert_eq!(written, buf.len());

    let mut cursor = Cursor::new(buf);
    for &value in &values {
        assert_eq!(read_7bit(&mut cursor).unwrap(), value);
    }
    assert_eq!(cursor.position() as usize, written);
}

#[test]
fn test_write_returns_byte_count() {
    let mut buf: Vec<u8> = Vec::new();
    assert_eq!(write_7bit(&mut buf, 0).unwrap(), 1);
    assert_eq!(write_7bit(&mut buf, 300).unwrap(), 2);
    assert_eq!(write_7bit(&mut buf, u64::max_value()).unwrap(), 6);
    assert_eq!(buf.len(), 9);
    assert_eq!(&buf[..3], &[0x00, 0xAC, 0x02]);
}

#[test]
fn test_truncated_stream() {
    let mut cursor = Cursor::new(vec![0xAC]);
    let err = read_7bit(&mut cursor).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);

    let mut empty = Cursor::new(Vec::<u8>::new());
    assert_eq!(read_7bit_strict(&mut empty).unwrap_err().kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn test_overlong_stream() {
    init_logging();

    let mut cursor = Cursor::new(vec![0xFFu8; 8]);
    assert_eq!(read_7bit(&mut cursor).unwrap(), (1 << 42) - 1);
    assert_eq!(cursor.position(), 6);

    let mut cursor = Cursor::new(vec![0xFFu8; 8]);
    let err = read_7bit_strict(&mut cursor).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert_eq!(cursor.position(), 6);
}

#[test]
fn test_strict_accepts_terminated() {
    let mut cursor = Cursor::new(vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xAC, 0x02]);
    assert_eq!(read_7bit_strict(&mut cursor).unwrap(), (1 << 42) - 1);
    assert_eq!(read_7bit_strict(&mut cursor).unwrap(), 300);
}

#[test]
fn test_extension_traits() {
    let mut buf: Vec<u8> = Vec::new();
    assert_eq!(buf.write_7bit(128).unwrap(), 2);
    assert_eq!(buf.write_7bit(5).unwrap(), 1);

    let mut reader = &buf[..];
    assert_eq!(reader.read_7bit().unwrap(), 128);
    assert_eq!(reader.read_7bit_strict().unwrap(), 5);
    assert!(reader.is_empty());
}

#[test]
fn test_leaves_rest_of_stream() {
    let mut cursor = Cursor::new(vec![0xAC, 0x02, b'o', b'k']);
    assert_eq!(cursor.read_7bit().unwrap(), 300);

    let mut rest = String::new();
    cursor.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "ok");
}
