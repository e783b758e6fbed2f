use std::fs;
use std::io::Cursor;

use super::{slurp_file, slurp_lines};
use crate::buf::ChunkBuf;
use crate::error::SlurpError;

#[test]
fn lines_land_back_to_back() {
    let input = b"first line\nsecond\r\nthird\n";
    let mut buf = ChunkBuf::new();
    let total = slurp_lines(Cursor::new(&input[..]), &mut buf).unwrap();

    assert_eq!(total, input.len());
    assert_eq!(buf.as_slice(), input);
    assert_eq!(buf.source().as_c_str().unwrap().to_bytes(), input);
}

#[test]
fn missing_final_newline_is_kept_as_is() {
    let input = b"alpha\nbeta";
    let mut buf = ChunkBuf::new();
    let total = slurp_lines(Cursor::new(&input[..]), &mut buf).unwrap();

    assert_eq!(total, input.len());
    assert_eq!(buf.as_slice(), input);
}

#[test]
fn empty_input_leaves_buffer_empty() {
    let mut buf = ChunkBuf::new();
    let total = slurp_lines(Cursor::new(&b""[..]), &mut buf).unwrap();

    assert_eq!(total, 0);
    assert!(buf.is_empty());
    assert_eq!(buf.allocated_bytes(), 0);
}

#[test]
fn freed_buffer_slurps_like_fresh() {
    let mut buf = ChunkBuf::new();
    slurp_lines(Cursor::new(&b"old contents\n"[..]), &mut buf).unwrap();
    buf.free();

    slurp_lines(Cursor::new(&b"new\n"[..]), &mut buf).unwrap();
    assert_eq!(buf.as_slice(), b"new\n");
}

#[test]
fn missing_file_is_an_io_error() {
    let missing = std::env::temp_dir().join("chunkbuf-no-such-file");
    match slurp_file(&missing) {
        Err(SlurpError::Io(_)) => {}
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn file_round_trips_byte_for_byte() {
    let contents = b"#version 330 core\nout vec4 FragColor;\nvoid main() {}\n";
    let path = std::env::temp_dir().join(format!("chunkbuf-roundtrip-{}", std::process::id()));
    fs::write(&path, contents).unwrap();

    let buf = slurp_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(buf.len(), contents.len());
    assert_eq!(buf.as_slice(), contents);
    assert_eq!(buf.source().as_c_str().unwrap().to_bytes(), contents);
}
