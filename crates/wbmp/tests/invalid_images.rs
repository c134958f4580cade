/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use wbmp::{WbmpDecoder, WbmpDecoderErrors};
use wbmp_core::bytestream::ByteIoError;
use wbmp_core::options::DecoderOptions;

#[test]
fn unsupported_image_type() {
    let mut decoder = WbmpDecoder::new([0x01, 0x00, 0x01, 0x01, 0x80]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, WbmpDecoderErrors::UnsupportedImageType(1)));
}

#[test]
fn unsupported_image_type_multi_byte() {
    // type field 128 takes two octets
    let mut decoder = WbmpDecoder::new([0x81, 0x00, 0x00, 0x01, 0x01, 0x80]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, WbmpDecoderErrors::UnsupportedImageType(128)));
}

#[test]
fn extended_header_rejected() {
    let mut decoder = WbmpDecoder::new([0x00, 0x1F, 0x01, 0x01, 0x80]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        WbmpDecoderErrors::UnsupportedExtendedHeader(0x1F)
    ));
}

#[test]
fn zero_width() {
    let mut decoder = WbmpDecoder::new([0x00, 0x00, 0x00, 0x01]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, WbmpDecoderErrors::InvalidDimensions(0, 1)));
}

#[test]
fn zero_height() {
    let mut decoder = WbmpDecoder::new([0x00, 0x00, 0x01, 0x00]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, WbmpDecoderErrors::InvalidDimensions(1, 0)));
}

#[test]
fn width_above_format_ceiling() {
    // width 65536 encodes as three octets
    let mut decoder = WbmpDecoder::new([0x00, 0x00, 0x84, 0x80, 0x00, 0x01]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        WbmpDecoderErrors::InvalidDimensions(65536, 1)
    ));
}

#[test]
fn truncated_bitmap() {
    // 16x2 needs four packed bytes, only one row is present
    let mut decoder = WbmpDecoder::new([0x00, 0x00, 0x10, 0x02, 0xFF, 0xFF]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, WbmpDecoderErrors::TruncatedBitmap(4, 2)));
}

#[test]
fn empty_input() {
    let mut decoder = WbmpDecoder::new([]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        WbmpDecoderErrors::IoErrors(ByteIoError::NotEnoughBytes(_, _))
    ));
}

#[test]
fn eof_inside_header() {
    let mut decoder = WbmpDecoder::new([0x00]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        WbmpDecoderErrors::IoErrors(ByteIoError::NotEnoughBytes(_, _))
    ));
}

#[test]
fn unterminated_multi_byte_integer() {
    let mut decoder = WbmpDecoder::new([0x00, 0x00, 0x82]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        WbmpDecoderErrors::IoErrors(ByteIoError::NotEnoughBytes(_, _))
    ));
}

#[test]
fn multi_byte_integer_overflow() {
    // a type field that never terminates within 31 bits
    let mut decoder = WbmpDecoder::new([0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        WbmpDecoderErrors::IoErrors(ByteIoError::IntegerOverflow(_))
    ));
}

#[test]
fn width_above_configured_limit() {
    let options = DecoderOptions::default().set_max_width(8);
    let mut decoder =
        WbmpDecoder::new_with_options([0x00, 0x00, 0x09, 0x01, 0xFF, 0x80], options);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        WbmpDecoderErrors::TooLargeDimensions("width", 8, 9)
    ));
}

#[test]
fn height_above_configured_limit() {
    let options = DecoderOptions::default().set_max_height(1);
    let mut decoder =
        WbmpDecoder::new_with_options([0x00, 0x00, 0x08, 0x02, 0xFF, 0x00], options);

    let err = decoder.decode().unwrap_err();

    assert!(matches!(
        err,
        WbmpDecoderErrors::TooLargeDimensions("height", 1, 2)
    ));
}

#[test]
fn too_small_output() {
    let mut decoder = WbmpDecoder::new([0x00, 0x00, 0x01, 0x01, 0x80]);

    let mut pixels = [0; 3];
    let err = decoder.decode_into(&mut pixels).unwrap_err();

    assert!(matches!(err, WbmpDecoderErrors::TooSmallOutput(4, 3)));
}
