/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use wbmp_core::bytestream::ByteIoError;

/// WBMP errors that can occur during decoding
#[non_exhaustive]
pub enum WbmpDecoderErrors {
    /// The type field is not 0, the only type this decoder
    /// supports (black and white, no compression)
    ///
    /// The argument is the type field encountered
    UnsupportedImageType(u32),
    /// The fix-header field is not zero, meaning the image
    /// declares an extended header
    ///
    /// The argument is the fix-header octet encountered
    UnsupportedExtendedHeader(u8),
    /// Width or height is zero or exceeds 65535
    ///
    /// Arguments are the declared width and height
    InvalidDimensions(usize, usize),
    /// A dimension exceeds the configured decoder limit
    ///
    /// # Arguments
    /// - 1st argument is the dimension name
    /// - 2nd argument is the configured limit
    /// - 3rd argument is the value encountered
    TooLargeDimensions(&'static str, usize, usize),
    /// The pixel data ends before all declared rows can be read
    ///
    /// # Arguments
    /// - 1st argument is the number of packed bytes the header implies
    /// - 2nd argument is the number of bytes actually left
    TruncatedBitmap(usize, usize),
    /// The output buffer is too small to hold the decoded image
    ///
    /// # Arguments
    /// - 1st argument is the size needed
    /// - 2nd argument is the size found
    TooSmallOutput(usize, usize),
    /// An error originating from the byte stream
    IoErrors(ByteIoError)
}

impl Debug for WbmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedImageType(kind) => {
                writeln!(
                    f,
                    "Unsupported image type {kind}, only type 0 (B/W, no compression) is supported"
                )
            }
            Self::UnsupportedExtendedHeader(octet) => {
                writeln!(
                    f,
                    "Non-zero fix-header field {octet:#04X}, extended headers are not supported"
                )
            }
            Self::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid image dimensions {width}x{height}, both must be in 1..=65535"
                )
            }
            Self::TooLargeDimensions(dimension, limit, found) => {
                writeln!(
                    f,
                    "Too large {dimension}, {found} exceeds the configured limit {limit}"
                )
            }
            Self::TruncatedBitmap(expected, found) => {
                writeln!(
                    f,
                    "Bitmap data truncated, needed {expected} packed bytes but only {found} remain"
                )
            }
            Self::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected} but found {found}"
                )
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for WbmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<ByteIoError> for WbmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        WbmpDecoderErrors::IoErrors(value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WbmpDecoderErrors {}
