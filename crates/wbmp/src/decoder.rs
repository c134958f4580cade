/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use log::{trace, warn};
use wbmp_core::bit_depth::BitDepth;
use wbmp_core::bytestream::ByteCursor;
use wbmp_core::colorspace::ColorSpace;
use wbmp_core::options::DecoderOptions;

use crate::errors::WbmpDecoderErrors;

/// The only image type WAP ever registered, black and white
/// with no compression
const WBMP_TYPE_BW_UNCOMPRESSED: u32 = 0;
/// Largest width or height the header may legally declare
const WBMP_MAX_DIMENSIONS: usize = 65535;

const WBMP_COLORSPACE: ColorSpace = ColorSpace::RGBA;
const WBMP_BIT_DEPTH: BitDepth = BitDepth::Eight;

/// Probe some bytes to see
/// if they consist of a WBMP image
///
/// WBMP has no magic bytes; a level-0 image starts with a zero type
/// field followed by a zero fix-header field, which is what this
/// checks. Treat a `true` as a hint, not a guarantee.
///
/// # Example
/// ```
/// use wbmp::probe_wbmp;
///
/// assert!(probe_wbmp(&[0x00, 0x00, 0x01, 0x01, 0x80]));
/// assert!(!probe_wbmp(b"BM"));
/// ```
pub fn probe_wbmp(bytes: &[u8]) -> bool {
    matches!(bytes, [0x00, 0x00, ..])
}

/// A WBMP decoder.
///
/// Decodes type-0 (black and white, uncompressed) wireless bitmaps
/// into 8-bit RGBA pixels, one set bit becoming an opaque white pixel
/// and one clear bit an opaque black pixel.
///
/// # Usage
///
/// ## Extracting image metadata
/// - use `decode_headers` + utility functions to get information
/// ```
/// use wbmp::WbmpDecoder;
///
/// fn main() -> Result<(), wbmp::WbmpDecoderErrors> {
///     let data = [0x00, 0x00, 0x82, 0x2C, 0x01];
///     let mut decoder = WbmpDecoder::new(&data);
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     // unwrap won't panic
///     let (w, h) = decoder.dimensions().unwrap();
///     assert_eq!((w, h), (300, 1));
///
///     Ok(())
/// }
/// ```
///
/// ## Just getting the pixels
///
/// ```
/// use wbmp::WbmpDecoder;
///
/// fn main() -> Result<(), wbmp::WbmpDecoderErrors> {
///     let data = [0x00, 0x00, 0x01, 0x01, 0x00];
///     let mut decoder = WbmpDecoder::new(&data);
///     let pixels = decoder.decode()?;
///     assert_eq!(pixels, [0, 0, 0, 255]);
///     Ok(())
/// }
/// ```
pub struct WbmpDecoder<T>
where
    T: AsRef<[u8]>
{
    stream:          ByteCursor<T>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    decoded_headers: bool
}

impl<T> WbmpDecoder<T>
where
    T: AsRef<[u8]>
{
    /// Create a new WBMP decoder that reads data from `data`
    ///
    /// # Arguments
    /// - `data`: The raw WBMP file contents
    ///
    /// # Returns
    /// - A decoder instance which will on calling `decode` will decode
    ///   the data
    pub fn new(data: T) -> WbmpDecoder<T> {
        WbmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits lower than the
    /// format ceiling to prevent OOM attacks
    ///
    /// # Arguments
    /// - `data`: The raw WBMP file contents
    /// - `options`: Decoder options that the decoder should respect
    ///
    /// # Example
    /// ```
    /// use wbmp::WbmpDecoder;
    /// use wbmp_core::options::DecoderOptions;
    ///
    /// // only decode images less than 10 in both width and height
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = WbmpDecoder::new_with_options([], options);
    /// ```
    pub fn new_with_options(data: T, options: DecoderOptions) -> WbmpDecoder<T> {
        WbmpDecoder {
            stream: ByteCursor::new(data),
            options,
            width: 0,
            height: 0,
            decoded_headers: false
        }
    }

    /// Decode the WBMP header storing the image information into
    /// the decoder instance
    ///
    /// The header is, in order: a multi-byte type field, one
    /// fix-header octet, a multi-byte width and a multi-byte height.
    /// Only type 0 with a zero fix-header field is accepted, and both
    /// dimensions must be in `1..=65535`.
    ///
    /// Calling this again after it succeeded is a no-op.
    ///
    /// # Returns
    /// - On success: Nothing
    /// - On error: The error encountered when decoding headers,
    ///   an instance of [WbmpDecoderErrors]
    ///
    /// [WbmpDecoderErrors]:crate::errors::WbmpDecoderErrors
    pub fn decode_headers(&mut self) -> Result<(), WbmpDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }

        let image_type = self.stream.read_multi_byte_integer()?;

        if image_type != WBMP_TYPE_BW_UNCOMPRESSED {
            return Err(WbmpDecoderErrors::UnsupportedImageType(image_type));
        }

        // a non-zero fix-header field introduces extension headers,
        // a documented but never deployed part of the format
        let fix_header = self.stream.read_u8()?;

        if fix_header != 0 {
            return Err(WbmpDecoderErrors::UnsupportedExtendedHeader(fix_header));
        }

        let width = self.stream.read_multi_byte_integer()? as usize;
        let height = self.stream.read_multi_byte_integer()? as usize;

        if width == 0
            || width > WBMP_MAX_DIMENSIONS
            || height == 0
            || height > WBMP_MAX_DIMENSIONS
        {
            return Err(WbmpDecoderErrors::InvalidDimensions(width, height));
        }

        if width > self.options.max_width() {
            return Err(WbmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                width
            ));
        }

        if height > self.options.max_height() {
            return Err(WbmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                height
            ));
        }

        self.width = width;
        self.height = height;

        trace!("Image width: {}", self.width);
        trace!("Image height: {}", self.height);

        self.decoded_headers = true;

        Ok(())
    }

    /// Return the number of bytes required to hold the decoded image
    ///
    /// # Returns
    /// - `Some(usize)`: Minimum size for a buffer needed to decode the image
    /// - `None`: Indicates the headers were not decoded
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            self.width
                .checked_mul(self.height)?
                .checked_mul(WBMP_COLORSPACE.num_components())
        } else {
            None
        }
    }

    /// Decode a WBMP image returning the uncompressed RGBA pixels,
    /// row-major with the origin at the top left
    ///
    /// Additional details about the image can be found after calling
    /// this/[`decode_headers`], e.g the width and height via the
    /// [`dimensions`] method.
    ///
    /// # Returns
    /// - On success: The decoded bytes, whose length is exactly
    ///   `width * height * 4`
    /// - On error: An instance of [WbmpDecoderErrors] which gives the
    ///   reason the image could not be decoded
    ///
    /// [`decode_headers`]:Self::decode_headers
    /// [`dimensions`]:Self::dimensions
    /// [WbmpDecoderErrors]:crate::errors::WbmpDecoderErrors
    pub fn decode(&mut self) -> Result<Vec<u8>, WbmpDecoderErrors> {
        self.decode_headers()?;

        let mut pixels = vec![0; self.output_buffer_size().unwrap()];

        self.decode_into(&mut pixels)?;

        Ok(pixels)
    }

    /// Decode a WBMP image and store the pixels into `pixels`
    ///
    /// Returns an error if the output cannot hold the decoded image,
    /// bytes past `width * height * 4` are left untouched
    ///
    /// # Arguments
    ///
    /// * `pixels`: Output buffer for which we will write decoded
    ///   pixels
    ///
    /// returns: Result<(), WbmpDecoderErrors>
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), WbmpDecoderErrors> {
        self.decode_headers()?;

        let output_size = self.output_buffer_size().unwrap();

        if pixels.len() < output_size {
            return Err(WbmpDecoderErrors::TooSmallOutput(output_size, pixels.len()));
        }

        // rows are padded to whole octets, 8 pixels per octet
        let row_stride = (self.width + 7) / 8;
        let packed_size = row_stride * self.height;

        if !self.stream.has(packed_size) {
            return Err(WbmpDecoderErrors::TruncatedBitmap(
                packed_size,
                self.stream.remaining()
            ));
        }

        let out_row_size = self.width * WBMP_COLORSPACE.num_components();

        for row in pixels[..output_size].chunks_exact_mut(out_row_size) {
            let mut bits = 0;

            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                if x % 8 == 0 {
                    bits = self.stream.get_u8();
                }
                // the most significant bit is the leftmost pixel; the
                // trailing bits of a row's last octet shift out unused
                let color = if bits & 0x80 != 0 { 255 } else { 0 };
                bits <<= 1;

                pixel[0] = color;
                pixel[1] = color;
                pixel[2] = color;
                pixel[3] = 255;
            }
        }

        // the stride pre-check keeps the cursor inside the buffer,
        // verify it did
        if self.stream.position() > self.stream.len() {
            return Err(WbmpDecoderErrors::TruncatedBitmap(
                self.stream.position(),
                self.stream.len()
            ));
        }

        if !self.stream.is_eof() {
            warn!("{} trailing bytes ignored", self.stream.remaining());
        }

        trace!("Finished decoding image");

        Ok(())
    }

    /// Return the WBMP output colorspace
    ///
    /// This is always RGBA
    pub const fn colorspace(&self) -> ColorSpace {
        WBMP_COLORSPACE
    }

    /// Return the WBMP output bit depth
    ///
    /// This is always 8
    pub const fn bit_depth(&self) -> BitDepth {
        WBMP_BIT_DEPTH
    }

    /// Return the width and height of the image
    ///
    /// Or `None` if the headers haven't been decoded
    ///
    /// # Example
    /// ```
    /// use wbmp::WbmpDecoder;
    ///
    /// let data = [0x00, 0x00, 0x09, 0x01, 0xFF, 0x80];
    /// let mut decoder = WbmpDecoder::new(&data);
    /// assert!(decoder.dimensions().is_none());
    ///
    /// decoder.decode_headers().unwrap();
    /// assert_eq!(decoder.dimensions(), Some((9, 1)));
    /// ```
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }
}
