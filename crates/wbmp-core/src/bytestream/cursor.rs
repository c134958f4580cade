/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

/// Errors that can occur when reading from a [`ByteCursor`]
#[non_exhaustive]
pub enum ByteIoError {
    /// A read went past the end of the buffer
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes actually left
    NotEnoughBytes(usize, usize),
    /// A multi-byte integer did not terminate within 31 bits
    ///
    /// The argument is the accumulated value at the point the
    /// continuation would have overflowed it
    IntegerOverflow(u32)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(requested, available) => {
                writeln!(
                    f,
                    "Not enough bytes, requested {requested} but only {available} remain"
                )
            }
            ByteIoError::IntegerOverflow(accumulated) => {
                writeln!(
                    f,
                    "Multi-byte integer exceeds 31 bits, accumulated value was {accumulated}"
                )
            }
        }
    }
}

impl core::fmt::Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

/// A sequential reader over an in-memory byte buffer
///
/// The cursor owns its read position, which starts at zero and only
/// ever advances; the underlying buffer is never mutated.
///
/// # Example
/// ```
/// use wbmp_core::bytestream::ByteCursor;
///
/// let mut cursor = ByteCursor::new([0x82, 0x2C]);
/// assert_eq!(cursor.read_multi_byte_integer().unwrap(), 300);
/// assert!(cursor.is_eof());
/// ```
pub struct ByteCursor<T: AsRef<[u8]>> {
    buffer:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    /// Create a new cursor positioned at the start of `buffer`
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            buffer,
            position: 0
        }
    }

    /// Read a single octet and advance the position by one
    ///
    /// # Returns
    /// - `Ok(u8)`: The octet at the current position
    /// - `Err(ByteIoError::NotEnoughBytes)`: The position is already at
    ///   the end of the buffer
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8, ByteIoError> {
        match self.buffer.as_ref().get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Read a single octet, returning `0` if the buffer is exhausted
    ///
    /// Provided for hot loops that have already confirmed availability
    /// with [`has`](Self::has); the position does not advance past the
    /// end of the buffer.
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.buffer.as_ref().get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Read a multi-byte integer, the big-endian base-128 encoding used
    /// by the wireless bitmap header fields
    ///
    /// Each continuation octet contributes its low seven bits, most
    /// significant septet first; the first octet with a clear high bit
    /// terminates the value. The decoded value is bounded to 31 bits,
    /// continuations past that fail with
    /// [`ByteIoError::IntegerOverflow`] rather than wrapping.
    ///
    /// # Example
    /// ```
    /// use wbmp_core::bytestream::ByteCursor;
    ///
    /// // 0x82 carries septet 2 with the continuation bit set,
    /// // 0x2C terminates: (2 << 7) | 0x2C == 300
    /// let mut cursor = ByteCursor::new([0x82, 0x2C]);
    /// assert_eq!(cursor.read_multi_byte_integer().unwrap(), 300);
    /// ```
    pub fn read_multi_byte_integer(&mut self) -> Result<u32, ByteIoError> {
        let mut result: u32 = 0;

        loop {
            if result & 0xFE00_0000 != 0 {
                return Err(ByteIoError::IntegerOverflow(result));
            }
            let octet = self.read_u8()?;

            result = (result << 7) | u32::from(octet & 0x7F);

            if octet & 0x80 == 0 {
                return Ok(result);
            }
        }
    }

    /// Return the current read position
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Return the total length of the underlying buffer
    pub fn len(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// Return true if the underlying buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.as_ref().is_empty()
    }

    /// Return the number of bytes left to read
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position)
    }

    /// Return true if at least `num_bytes` more bytes can be read
    pub fn has(&self, num_bytes: usize) -> bool {
        self.remaining() >= num_bytes
    }

    /// Return true if the position has reached the end of the buffer
    pub fn is_eof(&self) -> bool {
        self.position >= self.len()
    }
}
