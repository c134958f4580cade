/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Byte reading routines
//!
//! This module exposes [`ByteCursor`], a sequential bounds-aware
//! reader over an in-memory buffer. The wireless bitmap formats are
//! strictly sequential, so the cursor only ever moves forward; there
//! is no seek or rewind surface.

pub use self::cursor::{ByteCursor, ByteIoError};

mod cursor;
