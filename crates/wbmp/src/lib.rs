/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A WBMP (Wireless Bitmap) level-0 decoder
//!
//! This crate decodes the uncompressed black-and-white WBMP images
//! historically served to constrained mobile devices, producing RGBA
//! pixels (white for set bits, black for clear bits, always opaque).
//!
//! # Features
//! - `no_std` with the `alloc` crate
//! - Minimal interface, few dependencies
//! - No unsafe
//! - Fuzz tested decoder
//!
//! # Supported formats
//! - Type 0: black and white, no compression
//!
//! # Unsupported formats
//! - Extended headers and every reserved image type
//!
//! # Usage
//! ```
//! use wbmp::WbmpDecoder;
//!
//! // a 1x1 image whose single bit is set
//! let data = [0x00, 0x00, 0x01, 0x01, 0x80];
//! let mut decoder = WbmpDecoder::new(&data);
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(pixels, [255, 255, 255, 255]);
//! ```
//!
//! The decoder hands off `(width, height, RGBA bytes)`; rendering that
//! tuple to a surface or re-encoding it into a container format is the
//! caller's business.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
extern crate alloc;

pub use wbmp_core;

pub use crate::decoder::{probe_wbmp, WbmpDecoder};
pub use crate::errors::WbmpDecoderErrors;

mod decoder;
mod errors;
