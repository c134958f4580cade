//! Core routines shared by the wbmp family of crates
//!
//! This crate provides the substrate the decoder builds on
//!
//! It currently contains
//!
//! - A forward-only bytestream cursor with the multi-byte integer
//!   decoding used by the wireless bitmap formats
//! - Colorspace and bit depth information shared by images
//! - Image decoder options
//!
//! This library is `#[no_std]`, the `std` feature adds
//! [`std::error::Error`] implementations for the error types.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod options;
