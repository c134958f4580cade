/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image colorspace information

/// All image colorspaces the library can produce
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Grayscale colorspace
    Luma,
    /// Red, Green, Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R, G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::Luma => 1,
            Self::RGB => 3,
            Self::RGBA => 4
        }
    }

    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA)
    }

    /// Returns the position of the alpha channel in a pixel
    ///
    /// For an array of color components say `[0,1,2,3]`, an RGBA image
    /// stores alpha in index 3 so this returns `Some(3)`
    ///
    /// If an image doesn't have an alpha channel returns `None`
    pub const fn alpha_position(&self) -> Option<usize> {
        match self {
            ColorSpace::RGBA => Some(3),
            _ => None
        }
    }
}
