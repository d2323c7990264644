#![forbid(unsafe_code)]

//! Density-independent pixel conversion.
//!
//! Declarations are usually written in dips so the same layout reads the
//! same on every screen. The density is plain configuration: it is carried by
//! the layout configuration and handed to each lambda through its scope, never
//! read from a process-wide setting.

use crate::scalar::{XInt, YInt};

/// Physical pixels per density-independent pixel.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Density(f32);

impl Density {
    /// One pixel per dip.
    pub const IDENTITY: Self = Self(1.0);

    /// Create a density factor. Non-finite or non-positive factors fall back
    /// to [`Density::IDENTITY`].
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self::IDENTITY
        }
    }

    /// The raw factor.
    #[inline]
    pub const fn factor(self) -> f32 {
        self.0
    }

    /// Convert dips to pixels, truncating toward zero.
    #[inline]
    pub fn dip(self, value: i32) -> i32 {
        (value as f32 * self.0) as i32
    }

    /// Convert fractional dips to pixels.
    #[inline]
    pub fn dip_f(self, value: f32) -> f32 {
        value * self.0
    }

    /// Convert dips to an x-axis pixel value.
    #[inline]
    pub fn xdip(self, value: i32) -> XInt {
        XInt(self.dip(value))
    }

    /// Convert dips to a y-axis pixel value.
    #[inline]
    pub fn ydip(self, value: i32) -> YInt {
        YInt(self.dip(value))
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::IDENTITY
    }
}
