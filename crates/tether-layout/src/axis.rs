//! Axis markers.
//!
//! Solvers and builders are tagged with [`Horizontal`] or [`Vertical`] so a
//! y-axis declaration can never be applied as a box's x solver. The tags are
//! zero-sized and only exist at compile time; [`AxisKind`] is the runtime
//! counterpart used in diagnostics.

use std::fmt;

use tether_core::scalar::{XFloat, XInt, YFloat, YInt};

mod sealed {
    pub trait Sealed {}
}

/// Compile-time axis tag.
pub trait Axis: sealed::Sealed + 'static {
    /// Runtime identity of this axis.
    const KIND: AxisKind;
}

/// The x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizontal {}

/// The y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vertical {}

impl sealed::Sealed for Horizontal {}
impl sealed::Sealed for Vertical {}

impl Axis for Horizontal {
    const KIND: AxisKind = AxisKind::Horizontal;
}

impl Axis for Vertical {
    const KIND: AxisKind = AxisKind::Vertical;
}

/// Runtime axis identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    Horizontal,
    Vertical,
}

impl AxisKind {
    /// The extent measured along this axis.
    #[must_use]
    pub const fn dimension(self) -> &'static str {
        match self {
            Self::Horizontal => "width",
            Self::Vertical => "height",
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("x"),
            Self::Vertical => f.write_str("y"),
        }
    }
}

/// A scalar a lambda may return for axis `A`.
///
/// Float values truncate toward zero when a constraint stores them.
pub trait AxisValue<A: Axis>: Copy {
    /// Raw pixel value.
    fn into_raw(self) -> i32;
}

impl AxisValue<Horizontal> for XInt {
    #[inline]
    fn into_raw(self) -> i32 {
        self.value()
    }
}

impl AxisValue<Horizontal> for XFloat {
    #[inline]
    fn into_raw(self) -> i32 {
        self.to_int().value()
    }
}

impl AxisValue<Vertical> for YInt {
    #[inline]
    fn into_raw(self) -> i32 {
        self.value()
    }
}

impl AxisValue<Vertical> for YFloat {
    #[inline]
    fn into_raw(self) -> i32 {
        self.to_int().value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw<A: Axis, V: AxisValue<A>>(value: V) -> i32 {
        value.into_raw()
    }

    #[test]
    fn floats_truncate() {
        assert_eq!(raw::<Horizontal, _>(XFloat(33.8)), 33);
        assert_eq!(raw::<Vertical, _>(YFloat(-1.5)), -1);
        assert_eq!(raw::<Horizontal, _>(XInt(7)), 7);
    }

    #[test]
    fn kinds() {
        assert_eq!(Horizontal::KIND, AxisKind::Horizontal);
        assert_eq!(Vertical::KIND.dimension(), "height");
        assert_eq!(AxisKind::Horizontal.to_string(), "x");
    }
}
