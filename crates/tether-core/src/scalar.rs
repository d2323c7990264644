#![forbid(unsafe_code)]

//! Axis-tagged scalars.
//!
//! [`XInt`]/[`XFloat`] live on the horizontal axis, [`YInt`]/[`YFloat`] on the
//! vertical one. Arithmetic is only implemented between values of the same
//! axis (plus untagged `i32`/`f32` operands), so `XInt + YInt` does not
//! compile. Moving a value to the other axis takes an explicit
//! [`XInt::to_y`]/[`YInt::to_x`].
//!
//! Int/float mixing follows the usual promotion: any float operand makes the
//! result a float of the same axis. Converting back with `to_int` truncates
//! toward zero.
//!
//! ```
//! use tether_core::scalar::{XFloat, XInt};
//!
//! let width = XInt(260);
//! let tenth: XFloat = width * 0.13;
//! assert_eq!(tenth.to_int(), XInt(33));
//! assert_eq!((width / 2).to_y().value(), 130);
//! ```

use std::ops;

macro_rules! int_binops {
    ($ty:ident, $float:ident; $($trait:ident :: $method:ident),+ $(,)?) => {$(
        impl ops::$trait for $ty {
            type Output = $ty;
            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                $ty(ops::$trait::$method(self.0, rhs.0))
            }
        }

        impl ops::$trait<i32> for $ty {
            type Output = $ty;
            #[inline]
            fn $method(self, rhs: i32) -> $ty {
                $ty(ops::$trait::$method(self.0, rhs))
            }
        }

        impl ops::$trait<f32> for $ty {
            type Output = $float;
            #[inline]
            fn $method(self, rhs: f32) -> $float {
                $float(ops::$trait::$method(self.0 as f32, rhs))
            }
        }

        impl ops::$trait<$float> for $ty {
            type Output = $float;
            #[inline]
            fn $method(self, rhs: $float) -> $float {
                $float(ops::$trait::$method(self.0 as f32, rhs.0))
            }
        }
    )+};
}

macro_rules! float_binops {
    ($ty:ident, $int:ident; $($trait:ident :: $method:ident),+ $(,)?) => {$(
        impl ops::$trait for $ty {
            type Output = $ty;
            #[inline]
            fn $method(self, rhs: $ty) -> $ty {
                $ty(ops::$trait::$method(self.0, rhs.0))
            }
        }

        impl ops::$trait<f32> for $ty {
            type Output = $ty;
            #[inline]
            fn $method(self, rhs: f32) -> $ty {
                $ty(ops::$trait::$method(self.0, rhs))
            }
        }

        impl ops::$trait<i32> for $ty {
            type Output = $ty;
            #[inline]
            fn $method(self, rhs: i32) -> $ty {
                $ty(ops::$trait::$method(self.0, rhs as f32))
            }
        }

        impl ops::$trait<$int> for $ty {
            type Output = $ty;
            #[inline]
            fn $method(self, rhs: $int) -> $ty {
                $ty(ops::$trait::$method(self.0, rhs.0 as f32))
            }
        }
    )+};
}

macro_rules! axis_scalars {
    (
        $(#[$int_meta:meta])* $int:ident,
        $(#[$float_meta:meta])* $float:ident,
        $other_int:ident, $other_float:ident, $relabel:ident
    ) => {
        $(#[$int_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $int(pub i32);

        $(#[$float_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
        pub struct $float(pub f32);

        impl $int {
            /// Zero on this axis.
            pub const ZERO: Self = Self(0);

            /// The raw pixel value.
            #[inline]
            pub const fn value(self) -> i32 {
                self.0
            }

            /// Relabel onto the other axis.
            #[inline]
            pub const fn $relabel(self) -> $other_int {
                $other_int(self.0)
            }

            /// Promote to a float on the same axis.
            #[inline]
            pub fn to_float(self) -> $float {
                $float(self.0 as f32)
            }

            /// Absolute value.
            #[inline]
            pub const fn abs(self) -> Self {
                Self(self.0.abs())
            }
        }

        impl $float {
            /// Zero on this axis.
            pub const ZERO: Self = Self(0.0);

            /// The raw value.
            #[inline]
            pub const fn value(self) -> f32 {
                self.0
            }

            /// Relabel onto the other axis.
            #[inline]
            pub const fn $relabel(self) -> $other_float {
                $other_float(self.0)
            }

            /// Truncate toward zero (saturating, NaN maps to zero).
            #[inline]
            pub fn to_int(self) -> $int {
                $int(self.0 as i32)
            }
        }

        int_binops!($int, $float; Add::add, Sub::sub, Mul::mul, Div::div);
        float_binops!($float, $int; Add::add, Sub::sub, Mul::mul, Div::div);

        impl ops::Neg for $int {
            type Output = $int;
            #[inline]
            fn neg(self) -> $int {
                $int(-self.0)
            }
        }

        impl ops::Neg for $float {
            type Output = $float;
            #[inline]
            fn neg(self) -> $float {
                $float(-self.0)
            }
        }

        impl ops::AddAssign for $int {
            #[inline]
            fn add_assign(&mut self, rhs: $int) {
                self.0 += rhs.0;
            }
        }

        impl ops::SubAssign for $int {
            #[inline]
            fn sub_assign(&mut self, rhs: $int) {
                self.0 -= rhs.0;
            }
        }

        impl ops::AddAssign<i32> for $int {
            #[inline]
            fn add_assign(&mut self, rhs: i32) {
                self.0 += rhs;
            }
        }

        impl ops::SubAssign<i32> for $int {
            #[inline]
            fn sub_assign(&mut self, rhs: i32) {
                self.0 -= rhs;
            }
        }

        impl From<$int> for $float {
            #[inline]
            fn from(value: $int) -> Self {
                value.to_float()
            }
        }
    };
}

axis_scalars!(
    /// An integer pixel value on the x axis.
    XInt,
    /// A fractional pixel value on the x axis.
    XFloat,
    YInt, YFloat, to_y
);

axis_scalars!(
    /// An integer pixel value on the y axis.
    YInt,
    /// A fractional pixel value on the y axis.
    YFloat,
    XInt, XFloat, to_x
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_arithmetic_stays_on_axis() {
        assert_eq!(XInt(10) + XInt(5), XInt(15));
        assert_eq!(XInt(10) - 5, XInt(5));
        assert_eq!(XInt(10) * 5, XInt(50));
        assert_eq!(XInt(10) / XInt(5), XInt(2));
        assert_eq!(YInt(10) + 5, YInt(15));
        assert_eq!(-YInt(3), YInt(-3));
    }

    #[test]
    fn int_with_float_promotes() {
        assert_eq!(XInt(10) + 5.0, XFloat(15.0));
        assert_eq!(XInt(10) * XFloat(0.5), XFloat(5.0));
        assert_eq!(YInt(10) / 4.0, YFloat(2.5));
        assert_eq!(YInt(10) - YFloat(2.5), YFloat(7.5));
    }

    #[test]
    fn float_arithmetic() {
        assert_eq!(XFloat(1.5) + XInt(2), XFloat(3.5));
        assert_eq!(XFloat(1.5) * 2, XFloat(3.0));
        assert_eq!(YFloat(9.0) / YFloat(3.0), YFloat(3.0));
        assert_eq!(-XFloat(1.0), XFloat(-1.0));
    }

    #[test]
    fn float_truncates_toward_zero() {
        assert_eq!(XFloat(33.8).to_int(), XInt(33));
        assert_eq!(XFloat(-2.7).to_int(), XInt(-2));
        assert_eq!(YFloat(f32::NAN).to_int(), YInt(0));
        assert_eq!(YFloat(f32::INFINITY).to_int(), YInt(i32::MAX));
    }

    #[test]
    fn relabel_is_explicit() {
        assert_eq!(XInt(7).to_y(), YInt(7));
        assert_eq!(YInt(7).to_x(), XInt(7));
        assert_eq!(XFloat(0.5).to_y(), YFloat(0.5));
        assert_eq!(YFloat(0.5).to_x(), XFloat(0.5));
    }

    #[test]
    fn compound_assignment() {
        let mut x = XInt(1);
        x += XInt(2);
        x += 3;
        x -= 1;
        assert_eq!(x, XInt(5));
    }

    #[test]
    fn ordering_and_abs() {
        assert!(XInt(3) < XInt(4));
        assert_eq!(XInt(3).max(XInt(9)), XInt(9));
        assert_eq!(YInt(-4).abs(), YInt(4));
        assert!(XFloat(1.0) < XFloat(1.5));
    }

    #[test]
    fn conversions() {
        assert_eq!(XFloat::from(XInt(4)), XFloat(4.0));
        assert_eq!(YInt(4).to_float(), YFloat(4.0));
        assert_eq!(XInt::ZERO.value(), 0);
        assert_eq!(YFloat::ZERO.value(), 0.0);
    }
}
