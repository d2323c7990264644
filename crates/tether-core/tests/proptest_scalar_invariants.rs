//! Property-based invariant tests for scalars and geometry.
//!
//! 1. Same-axis int arithmetic agrees with raw `i32` arithmetic.
//! 2. Relabeling round-trips (x → y → x is the identity).
//! 3. Float promotion then truncation agrees with `as i32`.
//! 4. `Rect::from_ltrb` preserves every edge.
//! 5. Union contains both inputs.
//! 6. Inner never grows a rectangle.
//! 7. Dip conversion is monotone for positive densities.

use proptest::prelude::*;
use tether_core::geometry::{Rect, Sides};
use tether_core::scalar::{XFloat, XInt, YInt};
use tether_core::units::Density;

fn small() -> impl Strategy<Value = i32> {
    -10_000i32..=10_000
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (small(), small(), 0i32..=5_000, 0i32..=5_000).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Same-axis arithmetic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn int_arithmetic_matches_raw(a in small(), b in small()) {
        prop_assert_eq!((XInt(a) + XInt(b)).value(), a + b);
        prop_assert_eq!((XInt(a) - b).value(), a - b);
        prop_assert_eq!((YInt(a) * YInt(b)).value(), a * b);
        if b != 0 {
            prop_assert_eq!((YInt(a) / b).value(), a / b);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Relabel round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn relabel_round_trips(a in any::<i32>()) {
        prop_assert_eq!(XInt(a).to_y().to_x(), XInt(a));
        prop_assert_eq!(YInt(a).to_x().to_y(), YInt(a));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Promotion + truncation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fraction_truncates_like_cast(a in 0i32..=4_000, f in 0.0f32..=2.0) {
        let scaled: XFloat = XInt(a) * f;
        prop_assert_eq!(scaled.to_int().value(), (a as f32 * f) as i32);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–6. Rect invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn from_ltrb_preserves_edges(l in small(), t in small(), w in 0i32..=5_000, h in 0i32..=5_000) {
        let r = Rect::from_ltrb(l, t, l + w, t + h);
        prop_assert_eq!(r.left(), l);
        prop_assert_eq!(r.top(), t);
        prop_assert_eq!(r.right(), l + w);
        prop_assert_eq!(r.bottom(), t + h);
    }

    #[test]
    fn union_contains_both(a in rect_strategy(), b in rect_strategy()) {
        let u = a.union(&b);
        prop_assert!(u.left() <= a.left() && u.left() <= b.left());
        prop_assert!(u.top() <= a.top() && u.top() <= b.top());
        prop_assert!(u.right() >= a.right() && u.right() >= b.right());
        prop_assert!(u.bottom() >= a.bottom() && u.bottom() >= b.bottom());
    }

    #[test]
    fn inner_never_grows(r in rect_strategy(), t in 0i32..=100, ri in 0i32..=100, b in 0i32..=100, l in 0i32..=100) {
        let inner = r.inner(Sides::new(t, ri, b, l));
        prop_assert!(inner.width <= r.width);
        prop_assert!(inner.height <= r.height);
        prop_assert!(inner.width >= 0 && inner.height >= 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Dip monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn dip_is_monotone(a in 0i32..=2_000, b in 0i32..=2_000, factor in 0.5f32..=4.0) {
        let density = Density::new(factor);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(density.dip(lo) <= density.dip(hi));
    }
}
