//! Property-based invariant tests for axis solvers.
//!
//! 1. Anchor derivation: `right - left == width` and
//!    `center_x == left + width / 2` whichever anchor is pinned.
//! 2. Baseline derivation: `baseline - top == measured baseline`.
//! 3. Comparison: `max_of`/`min_of` pick the larger/smaller min edge.
//! 4. Idempotence: repeated queries within a pass agree.
//! 5. Fractions of the parent truncate like `as i32`.

use proptest::prelude::*;
use tether_core::{Size, XInt, YInt};
use tether_layout::dsl::{
    baseline_to, center_horizontally_to, left_to, max_of, min_of, right_to, top_to,
};
use tether_layout::{Container, Horizontal, LayoutConfig, MeasureSpec, Measured, Solver};

type Node = fn(MeasureSpec, MeasureSpec) -> Measured;

/// Build a single-child container whose node reports `natural`.
fn single(
    natural: (i32, i32, i32),
    x: Solver<Horizontal>,
    top: i32,
) -> (Container<Box<dyn Fn(MeasureSpec, MeasureSpec) -> Measured>>, tether_layout::BoxId) {
    let mut c: Container<Box<dyn Fn(MeasureSpec, MeasureSpec) -> Measured>> =
        Container::new(LayoutConfig::new());
    let (w, h, b) = natural;
    let id = c.add_child(Box::new(move |ws: MeasureSpec, hs: MeasureSpec| {
        Measured::new(ws.apply(w), hs.apply(h)).with_baseline(b)
    }));
    c.apply_layout(id, x, top_to(move |_| Ok(YInt(top))))
        .expect("apply");
    c.measure(Size::new(1_000, 1_000)).expect("measure");
    (c, id)
}

fn anchor_solver(kind: u8, value: i32) -> Solver<Horizontal> {
    match kind % 3 {
        0 => left_to(move |_| Ok(XInt(value))).into(),
        1 => center_horizontally_to(move |_| Ok(XInt(value))).into(),
        _ => right_to(move |_| Ok(XInt(value))).into(),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Anchor derivation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn anchor_derivation_is_consistent(
        kind in 0u8..3,
        value in -500i32..=500,
        width in 0i32..=400,
    ) {
        let (c, id) = single((width, 10, 0), anchor_solver(kind, value), 0);
        let scope = c.scope();
        let left = scope.left(id).unwrap().value();
        let right = scope.right(id).unwrap().value();
        let mid = scope.center_x(id).unwrap().value();
        let range = scope.width(id).unwrap().value();
        prop_assert_eq!(range, width);
        prop_assert_eq!(right - left, range);
        prop_assert_eq!(mid, left + range / 2);
        let pinned = match kind % 3 {
            0 => left,
            1 => mid,
            _ => right,
        };
        prop_assert_eq!(pinned, value);
    }

    #[test]
    fn point_query_order_does_not_matter(
        kind in 0u8..3,
        value in -500i32..=500,
        width in 0i32..=400,
    ) {
        let (a, a_id) = single((width, 10, 0), anchor_solver(kind, value), 0);
        let (b, b_id) = single((width, 10, 0), anchor_solver(kind, value), 0);
        let (sa, sb) = (a.scope(), b.scope());
        let forward = (
            sa.left(a_id).unwrap(),
            sa.center_x(a_id).unwrap(),
            sa.right(a_id).unwrap(),
        );
        let right = sb.right(b_id).unwrap();
        let mid = sb.center_x(b_id).unwrap();
        let left = sb.left(b_id).unwrap();
        prop_assert_eq!(forward, (left, mid, right));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Baseline derivation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn baseline_offsets_from_top(
        value in -200i32..=200,
        height in 0i32..=200,
        baseline in 0i32..=200,
    ) {
        let mut c: Container<Box<dyn Fn(MeasureSpec, MeasureSpec) -> Measured>> =
            Container::new(LayoutConfig::new());
        let id = c.add_child(Box::new(move |ws: MeasureSpec, hs: MeasureSpec| {
            Measured::new(ws.apply(5), hs.apply(height)).with_baseline(baseline)
        }));
        c.apply_layout(
            id,
            left_to(|_| Ok(XInt(0))),
            baseline_to(move |_| Ok(YInt(value))),
        ).unwrap();
        c.measure(Size::new(100, 100)).unwrap();
        let scope = c.scope();
        let top = scope.top(id).unwrap().value();
        let bottom = scope.bottom(id).unwrap().value();
        prop_assert_eq!(scope.baseline(id).unwrap().value(), value);
        prop_assert_eq!(value - top, baseline);
        prop_assert_eq!(bottom - top, height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Comparison
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn max_of_picks_larger_min(a in -500i32..=500, b in -500i32..=500, width in 0i32..=100) {
        let solver = max_of(
            left_to(move |_| Ok(XInt(a))),
            left_to(move |_| Ok(XInt(b))),
        );
        let (c, id) = single((width, 10, 0), solver, 0);
        prop_assert_eq!(c.scope().left(id).unwrap().value(), a.max(b));
        prop_assert_eq!(c.scope().width(id).unwrap().value(), width);
    }

    #[test]
    fn min_of_picks_smaller_min(a in -500i32..=500, b in -500i32..=500, width in 0i32..=100) {
        let solver = min_of(
            left_to(move |_| Ok(XInt(a))),
            right_to(move |_| Ok(XInt(b))),
        );
        let (c, id) = single((width, 10, 0), solver, 0);
        prop_assert_eq!(c.scope().left(id).unwrap().value(), a.min(b - width));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repeated_queries_agree(kind in 0u8..3, value in -500i32..=500, width in 0i32..=400) {
        let (mut c, id) = single((width, 10, 0), anchor_solver(kind, value), 7);
        let first = c.rect(id).unwrap();
        prop_assert_eq!(c.rect(id).unwrap(), first);
        c.invalidate();
        c.measure(Size::new(1_000, 1_000)).unwrap();
        prop_assert_eq!(c.rect(id).unwrap(), first);
        prop_assert_eq!(first.y, 7);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Fractions
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parent_fraction_truncates(available in 0i32..=2_000, fraction in 0.0f32..=1.0) {
        let mut c: Container<Node> = Container::new(LayoutConfig::new());
        let id = c.add_child(|w: MeasureSpec, h: MeasureSpec| Measured::new(w.apply(1), h.apply(1)));
        c.apply_layout(
            id,
            left_to(|_| Ok(XInt(0))).width_of(move |s| Ok(s.parent().width()? * fraction)),
            top_to(|_| Ok(YInt(0))),
        ).unwrap();
        c.measure(Size::new(available, 10)).unwrap();
        prop_assert_eq!(
            c.scope().width(id).unwrap().value(),
            (available as f32 * fraction) as i32
        );
    }
}
