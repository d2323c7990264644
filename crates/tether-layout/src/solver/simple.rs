//! The common solver: one pinned anchor, an optional second edge or size.

use std::cell::Cell;

use tether_core::trace;

use super::AxisSolver;
use crate::constraint::{Anchor, Constraint, PositionConstraint};
use crate::error::LayoutError;
use crate::measure::MeasureSpec;
use crate::scope::BoxId;
use crate::spec::SolveCx;

/// All four points of an axis, derived together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edges {
    min: i32,
    mid: i32,
    baseline: i32,
    max: i32,
}

impl Edges {
    /// Derive from the pinned anchor. `min` is computed first so that
    /// `max - min == range` and `mid == min + range / 2` hold for odd ranges.
    fn derive(anchor: Anchor, value: i32, range: i32, baseline_range: i32) -> Self {
        let half = range / 2;
        let min = match anchor {
            Anchor::Min => value,
            Anchor::Mid => value - half,
            Anchor::Baseline => value - baseline_range,
            Anchor::Max => value - range,
        };
        Self {
            min,
            mid: min + half,
            baseline: min + baseline_range,
            max: min + range,
        }
    }

    fn get(&self, anchor: Anchor) -> i32 {
        match anchor {
            Anchor::Min => self.min,
            Anchor::Mid => self.mid,
            Anchor::Baseline => self.baseline,
            Anchor::Max => self.max,
        }
    }
}

pub(crate) struct SimpleAxisSolver {
    p0: PositionConstraint,
    p1: Option<PositionConstraint>,
    size: Option<Constraint>,
    min: Cell<Option<i32>>,
    mid: Cell<Option<i32>>,
    baseline: Cell<Option<i32>>,
    max: Cell<Option<i32>>,
    /// `(range, baseline_range)` as last reported by a measurement.
    ranges: Cell<Option<(i32, i32)>>,
}

impl SimpleAxisSolver {
    pub(crate) fn new(p0: PositionConstraint) -> Self {
        Self {
            p0,
            p1: None,
            size: None,
            min: Cell::new(None),
            mid: Cell::new(None),
            baseline: Cell::new(None),
            max: Cell::new(None),
            ranges: Cell::new(None),
        }
    }

    /// Pin the second edge. Replaces any earlier second edge.
    pub(crate) fn set_p1(&mut self, p1: PositionConstraint) {
        self.p1 = Some(p1);
    }

    /// Declare the extent. Replaces any earlier size.
    pub(crate) fn set_size(&mut self, size: Constraint) {
        self.size = Some(size);
    }

    fn cache(&self, anchor: Anchor) -> &Cell<Option<i32>> {
        match anchor {
            Anchor::Min => &self.min,
            Anchor::Mid => &self.mid,
            Anchor::Baseline => &self.baseline,
            Anchor::Max => &self.max,
        }
    }

    fn ranges(&self, cx: &SolveCx<'_>) -> Result<(i32, i32), LayoutError> {
        if self.ranges.get().is_none() {
            cx.measure_self()?;
        }
        // measure_self reports a range to both axes before returning Ok.
        Ok(self.ranges.get().unwrap_or_default())
    }

    fn point(&self, anchor: Anchor, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        if let Some(value) = self.cache(anchor).get() {
            return Ok(value);
        }
        if anchor == self.p0.anchor {
            let value = self.p0.constraint.resolve(cx.scope())?;
            self.cache(anchor).set(Some(value));
            return Ok(value);
        }
        let (range, baseline_range) = self.ranges(cx)?;
        let pinned = self.p0.constraint.resolve(cx.scope())?;
        let edges = Edges::derive(self.p0.anchor, pinned, range, baseline_range);
        trace!(node = %cx.id(), ?edges, "axis derived");
        self.min.set(Some(edges.min));
        self.mid.set(Some(edges.mid));
        self.baseline.set(Some(edges.baseline));
        self.max.set(Some(edges.max));
        Ok(edges.get(anchor))
    }
}

impl AxisSolver for SimpleAxisSolver {
    fn min(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        self.point(Anchor::Min, cx)
    }

    fn mid(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        self.point(Anchor::Mid, cx)
    }

    fn baseline(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        self.point(Anchor::Baseline, cx)
    }

    fn max(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        self.point(Anchor::Max, cx)
    }

    fn range(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        self.ranges(cx).map(|(range, _)| range)
    }

    fn on_attach(&self, owner: BoxId) {
        self.p0.constraint.on_attach(owner);
        if let Some(p1) = &self.p1 {
            p1.constraint.on_attach(owner);
        }
        if let Some(size) = &self.size {
            size.on_attach(owner);
        }
    }

    fn on_range_resolved(&self, range: i32, baseline_range: i32) {
        self.ranges.set(Some((range, baseline_range)));
    }

    fn measure_spec(&self, cx: &SolveCx<'_>) -> Result<MeasureSpec, LayoutError> {
        if let Some(p1) = &self.p1 {
            let a = self.p0.constraint.resolve(cx.scope())?;
            let b = p1.constraint.resolve(cx.scope())?;
            Ok(p1.constraint.mode().spec((a - b).abs()))
        } else if let Some(size) = &self.size {
            Ok(size.mode().spec(size.resolve(cx.scope())?))
        } else {
            Ok(MeasureSpec::Unconstrained)
        }
    }

    fn clear(&self) {
        self.min.set(None);
        self.mid.set(None);
        self.baseline.set(None);
        self.max.set(None);
        self.ranges.set(None);
        self.p0.constraint.clear();
        if let Some(p1) = &self.p1 {
            p1.constraint.clear();
        }
        if let Some(size) = &self.size {
            size.clear();
        }
    }
}
