//! `min_of` / `max_of` composition.
//!
//! Two solvers compete on their resolved `min`. The winner is fixed for the
//! rest of the pass and answers every point query; ties go to the first
//! argument.

use std::cell::Cell;

use tether_core::trace;

use super::AxisSolver;
use crate::error::LayoutError;
use crate::measure::MeasureSpec;
use crate::scope::BoxId;
use crate::spec::SolveCx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompareBy {
    MinOf,
    MaxOf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Winner {
    First,
    Second,
}

pub(crate) struct ComparisonSolver {
    p0: Box<dyn AxisSolver>,
    p1: Box<dyn AxisSolver>,
    compare: CompareBy,
    winner: Cell<Option<Winner>>,
    range: Cell<Option<i32>>,
}

impl ComparisonSolver {
    pub(crate) fn new(p0: Box<dyn AxisSolver>, p1: Box<dyn AxisSolver>, compare: CompareBy) -> Self {
        Self {
            p0,
            p1,
            compare,
            winner: Cell::new(None),
            range: Cell::new(None),
        }
    }

    fn winner(&self, cx: &SolveCx<'_>) -> Result<&dyn AxisSolver, LayoutError> {
        let winner = match self.winner.get() {
            Some(winner) => winner,
            None => {
                let a = self.p0.min(cx)?;
                let b = self.p1.min(cx)?;
                let first = match self.compare {
                    CompareBy::MaxOf => a >= b,
                    CompareBy::MinOf => a <= b,
                };
                let winner = if first { Winner::First } else { Winner::Second };
                trace!(node = %cx.id(), compare = ?self.compare, a, b, ?winner, "comparison decided");
                self.winner.set(Some(winner));
                winner
            }
        };
        Ok(match winner {
            Winner::First => &*self.p0,
            Winner::Second => &*self.p1,
        })
    }
}

impl AxisSolver for ComparisonSolver {
    fn min(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        self.winner(cx)?.min(cx)
    }

    fn mid(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        self.winner(cx)?.mid(cx)
    }

    fn baseline(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        self.winner(cx)?.baseline(cx)
    }

    fn max(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        self.winner(cx)?.max(cx)
    }

    fn range(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError> {
        if self.range.get().is_none() {
            cx.measure_self()?;
        }
        // measure_self reports a range to both axes before returning Ok.
        Ok(self.range.get().unwrap_or_default())
    }

    fn on_attach(&self, owner: BoxId) {
        self.p0.on_attach(owner);
        self.p1.on_attach(owner);
    }

    fn on_range_resolved(&self, range: i32, baseline_range: i32) {
        self.range.set(Some(range));
        self.p0.on_range_resolved(range, baseline_range);
        self.p1.on_range_resolved(range, baseline_range);
    }

    fn measure_spec(&self, _cx: &SolveCx<'_>) -> Result<MeasureSpec, LayoutError> {
        Ok(MeasureSpec::Unconstrained)
    }

    fn clear(&self) {
        self.p0.clear();
        self.p1.clear();
        self.winner.set(None);
        self.range.set(None);
    }
}
