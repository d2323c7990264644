//! Per-box, per-axis solvers.
//!
//! Each box owns one solver per axis. A solver answers `min`, `mid`,
//! `baseline`, `max` and `range` lazily: exactly one anchor is pinned by a
//! declaration and everything else is derived from it plus the measured
//! range.
//!
//! - [`simple`] - one or two position constraints, optionally a size
//! - [`comparison`] - the smaller or larger of two simple solvers

pub(crate) mod comparison;
pub(crate) mod simple;

use std::fmt;
use std::marker::PhantomData;

use crate::axis::Axis;
use crate::error::LayoutError;
use crate::measure::MeasureSpec;
use crate::scope::BoxId;
use crate::spec::SolveCx;

/// Lazy resolution of one axis of one box.
pub(crate) trait AxisSolver {
    fn min(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError>;
    fn mid(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError>;
    fn baseline(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError>;
    fn max(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError>;
    fn range(&self, cx: &SolveCx<'_>) -> Result<i32, LayoutError>;

    /// Bind every constraint to the owning box.
    fn on_attach(&self, owner: BoxId);

    /// Record the measured extent. Derived values stay lazy.
    fn on_range_resolved(&self, range: i32, baseline_range: i32);

    /// Directive for measuring the owning box along this axis.
    fn measure_spec(&self, cx: &SolveCx<'_>) -> Result<MeasureSpec, LayoutError>;

    /// Forget everything resolved this pass.
    fn clear(&self);
}

/// A finished declaration for one axis, ready to apply to a box.
///
/// Built from the declaration functions in [`crate::dsl`]; any position
/// builder converts into one with `.into()`.
pub struct Solver<A> {
    inner: Box<dyn AxisSolver>,
    _axis: PhantomData<fn() -> A>,
}

impl<A: Axis> Solver<A> {
    pub(crate) fn new(inner: Box<dyn AxisSolver>) -> Self {
        Self {
            inner,
            _axis: PhantomData,
        }
    }

    pub(crate) fn get(&self) -> &dyn AxisSolver {
        &*self.inner
    }

    pub(crate) fn into_inner(self) -> Box<dyn AxisSolver> {
        self.inner
    }
}

impl<A: Axis> fmt::Debug for Solver<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Solver<{}>", A::KIND)
    }
}
