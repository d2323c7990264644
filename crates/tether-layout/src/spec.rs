//! Per-box geometry.
//!
//! A [`LayoutSpec`] owns the x and y solvers of one box. [`SolveCx`] pairs it
//! with the box's measurer and the container scope for the duration of one
//! query, and is where the two axes meet: measuring a box needs both specs,
//! so both are computed before the single call into the measurer.

use tether_core::trace;

use crate::axis::{Horizontal, Vertical};
use crate::error::LayoutError;
use crate::measure::{MeasureSpec, Measurable, Measured};
use crate::scope::{BoxId, LayoutScope};
use crate::solver::{AxisSolver, Solver};

/// The two solvers of one box.
pub(crate) struct LayoutSpec {
    x: Solver<Horizontal>,
    y: Solver<Vertical>,
}

impl LayoutSpec {
    pub(crate) fn new(owner: BoxId, x: Solver<Horizontal>, y: Solver<Vertical>) -> Self {
        x.get().on_attach(owner);
        y.get().on_attach(owner);
        Self { x, y }
    }

    pub(crate) fn x(&self) -> &dyn AxisSolver {
        self.x.get()
    }

    pub(crate) fn y(&self) -> &dyn AxisSolver {
        self.y.get()
    }

    /// Forget everything resolved this pass.
    pub(crate) fn clear(&self) {
        self.x.get().clear();
        self.y.get().clear();
    }

    pub(crate) fn into_parts(self) -> (Solver<Horizontal>, Solver<Vertical>) {
        (self.x, self.y)
    }
}

/// Everything a solver needs to answer one query about its box.
#[derive(Clone, Copy)]
pub(crate) struct SolveCx<'a> {
    scope: LayoutScope<'a>,
    id: BoxId,
    spec: &'a LayoutSpec,
    node: &'a dyn Measurable,
}

impl<'a> SolveCx<'a> {
    pub(crate) fn new(
        scope: LayoutScope<'a>,
        id: BoxId,
        spec: &'a LayoutSpec,
        node: &'a dyn Measurable,
    ) -> Self {
        Self {
            scope,
            id,
            spec,
            node,
        }
    }

    pub(crate) fn scope(&self) -> &LayoutScope<'a> {
        &self.scope
    }

    pub(crate) fn id(&self) -> BoxId {
        self.id
    }

    pub(crate) fn spec(&self) -> &'a LayoutSpec {
        self.spec
    }

    /// Measure the box and report the result to both axes.
    ///
    /// Boxes that are not participating get a zero range without a call into
    /// the measurer.
    pub(crate) fn measure_self(&self) -> Result<(), LayoutError> {
        let (x, y) = (self.spec.x(), self.spec.y());
        if !self.node.visibility().is_participating() {
            trace!(node = %self.id, "not participating; zero range");
            x.on_range_resolved(0, 0);
            y.on_range_resolved(0, 0);
            return Ok(());
        }
        let width = x.measure_spec(self)?;
        let height = y.measure_spec(self)?;
        let measured = self.node.measure(width, height);
        trace!(
            node = %self.id,
            ?width,
            ?height,
            measured_width = measured.width,
            measured_height = measured.height,
            "measured"
        );
        x.on_range_resolved(measured.width, 0);
        y.on_range_resolved(measured.height, measured.baseline);
        Ok(())
    }

    /// Measure with the box's own specs but one axis left unconstrained.
    ///
    /// The width of the result answers `preferred_width`, the height
    /// answers `preferred_height`. Nothing is recorded.
    pub(crate) fn preferred(&self, axis_free: PreferredAxis) -> Result<Measured, LayoutError> {
        if !self.node.visibility().is_participating() {
            return Ok(Measured::default());
        }
        let (width, height) = match axis_free {
            PreferredAxis::Width => (MeasureSpec::Unconstrained, self.spec.y().measure_spec(self)?),
            PreferredAxis::Height => (self.spec.x().measure_spec(self)?, MeasureSpec::Unconstrained),
        };
        Ok(self.node.measure(width, height))
    }
}

/// Which axis a preferred-size query leaves unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreferredAxis {
    Width,
    Height,
}
