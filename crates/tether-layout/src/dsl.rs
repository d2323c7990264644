//! Declaration builders.
//!
//! A declaration starts by pinning one anchor of a box, e.g. [`left_to`],
//! and may add either the opposite edge or an explicit size. The builder's
//! state parameter tracks what has been declared so illegal chains do not
//! compile:
//!
//! ```compile_fail
//! use tether_layout::dsl::center_horizontally_to;
//! use tether_core::XInt;
//!
//! // A centered box has no "other edge" to pin.
//! let _ = center_horizontally_to(|_| Ok(XInt(0))).right_to(|_| Ok(XInt(10)));
//! ```
//!
//! Lambdas return the axis' int or float scalar; floats truncate toward zero.
//!
//! ```
//! use tether_layout::dsl::{left_to, top_to};
//! use tether_layout::{Horizontal, Solver, Vertical};
//!
//! let x: Solver<Horizontal> = left_to(|s| s.parent().left())
//!     .width_of(|s| Ok(s.parent().width()? * 0.1))
//!     .into();
//! let y: Solver<Vertical> = top_to(|s| s.parent().top()).into();
//! # let _ = (x, y);
//! ```

use std::marker::PhantomData;

use crate::axis::{Axis, AxisValue, Horizontal, Vertical};
use crate::constraint::{Anchor, Constraint, Lambda, PositionConstraint};
use crate::error::LayoutError;
use crate::measure::SizeMode;
use crate::scope::LayoutScope;
use crate::solver::Solver;
use crate::solver::comparison::{CompareBy, ComparisonSolver};
use crate::solver::simple::SimpleAxisSolver;

/// Builder states.
pub mod state {
    /// Pinned by its minimum edge (left or top).
    #[derive(Debug)]
    pub enum FromMin {}
    /// Pinned by its center.
    #[derive(Debug)]
    pub enum FromMid {}
    /// Pinned by its maximum edge (right or bottom).
    #[derive(Debug)]
    pub enum FromMax {}
    /// Pinned by its baseline.
    #[derive(Debug)]
    pub enum FromBaseline {}
    /// Extent declared; nothing more can be added.
    #[derive(Debug)]
    pub enum Bound {}

    mod sealed {
        pub trait Sealed {}
    }

    /// States whose extent is still open.
    pub trait Unsized: sealed::Sealed {}

    impl sealed::Sealed for FromMin {}
    impl sealed::Sealed for FromMid {}
    impl sealed::Sealed for FromMax {}
    impl sealed::Sealed for FromBaseline {}

    impl Unsized for FromMin {}
    impl Unsized for FromMid {}
    impl Unsized for FromMax {}
    impl Unsized for FromBaseline {}
}

use state::{Bound, FromBaseline, FromMax, FromMid, FromMin, Unsized};

/// A declaration in progress for axis `A`.
pub struct Position<A, S> {
    solver: SimpleAxisSolver,
    _state: PhantomData<fn() -> (A, S)>,
}

impl<A: Axis, S> std::fmt::Debug for Position<A, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position<{}>", A::KIND)
    }
}

impl<A: Axis, S> From<Position<A, S>> for Solver<A> {
    fn from(position: Position<A, S>) -> Self {
        Solver::new(Box::new(position.solver))
    }
}

fn lambda<A, V, F>(f: F) -> Lambda
where
    A: Axis,
    V: AxisValue<A>,
    F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
{
    Box::new(move |scope: &LayoutScope<'_>| f(scope).map(|value| value.into_raw()))
}

impl<A: Axis, S> Position<A, S> {
    fn start(anchor: Anchor, lambda: Lambda) -> Self {
        Self {
            solver: SimpleAxisSolver::new(PositionConstraint::new(anchor, lambda, SizeMode::Exact)),
            _state: PhantomData,
        }
    }

    fn edge<T>(mut self, anchor: Anchor, mode: SizeMode, lambda: Lambda) -> Position<A, T> {
        self.solver
            .set_p1(PositionConstraint::new(anchor, lambda, mode));
        Position {
            solver: self.solver,
            _state: PhantomData,
        }
    }

    fn sized<T>(mut self, mode: SizeMode, lambda: Lambda) -> Position<A, T> {
        self.solver.set_size(Constraint::new(lambda, mode));
        Position {
            solver: self.solver,
            _state: PhantomData,
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Pin the left edge.
pub fn left_to<V, F>(f: F) -> Position<Horizontal, FromMin>
where
    V: AxisValue<Horizontal>,
    F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
{
    Position::start(Anchor::Min, lambda::<Horizontal, _, _>(f))
}

/// Pin the right edge.
pub fn right_to<V, F>(f: F) -> Position<Horizontal, FromMax>
where
    V: AxisValue<Horizontal>,
    F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
{
    Position::start(Anchor::Max, lambda::<Horizontal, _, _>(f))
}

/// Pin the horizontal center.
pub fn center_horizontally_to<V, F>(f: F) -> Position<Horizontal, FromMid>
where
    V: AxisValue<Horizontal>,
    F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
{
    Position::start(Anchor::Mid, lambda::<Horizontal, _, _>(f))
}

/// Pin the top edge.
pub fn top_to<V, F>(f: F) -> Position<Vertical, FromMin>
where
    V: AxisValue<Vertical>,
    F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
{
    Position::start(Anchor::Min, lambda::<Vertical, _, _>(f))
}

/// Pin the bottom edge.
pub fn bottom_to<V, F>(f: F) -> Position<Vertical, FromMax>
where
    V: AxisValue<Vertical>,
    F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
{
    Position::start(Anchor::Max, lambda::<Vertical, _, _>(f))
}

/// Pin the vertical center.
pub fn center_vertically_to<V, F>(f: F) -> Position<Vertical, FromMid>
where
    V: AxisValue<Vertical>,
    F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
{
    Position::start(Anchor::Mid, lambda::<Vertical, _, _>(f))
}

/// Pin the text baseline.
pub fn baseline_to<V, F>(f: F) -> Position<Vertical, FromBaseline>
where
    V: AxisValue<Vertical>,
    F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
{
    Position::start(Anchor::Baseline, lambda::<Vertical, _, _>(f))
}

// ============================================================================
// Chains
// ============================================================================

impl Position<Horizontal, FromMin> {
    /// Pin the right edge; the box is measured at exactly the span.
    pub fn right_to<V, F>(self, f: F) -> Position<Horizontal, Bound>
    where
        V: AxisValue<Horizontal>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.right_to_with(SizeMode::Exact, f)
    }

    /// Pin the right edge with an explicit size mode.
    pub fn right_to_with<V, F>(self, mode: SizeMode, f: F) -> Position<Horizontal, Bound>
    where
        V: AxisValue<Horizontal>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.edge(Anchor::Max, mode, lambda::<Horizontal, _, _>(f))
    }
}

impl Position<Horizontal, FromMax> {
    /// Pin the left edge; the box is measured at exactly the span.
    pub fn left_to<V, F>(self, f: F) -> Position<Horizontal, Bound>
    where
        V: AxisValue<Horizontal>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.left_to_with(SizeMode::Exact, f)
    }

    /// Pin the left edge with an explicit size mode.
    pub fn left_to_with<V, F>(self, mode: SizeMode, f: F) -> Position<Horizontal, Bound>
    where
        V: AxisValue<Horizontal>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.edge(Anchor::Min, mode, lambda::<Horizontal, _, _>(f))
    }
}

impl Position<Vertical, FromMin> {
    /// Pin the bottom edge; the box is measured at exactly the span.
    pub fn bottom_to<V, F>(self, f: F) -> Position<Vertical, Bound>
    where
        V: AxisValue<Vertical>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.bottom_to_with(SizeMode::Exact, f)
    }

    /// Pin the bottom edge with an explicit size mode.
    pub fn bottom_to_with<V, F>(self, mode: SizeMode, f: F) -> Position<Vertical, Bound>
    where
        V: AxisValue<Vertical>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.edge(Anchor::Max, mode, lambda::<Vertical, _, _>(f))
    }
}

impl Position<Vertical, FromMax> {
    /// Pin the top edge; the box is measured at exactly the span.
    pub fn top_to<V, F>(self, f: F) -> Position<Vertical, Bound>
    where
        V: AxisValue<Vertical>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.top_to_with(SizeMode::Exact, f)
    }

    /// Pin the top edge with an explicit size mode.
    pub fn top_to_with<V, F>(self, mode: SizeMode, f: F) -> Position<Vertical, Bound>
    where
        V: AxisValue<Vertical>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.edge(Anchor::Min, mode, lambda::<Vertical, _, _>(f))
    }
}

impl<S: Unsized> Position<Horizontal, S> {
    /// Declare the width exactly.
    pub fn width_of<V, F>(self, f: F) -> Position<Horizontal, Bound>
    where
        V: AxisValue<Horizontal>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.width_of_with(SizeMode::Exact, f)
    }

    /// Declare the width with an explicit size mode.
    pub fn width_of_with<V, F>(self, mode: SizeMode, f: F) -> Position<Horizontal, Bound>
    where
        V: AxisValue<Horizontal>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.sized(mode, lambda::<Horizontal, _, _>(f))
    }
}

impl<S: Unsized> Position<Vertical, S> {
    /// Declare the height exactly.
    pub fn height_of<V, F>(self, f: F) -> Position<Vertical, Bound>
    where
        V: AxisValue<Vertical>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.height_of_with(SizeMode::Exact, f)
    }

    /// Declare the height with an explicit size mode.
    pub fn height_of_with<V, F>(self, mode: SizeMode, f: F) -> Position<Vertical, Bound>
    where
        V: AxisValue<Vertical>,
        F: Fn(&LayoutScope<'_>) -> Result<V, LayoutError> + 'static,
    {
        self.sized(mode, lambda::<Vertical, _, _>(f))
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Whichever of two unsized declarations resolves its minimum edge first
/// along the axis. Ties go to `a`.
pub fn min_of<A, S0, S1>(a: Position<A, S0>, b: Position<A, S1>) -> Solver<A>
where
    A: Axis,
    S0: Unsized,
    S1: Unsized,
{
    compare(a, b, CompareBy::MinOf)
}

/// Whichever of two unsized declarations resolves its minimum edge last
/// along the axis. Ties go to `a`.
pub fn max_of<A, S0, S1>(a: Position<A, S0>, b: Position<A, S1>) -> Solver<A>
where
    A: Axis,
    S0: Unsized,
    S1: Unsized,
{
    compare(a, b, CompareBy::MaxOf)
}

fn compare<A: Axis, S0, S1>(a: Position<A, S0>, b: Position<A, S1>, by: CompareBy) -> Solver<A> {
    Solver::new(Box::new(ComparisonSolver::new(
        Box::new(a.solver),
        Box::new(b.solver),
        by,
    )))
}
