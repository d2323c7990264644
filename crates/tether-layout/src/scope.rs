//! The view every declaration lambda gets of its container.
//!
//! A [`LayoutScope`] is a cheap, copyable handle over the container's
//! children, its own geometry, and its configuration. Every accessor pulls
//! the requested value through the solver graph on demand; repeated calls
//! within a pass hit the memoized result.
//!
//! Accessors are `#[track_caller]`: when a dependency cycle unwinds through
//! one, the caller's source location is added to the cycle's trace.

use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU32, Ordering};

use tether_core::geometry::{LayoutDirection, Rect};
use tether_core::scalar::{XInt, YInt};
use tether_core::units::Density;

use crate::config::LayoutConfig;
use crate::error::{LayoutError, TraceFrame};
use crate::measure::{Measurable, Visibility};
use crate::parent::{ParentGeometry, ParentScope};
use crate::spec::{LayoutSpec, PreferredAxis, SolveCx};

static NEXT_CONTAINER: AtomicU32 = AtomicU32::new(0);

/// Identity of one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(u32);

impl ContainerId {
    pub(crate) fn next() -> Self {
        Self(NEXT_CONTAINER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

/// Handle to a child box. Only valid with the container that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxId {
    container: ContainerId,
    index: u32,
}

impl BoxId {
    pub(crate) const fn new(container: ContainerId, index: u32) -> Self {
        Self { container, index }
    }

    /// The issuing container.
    #[must_use]
    pub const fn container(self) -> ContainerId {
        self.container
    }

    /// Insertion index within the issuing container.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "box#{}", self.index)
    }
}

/// Child storage as seen by the solver.
pub(crate) trait ChildLookup {
    /// The box's geometry and measurer.
    ///
    /// Foreign or removed ids fail with `IllegalReference`; children without
    /// an applied layout fail with `NotAttached`.
    fn entry(&self, id: BoxId) -> Result<(&LayoutSpec, &dyn Measurable), LayoutError>;

    /// Live children in insertion order.
    fn child_ids(&self) -> Vec<BoxId>;
}

/// Layout context handed to every declaration lambda.
#[derive(Clone, Copy)]
pub struct LayoutScope<'a> {
    children: &'a dyn ChildLookup,
    geometry: &'a ParentGeometry,
    config: &'a LayoutConfig,
}

impl fmt::Debug for LayoutScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutScope")
            .field("children", &self.children.child_ids().len())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> LayoutScope<'a> {
    pub(crate) fn new(
        children: &'a dyn ChildLookup,
        geometry: &'a ParentGeometry,
        config: &'a LayoutConfig,
    ) -> Self {
        Self {
            children,
            geometry,
            config,
        }
    }

    /// The containing box.
    #[must_use]
    pub fn parent(&self) -> ParentScope<'a> {
        ParentScope::new(*self)
    }

    // ── Horizontal ──────────────────────────────────────────────────────

    /// Left edge of `id`.
    #[track_caller]
    pub fn left(&self, id: BoxId) -> Result<XInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "left", caller, |cx| cx.spec().x().min(cx))
            .map(XInt)
    }

    /// Right edge of `id`.
    #[track_caller]
    pub fn right(&self, id: BoxId) -> Result<XInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "right", caller, |cx| cx.spec().x().max(cx))
            .map(XInt)
    }

    /// Horizontal center of `id`.
    #[track_caller]
    pub fn center_x(&self, id: BoxId) -> Result<XInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "center_x", caller, |cx| cx.spec().x().mid(cx))
            .map(XInt)
    }

    /// Width of `id`.
    #[track_caller]
    pub fn width(&self, id: BoxId) -> Result<XInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "width", caller, |cx| cx.spec().x().range(cx))
            .map(XInt)
    }

    /// Width `id` reports with an unconstrained width and its own height
    /// spec. Not memoized.
    #[track_caller]
    pub fn preferred_width(&self, id: BoxId) -> Result<XInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "preferred_width", caller, |cx| {
            cx.preferred(PreferredAxis::Width).map(|m| m.width)
        })
        .map(XInt)
    }

    /// Leading edge of `id` for the configured direction.
    #[track_caller]
    pub fn start(&self, id: BoxId) -> Result<XInt, LayoutError> {
        match self.config.direction {
            LayoutDirection::Ltr => self.left(id),
            LayoutDirection::Rtl => self.right(id),
        }
    }

    /// Trailing edge of `id` for the configured direction.
    #[track_caller]
    pub fn end(&self, id: BoxId) -> Result<XInt, LayoutError> {
        match self.config.direction {
            LayoutDirection::Ltr => self.right(id),
            LayoutDirection::Rtl => self.left(id),
        }
    }

    // ── Vertical ────────────────────────────────────────────────────────

    /// Top edge of `id`.
    #[track_caller]
    pub fn top(&self, id: BoxId) -> Result<YInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "top", caller, |cx| cx.spec().y().min(cx))
            .map(YInt)
    }

    /// Bottom edge of `id`.
    #[track_caller]
    pub fn bottom(&self, id: BoxId) -> Result<YInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "bottom", caller, |cx| cx.spec().y().max(cx))
            .map(YInt)
    }

    /// Vertical center of `id`.
    #[track_caller]
    pub fn center_y(&self, id: BoxId) -> Result<YInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "center_y", caller, |cx| cx.spec().y().mid(cx))
            .map(YInt)
    }

    /// Text baseline of `id`, in container coordinates.
    #[track_caller]
    pub fn baseline(&self, id: BoxId) -> Result<YInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "baseline", caller, |cx| cx.spec().y().baseline(cx))
            .map(YInt)
    }

    /// Height of `id`.
    #[track_caller]
    pub fn height(&self, id: BoxId) -> Result<YInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "height", caller, |cx| cx.spec().y().range(cx))
            .map(YInt)
    }

    /// Height `id` reports with its own width spec and an unconstrained
    /// height. Not memoized.
    #[track_caller]
    pub fn preferred_height(&self, id: BoxId) -> Result<YInt, LayoutError> {
        let caller = Location::caller();
        self.query(id, "preferred_height", caller, |cx| {
            cx.preferred(PreferredAxis::Height).map(|m| m.height)
        })
        .map(YInt)
    }

    // ── Units & configuration ───────────────────────────────────────────

    /// Convert dips to pixels.
    #[must_use]
    pub fn dip(&self, value: i32) -> i32 {
        self.config.density.dip(value)
    }

    /// Convert dips to an x-axis pixel value.
    #[must_use]
    pub fn xdip(&self, value: i32) -> XInt {
        self.config.density.xdip(value)
    }

    /// Convert dips to a y-axis pixel value.
    #[must_use]
    pub fn ydip(&self, value: i32) -> YInt {
        self.config.density.ydip(value)
    }

    /// The configured density.
    #[must_use]
    pub fn density(&self) -> Density {
        self.config.density
    }

    /// The configured layout direction.
    #[must_use]
    pub fn direction(&self) -> LayoutDirection {
        self.config.direction
    }

    // ── Crate internals ─────────────────────────────────────────────────

    pub(crate) fn config(&self) -> &'a LayoutConfig {
        self.config
    }

    pub(crate) fn geometry(&self) -> &'a ParentGeometry {
        self.geometry
    }

    pub(crate) fn child_ids(&self) -> Vec<BoxId> {
        self.children.child_ids()
    }

    pub(crate) fn visibility(&self, id: BoxId) -> Result<Visibility, LayoutError> {
        let (_, node) = self.children.entry(id)?;
        Ok(node.visibility())
    }

    /// Measure `id` with its final specs and read back its rectangle.
    pub(crate) fn commit(&self, id: BoxId) -> Result<Rect, LayoutError> {
        let cx = self.cx(id)?;
        cx.measure_self()?;
        let (x, y) = (cx.spec().x(), cx.spec().y());
        Ok(Rect::from_ltrb(
            x.min(&cx)?,
            y.min(&cx)?,
            x.max(&cx)?,
            y.max(&cx)?,
        ))
    }

    pub(crate) fn cx(&self, id: BoxId) -> Result<SolveCx<'a>, LayoutError> {
        let (spec, node) = self.children.entry(id)?;
        Ok(SolveCx::new(*self, id, spec, node))
    }

    fn query(
        &self,
        id: BoxId,
        accessor: &'static str,
        caller: &'static Location<'static>,
        f: impl FnOnce(&SolveCx<'a>) -> Result<i32, LayoutError>,
    ) -> Result<i32, LayoutError> {
        let cx = self.cx(id)?;
        f(&cx).map_err(|err| {
            err.with_frame(TraceFrame {
                node: Some(id),
                accessor,
                caller,
            })
        })
    }
}
