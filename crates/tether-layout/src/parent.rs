//! The container's own geometry, the root of every dependency chain.
//!
//! Width and height are each backed by a [`SizeConfig`]: the space offered by
//! the container's own parent plus a strategy for turning it into a size.
//! Edges are padding-adjusted, so `left` is the left padding and `right` is
//! the width less the right padding.

use std::cell::Cell;
use std::fmt;
use std::panic::Location;

use tether_core::geometry::{LayoutDirection, Sides, Size};
use tether_core::scalar::{XInt, YInt};
use tether_core::{trace, warn};

use crate::axis::AxisKind;
use crate::constraint::ResolvingGuard;
use crate::error::{CircularReference, LayoutError, TraceFrame};
use crate::scope::LayoutScope;

/// Custom container size strategy: `(scope, available) -> size`.
pub(crate) type SizeLambda = Box<dyn Fn(&LayoutScope<'_>, i32) -> Result<i32, LayoutError>>;

/// How one container dimension is derived from the space it was offered.
pub(crate) enum SizeStrategy {
    /// Take everything offered.
    MatchParent,
    /// Fit the participating children plus padding.
    WrapContent,
    Custom(SizeLambda),
}

impl fmt::Debug for SizeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchParent => f.write_str("MatchParent"),
            Self::WrapContent => f.write_str("WrapContent"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One container dimension.
#[derive(Debug)]
pub(crate) struct SizeConfig {
    axis: AxisKind,
    available: Cell<Option<i32>>,
    result: Cell<Option<i32>>,
    resolving: Cell<bool>,
    strategy: SizeStrategy,
}

impl SizeConfig {
    fn new(axis: AxisKind) -> Self {
        Self {
            axis,
            available: Cell::new(None),
            result: Cell::new(None),
            resolving: Cell::new(false),
            strategy: SizeStrategy::MatchParent,
        }
    }

    pub(crate) fn set_strategy(&mut self, strategy: SizeStrategy) {
        self.strategy = strategy;
        self.result.set(None);
    }

    fn set_available(&self, available: i32) {
        self.available.set(Some(available));
    }

    fn clear(&self) {
        self.result.set(None);
    }

    fn resolve(&self, scope: &LayoutScope<'_>) -> Result<i32, LayoutError> {
        if let Some(value) = self.result.get() {
            return Ok(value);
        }
        let Some(available) = self.available.get() else {
            return Err(LayoutError::PrematureLayout { axis: self.axis });
        };
        let Some(_guard) = ResolvingGuard::enter(&self.resolving) else {
            warn!(axis = %self.axis, "circular reference through container size");
            return Err(CircularReference::new(None).into());
        };
        let value = match &self.strategy {
            SizeStrategy::MatchParent => available,
            SizeStrategy::WrapContent => wrap_content(scope, self.axis)?,
            SizeStrategy::Custom(lambda) => lambda(scope, available)?,
        };
        trace!(axis = %self.axis, available, value, "container size resolved");
        self.result.set(Some(value));
        Ok(value)
    }
}

/// Far edge of the furthest participating child plus padding.
fn wrap_content(scope: &LayoutScope<'_>, axis: AxisKind) -> Result<i32, LayoutError> {
    let padding = scope.config().padding;
    let (near, far) = match axis {
        AxisKind::Horizontal => (padding.left, padding.right),
        AxisKind::Vertical => (padding.top, padding.bottom),
    };
    let mut extent = None;
    for id in scope.child_ids() {
        if !scope.visibility(id)?.is_participating() {
            continue;
        }
        let edge = match axis {
            AxisKind::Horizontal => scope.right(id)?.value(),
            AxisKind::Vertical => scope.bottom(id)?.value(),
        };
        let candidate = edge.max(near) + far;
        extent = Some(extent.map_or(candidate, |current: i32| current.max(candidate)));
    }
    Ok(extent.unwrap_or(near + far))
}

/// Width and height of the container.
#[derive(Debug)]
pub(crate) struct ParentGeometry {
    pub(crate) width: SizeConfig,
    pub(crate) height: SizeConfig,
}

impl ParentGeometry {
    pub(crate) fn new() -> Self {
        Self {
            width: SizeConfig::new(AxisKind::Horizontal),
            height: SizeConfig::new(AxisKind::Vertical),
        }
    }

    pub(crate) fn set_available(&self, available: Size) {
        self.width.set_available(available.width);
        self.height.set_available(available.height);
    }

    pub(crate) fn clear(&self) {
        self.width.clear();
        self.height.clear();
    }

    fn config(&self, axis: AxisKind) -> &SizeConfig {
        match axis {
            AxisKind::Horizontal => &self.width,
            AxisKind::Vertical => &self.height,
        }
    }
}

/// The containing box, as seen from a declaration lambda.
#[derive(Debug, Clone, Copy)]
pub struct ParentScope<'a> {
    scope: LayoutScope<'a>,
}

impl<'a> ParentScope<'a> {
    pub(crate) fn new(scope: LayoutScope<'a>) -> Self {
        Self { scope }
    }

    fn size(
        &self,
        axis: AxisKind,
        accessor: &'static str,
        caller: &'static Location<'static>,
    ) -> Result<i32, LayoutError> {
        self.scope
            .geometry()
            .config(axis)
            .resolve(&self.scope)
            .map_err(|err| {
                err.with_frame(TraceFrame {
                    node: None,
                    accessor,
                    caller,
                })
            })
    }

    /// The container's padding.
    #[must_use]
    pub fn padding(&self) -> Sides {
        self.scope.config().padding
    }

    /// Resolved container width.
    #[track_caller]
    pub fn width(&self) -> Result<XInt, LayoutError> {
        let caller = Location::caller();
        self.size(AxisKind::Horizontal, "width", caller).map(XInt)
    }

    /// Resolved container height.
    #[track_caller]
    pub fn height(&self) -> Result<YInt, LayoutError> {
        let caller = Location::caller();
        self.size(AxisKind::Vertical, "height", caller).map(YInt)
    }

    /// Inner left edge.
    pub fn left(&self) -> Result<XInt, LayoutError> {
        Ok(XInt(self.padding().left))
    }

    /// Inner right edge.
    #[track_caller]
    pub fn right(&self) -> Result<XInt, LayoutError> {
        let caller = Location::caller();
        let width = self.size(AxisKind::Horizontal, "right", caller)?;
        Ok(XInt(width - self.padding().right))
    }

    /// Inner top edge.
    pub fn top(&self) -> Result<YInt, LayoutError> {
        Ok(YInt(self.padding().top))
    }

    /// Inner bottom edge.
    #[track_caller]
    pub fn bottom(&self) -> Result<YInt, LayoutError> {
        let caller = Location::caller();
        let height = self.size(AxisKind::Vertical, "bottom", caller)?;
        Ok(YInt(height - self.padding().bottom))
    }

    /// Horizontal center of the full width.
    #[track_caller]
    pub fn center_x(&self) -> Result<XInt, LayoutError> {
        let caller = Location::caller();
        self.size(AxisKind::Horizontal, "center_x", caller)
            .map(|width| XInt(width / 2))
    }

    /// Vertical center of the full height.
    #[track_caller]
    pub fn center_y(&self) -> Result<YInt, LayoutError> {
        let caller = Location::caller();
        self.size(AxisKind::Vertical, "center_y", caller)
            .map(|height| YInt(height / 2))
    }

    /// Inner leading edge for the configured direction.
    #[track_caller]
    pub fn start(&self) -> Result<XInt, LayoutError> {
        match self.scope.direction() {
            LayoutDirection::Ltr => self.left(),
            LayoutDirection::Rtl => self.right(),
        }
    }

    /// Inner trailing edge for the configured direction.
    #[track_caller]
    pub fn end(&self) -> Result<XInt, LayoutError> {
        match self.scope.direction() {
            LayoutDirection::Ltr => self.right(),
            LayoutDirection::Rtl => self.left(),
        }
    }
}
