//! A single lazily evaluated binding.
//!
//! A [`Constraint`] wraps one declaration lambda. It is resolved at most once
//! per pass and remembers the result until [`Constraint::clear`]. Re-entering
//! a constraint while its own lambda is still running is the only way a
//! dependency cycle can form, so that is where cycles are caught.

use std::cell::Cell;

use tether_core::{trace, warn};

use crate::error::{CircularReference, LayoutError};
use crate::measure::SizeMode;
use crate::scope::{BoxId, LayoutScope};

/// Type-erased declaration lambda, already reduced to raw pixels.
pub(crate) type Lambda = Box<dyn Fn(&LayoutScope<'_>) -> Result<i32, LayoutError>>;

/// Sets a flag for as long as it lives.
///
/// The flag is cleared on drop, so an error returned from inside the guarded
/// region still leaves the owner resolvable on the next pass.
pub(crate) struct ResolvingGuard<'a>(&'a Cell<bool>);

impl<'a> ResolvingGuard<'a> {
    /// Set `flag`, or return `None` if it was already set.
    pub(crate) fn enter(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for ResolvingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A memoized lambda with re-entrancy detection.
#[derive(Default)]
pub(crate) struct Constraint {
    lambda: Option<Lambda>,
    mode: SizeMode,
    value: Cell<Option<i32>>,
    resolving: Cell<bool>,
    owner: Cell<Option<BoxId>>,
}

impl Constraint {
    pub(crate) fn new(lambda: Lambda, mode: SizeMode) -> Self {
        Self {
            lambda: Some(lambda),
            mode,
            ..Self::default()
        }
    }

    pub(crate) fn mode(&self) -> SizeMode {
        self.mode
    }

    /// Bind to the box that owns this constraint.
    pub(crate) fn on_attach(&self, owner: BoxId) {
        self.owner.set(Some(owner));
    }

    /// Forget the memoized value.
    pub(crate) fn clear(&self) {
        self.value.set(None);
    }

    /// Resolve the lambda, or return the value memoized this pass.
    pub(crate) fn resolve(&self, scope: &LayoutScope<'_>) -> Result<i32, LayoutError> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let Some(owner) = self.owner.get() else {
            return Err(LayoutError::NotAttached { node: None });
        };
        let Some(lambda) = &self.lambda else {
            return Err(LayoutError::NotConfigured);
        };
        let Some(_guard) = ResolvingGuard::enter(&self.resolving) else {
            warn!(node = %owner, "circular reference detected");
            return Err(CircularReference::new(Some(owner)).into());
        };
        let value = lambda(scope)?;
        trace!(node = %owner, value, "constraint resolved");
        self.value.set(Some(value));
        Ok(value)
    }
}

/// Which point of a box a position constraint pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Anchor {
    Min,
    Mid,
    Baseline,
    Max,
}

/// A constraint that pins one anchor of a box.
pub(crate) struct PositionConstraint {
    pub(crate) anchor: Anchor,
    pub(crate) constraint: Constraint,
}

impl PositionConstraint {
    pub(crate) fn new(anchor: Anchor, lambda: Lambda, mode: SizeMode) -> Self {
        Self {
            anchor,
            constraint: Constraint::new(lambda, mode),
        }
    }
}
