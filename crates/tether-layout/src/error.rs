//! Errors raised while resolving a layout.
//!
//! Every variant is a programming or configuration mistake in the layout
//! declarations. None of them are retried: a failed pass is abandoned and the
//! error surfaces to whoever drove the container.

use std::fmt;
use std::panic::Location;

use crate::axis::AxisKind;
use crate::scope::BoxId;

/// Failure while resolving constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A constraint was queried that never had a lambda assigned.
    NotConfigured,
    /// A constraint or box was queried before its layout was applied.
    NotAttached {
        /// The box involved, when known.
        node: Option<BoxId>,
    },
    /// A box was queried through a container it does not belong to, or
    /// after it was removed.
    IllegalReference {
        /// The foreign or stale box id.
        node: BoxId,
    },
    /// A constraint was re-entered while it was being resolved.
    CircularReference(CircularReference),
    /// The container's own size was queried before it received available
    /// space.
    PrematureLayout {
        /// The axis whose size was requested.
        axis: AxisKind,
    },
}

impl LayoutError {
    /// Whether this error is a detected dependency cycle.
    #[must_use]
    pub fn is_circular(&self) -> bool {
        matches!(self, Self::CircularReference(_))
    }

    /// Append a trace frame if this error is a cycle; other errors pass
    /// through unchanged.
    pub(crate) fn with_frame(self, frame: TraceFrame) -> Self {
        match self {
            Self::CircularReference(mut cycle) => {
                cycle.trace.push(frame);
                Self::CircularReference(cycle)
            }
            other => other,
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "constraint queried without a configured lambda"),
            Self::NotAttached { node: Some(node) } => {
                write!(f, "{node} was queried before its layout was applied")
            }
            Self::NotAttached { node: None } => {
                write!(f, "constraint was queried before it was attached to a box")
            }
            Self::IllegalReference { node } => write!(
                f,
                "{node} is not a child of the container being resolved"
            ),
            Self::CircularReference(cycle) => cycle.fmt(f),
            Self::PrematureLayout { axis } => write!(
                f,
                "container {} was queried before the container was measured",
                axis.dimension()
            ),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::CircularReference(cycle) = self {
            return Some(cycle);
        }
        None
    }
}

impl From<CircularReference> for LayoutError {
    fn from(cycle: CircularReference) -> Self {
        Self::CircularReference(cycle)
    }
}

/// One step of a dependency chain that looped back on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceFrame {
    /// The box whose accessor was called, `None` for the container itself.
    pub node: Option<BoxId>,
    /// Accessor name, e.g. `"left"`.
    pub accessor: &'static str,
    /// Source location of the call.
    pub caller: &'static Location<'static>,
}

impl fmt::Display for TraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(node) => write!(f, "Calling {}() on {node}", self.accessor)?,
            None => write!(f, "Calling {}() on parent", self.accessor)?,
        }
        write!(
            f,
            " from: {}:{}:{}",
            self.caller.file(),
            self.caller.line(),
            self.caller.column()
        )
    }
}

/// A dependency cycle with the chain of accessor calls that formed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularReference {
    origin: Option<BoxId>,
    trace: Vec<TraceFrame>,
}

impl CircularReference {
    pub(crate) fn new(origin: Option<BoxId>) -> Self {
        Self {
            origin,
            trace: Vec::new(),
        }
    }

    /// The box whose constraint was re-entered.
    #[must_use]
    pub fn origin(&self) -> Option<BoxId> {
        self.origin
    }

    /// Accessor calls collected while the error unwound, innermost first.
    #[must_use]
    pub fn trace(&self) -> &[TraceFrame] {
        &self.trace
    }
}

impl fmt::Display for CircularReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            Some(origin) => write!(f, "circular reference detected while resolving {origin}")?,
            None => write!(f, "circular reference detected")?,
        }
        // Outermost call first so the chain reads in call order.
        for (i, frame) in self.trace.iter().rev().enumerate() {
            write!(f, "\n  {}) {frame}", i + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for CircularReference {}
