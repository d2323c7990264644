//! The measurement collaborator.
//!
//! The solver never knows what a box contains. When it needs a box's extent
//! it hands the box a [`MeasureSpec`] per axis and reads back a [`Measured`].

/// How a declared size is offered to the box being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeMode {
    /// The box gets exactly this size.
    #[default]
    Exact,
    /// The box may use up to this size.
    AtMost,
}

impl SizeMode {
    /// Build a spec in this mode. Negative sizes clamp to zero.
    #[must_use]
    pub fn spec(self, size: i32) -> MeasureSpec {
        let size = size.max(0);
        match self {
            Self::Exact => MeasureSpec::Exact(size),
            Self::AtMost => MeasureSpec::AtMost(size),
        }
    }
}

/// Sizing directive for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasureSpec {
    /// Report exactly this size.
    Exact(i32),
    /// Report a natural size no larger than this.
    AtMost(i32),
    /// Report the natural size.
    #[default]
    Unconstrained,
}

impl MeasureSpec {
    /// Resolve a natural size against this spec.
    ///
    /// Convenience for measurers that only know their natural size.
    #[must_use]
    pub fn apply(self, natural: i32) -> i32 {
        match self {
            Self::Exact(size) => size,
            Self::AtMost(size) => natural.min(size),
            Self::Unconstrained => natural,
        }
    }

    /// The size carried by the spec, if any.
    #[must_use]
    pub fn size(self) -> Option<i32> {
        match self {
            Self::Exact(size) | Self::AtMost(size) => Some(size),
            Self::Unconstrained => None,
        }
    }
}

/// What a box reported when measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Measured {
    pub width: i32,
    pub height: i32,
    /// Text baseline offset from the top edge, 0 when not applicable.
    pub baseline: i32,
}

impl Measured {
    /// A measurement without a baseline.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            baseline: 0,
        }
    }

    /// Set the baseline.
    #[must_use]
    pub const fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = baseline;
        self
    }
}

/// Whether a box takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Measured, placed, and drawn.
    #[default]
    Visible,
    /// Measured and placed but not drawn; still occupies space.
    Invisible,
    /// Not measured or placed; resolves to zero size.
    Gone,
}

impl Visibility {
    /// Whether the box is measured and committed.
    #[must_use]
    pub const fn is_participating(self) -> bool {
        !matches!(self, Self::Gone)
    }
}

/// A box the solver can measure.
pub trait Measurable {
    /// Report this box's size under the given specs.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Measured;

    /// Current visibility.
    fn visibility(&self) -> Visibility {
        Visibility::Visible
    }
}

impl<F> Measurable for F
where
    F: Fn(MeasureSpec, MeasureSpec) -> Measured,
{
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Measured {
        self(width, height)
    }
}
