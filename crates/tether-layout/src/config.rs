//! Container configuration.

use tether_core::geometry::{LayoutDirection, Sides};
use tether_core::units::Density;

/// Settings a container hands to every declaration through its scope.
///
/// # Example
///
/// ```
/// use tether_core::{Density, LayoutDirection, Sides};
/// use tether_layout::LayoutConfig;
///
/// let config = LayoutConfig::new()
///     .padding(Sides::new(1, 2, 4, 8))
///     .density(Density::new(2.0))
///     .direction(LayoutDirection::Rtl);
/// assert_eq!(config.padding.horizontal_sum(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutConfig {
    /// Insets applied to the container's edges.
    pub padding: Sides,
    /// Dip conversion factor.
    pub density: Density,
    /// Which edge `start`/`end` refer to.
    pub direction: LayoutDirection,
}

impl LayoutConfig {
    /// Default configuration: no padding, identity density, left-to-right.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the density.
    #[must_use]
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Set the layout direction.
    #[must_use]
    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }
}
