#![forbid(unsafe_code)]

//! Core: geometry, axis-tagged scalars, unit conversion, and the logging
//! facade shared by the tether layout crates.

pub mod geometry;
pub mod logging;
pub mod scalar;
pub mod units;

pub use geometry::{LayoutDirection, Rect, Sides, Size};
pub use scalar::{XFloat, XInt, YFloat, YInt};
pub use units::Density;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
