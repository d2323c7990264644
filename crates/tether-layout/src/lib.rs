#![forbid(unsafe_code)]

//! Lazy, pull-based constraint resolution for two-dimensional box layout.
//!
//! Every child of a [`Container`] declares where its edges go on each axis,
//! in terms of the container's edges or other children's resolved edges.
//! Nothing is computed up front: asking for a value pulls exactly the
//! declarations it depends on, memoizes them for the pass, and reports a
//! [`CircularReference`] if the chain loops back on itself.
//!
//! - [`dsl`] - declaration builders (`left_to`, `width_of`, `max_of`, ...)
//! - [`Container`] - owns the children and drives measure/layout passes
//! - [`LayoutScope`] - what a declaration lambda sees
//! - [`Measurable`] - the host's measurement capability
//!
//! # Example
//!
//! ```
//! use tether_core::{Size, XInt};
//! use tether_layout::dsl::{left_to, top_to};
//! use tether_layout::{Container, LayoutConfig, MeasureSpec, Measured};
//!
//! let mut container = Container::new(LayoutConfig::new());
//! let node = |w: MeasureSpec, h: MeasureSpec| Measured::new(w.apply(20), h.apply(20));
//! let a = container.add_child(node);
//! let b = container.add_child(node);
//! container
//!     .apply_layout(a, left_to(|_| Ok(XInt(10))), top_to(|s| s.parent().top()))
//!     .unwrap();
//! container
//!     .apply_layout(
//!         b,
//!         left_to(move |s| Ok(s.right(a)? + 5)).width_of(move |s| s.width(a)),
//!         top_to(move |s| s.bottom(a)),
//!     )
//!     .unwrap();
//!
//! container.measure(Size::new(100, 100)).unwrap();
//! assert_eq!(container.rect(b).unwrap().x, 35);
//! assert_eq!(container.rect(b).unwrap().y, 20);
//! ```

pub mod axis;
pub mod config;
pub mod container;
pub mod dsl;
pub mod error;
pub mod measure;
pub mod parent;
pub mod scope;

mod constraint;
mod solver;
mod spec;

pub use axis::{Axis, AxisKind, AxisValue, Horizontal, Vertical};
pub use config::LayoutConfig;
pub use container::{Container, ContainerState, Initializer};
pub use error::{CircularReference, LayoutError, TraceFrame};
pub use measure::{MeasureSpec, Measurable, Measured, SizeMode, Visibility};
pub use parent::ParentScope;
pub use scope::{BoxId, ContainerId, LayoutScope};
pub use solver::Solver;
