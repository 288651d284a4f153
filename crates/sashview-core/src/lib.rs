#![forbid(unsafe_code)]

//! Primitives shared by the sashview split-view engine.
//!
//! This crate is deliberately small: it holds the axis/geometry vocabulary
//! ([`Orientation`], [`Rect`], [`PointerPosition`]), the per-view size
//! constraints ([`SizeConstraints`], [`Priority`]) and the insertion sizing
//! strategies ([`Sizing`]) consumed by the engine crate. Nothing in here
//! owns views or mutates layout state.

pub mod constraints;
pub mod geometry;
pub mod sizing;

pub use constraints::{ConstraintError, Priority, SizeConstraints};
pub use geometry::{Orientation, PointerPosition, Rect};
pub use sizing::Sizing;
