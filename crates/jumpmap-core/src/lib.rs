//! **jumpmap-core**: planar geometry primitives shared by the *jumpmap*
//! crates.
//!
//! This crate provides the floating-point [`Point`], the axis-aligned
//! [`Bounds`] used to partition space, and the [`Shape`] capability trait
//! together with its plain implementation, [`CircleShape`].

pub mod geom;
pub mod shape;

pub use geom::{Bounds, Point};
pub use shape::{CircleShape, Shape};
