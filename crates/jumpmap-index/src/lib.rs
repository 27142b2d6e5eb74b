//! Spatial index for circular shapes on the plane.
//!
//! [`SpatialNode`] is a recursive quadrant-partitioning tree (a quadtree).
//! Shapes live in leaves; a leaf that grows past
//! [`IndexLimits::max_shapes`] splits into four children until
//! [`IndexLimits::max_depth`] is reached. A shape straddling a split
//! boundary is stored in every quadrant it reaches, and
//! [`retrieve`](SpatialNode::retrieve) deduplicates by identity.
//!
//! The index is meant to be rebuilt wholesale: [`clear`](SpatialNode::clear)
//! and re-insert whenever the underlying set changes.

mod limits;
mod quadtree;

pub use limits::IndexLimits;
pub use quadtree::SpatialNode;
