//! Route planning between map nodes.
//!
//! A [`StarMap`] holds the node catalog and a spatial index over it. A
//! [`RoutePlanner`] owns the ordered waypoint list and the set of excluded
//! categories, and on [`calculate_route`](RoutePlanner::calculate_route)
//! searches each consecutive waypoint pair independently. Two nodes are one
//! jump apart when they lie within the jump range of each other and neither
//! is excluded (the endpoints of a segment never are).
//!
//! Each segment produces a [`RoutePoint`]. An unreachable segment is recorded
//! with [`Jumps::Infinite`] and does not stop later segments.

pub mod config;
pub mod map;
pub mod node;
pub mod planner;
pub mod route;

pub use config::{ConfigError, IndexConfig, RouteConfig};
pub use map::StarMap;
pub use node::{CategoryId, NODE_RADIUS, Node, NodeId};
pub use planner::RoutePlanner;
pub use route::{Jumps, RoutePoint};
