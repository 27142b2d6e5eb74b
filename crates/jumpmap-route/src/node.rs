//! Map nodes: identity, category and footprint.

use std::fmt;
use std::hash::{Hash, Hasher};

use jumpmap_core::{CircleShape, Point, Shape};
use serde::{Deserialize, Serialize};

/// Footprint radius of every node. Small enough to be invisible at map scale,
/// but non-zero so a node sitting exactly on a quadrant boundary still
/// reaches a quadrant on each side of it.
pub const NODE_RADIUS: f64 = 1e-6;

/// Stable identity of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Category a node belongs to, such as an affiliation. Categories can be
/// excluded from routing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cat{}", self.0)
    }
}

/// A point of interest on the map.
///
/// Equality and hashing use only the id.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub category: CategoryId,
    shape: CircleShape,
}

impl Node {
    pub fn new(id: NodeId, category: CategoryId, pos: Point) -> Self {
        Self {
            id,
            category,
            shape: CircleShape::new(pos, NODE_RADIUS),
        }
    }

    /// Position on the map.
    #[inline]
    pub fn pos(&self) -> Point {
        self.shape.center
    }

    #[inline]
    pub fn shape(&self) -> CircleShape {
        self.shape
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Shape for Node {
    #[inline]
    fn center(&self) -> Point {
        self.shape.center
    }

    #[inline]
    fn radius(&self) -> f64 {
        self.shape.radius
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.id, self.category, self.pos())
    }
}
