/// Tree-wide constants shared by every node of a [`SpatialNode`](crate::SpatialNode).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexLimits {
    /// A leaf holding more shapes than this splits, unless it is already at
    /// `max_depth`.
    pub max_shapes: usize,
    /// Deepest level a node may have. The root is level 0.
    pub max_depth: usize,
}

impl IndexLimits {
    pub const fn new(max_shapes: usize, max_depth: usize) -> Self {
        Self {
            max_shapes,
            max_depth,
        }
    }
}

impl Default for IndexLimits {
    fn default() -> Self {
        Self {
            max_shapes: 10,
            max_depth: 8,
        }
    }
}
