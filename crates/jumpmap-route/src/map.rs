//! The node catalog and its spatial index.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use jumpmap_core::{Bounds, Point, Shape};
use jumpmap_index::SpatialNode;

use crate::config::IndexConfig;
use crate::node::{Node, NodeId};

/// Root extent used when nothing better is known: no configured bounds and no
/// nodes to fit.
const FALLBACK_BOUNDS: Bounds = Bounds::new(Point::ZERO, 1.0, 1.0);

/// All nodes of a map, looked up by id or by position.
#[derive(Clone, Debug)]
pub struct StarMap {
    index: SpatialNode<Node>,
    nodes: HashMap<NodeId, Node>,
    config: IndexConfig,
}

impl StarMap {
    /// An empty map.
    pub fn new(config: IndexConfig) -> Self {
        let bounds = config.bounds.unwrap_or(FALLBACK_BOUNDS);
        Self {
            index: SpatialNode::new(bounds, config.limits),
            nodes: HashMap::new(),
            config,
        }
    }

    /// A map holding `nodes`.
    pub fn from_nodes(config: IndexConfig, nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut map = Self::new(config);
        map.rebuild(nodes);
        map
    }

    /// Replace the whole catalog with `nodes` and rebuild the index. Unless
    /// bounds are configured, the root is fitted to the new node set.
    pub fn rebuild(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.nodes.clear();
        let mut fresh = Vec::new();
        for node in nodes {
            match self.nodes.entry(node.id) {
                Entry::Occupied(_) => {
                    log::warn!("duplicate node {}; keeping the first", node.id);
                }
                Entry::Vacant(slot) => {
                    slot.insert(node);
                    fresh.push(node);
                }
            }
        }

        let bounds = self
            .config
            .bounds
            .or_else(|| Bounds::enclosing(fresh.iter().map(Node::pos)))
            .unwrap_or(FALLBACK_BOUNDS);
        self.index.reset(bounds);
        for node in fresh {
            self.index.insert(node);
        }

        log::info!(
            "indexed {} nodes in {}, depth {}",
            self.nodes.len(),
            bounds,
            self.index.max_depth_reached()
        );
    }

    /// Add one node. Returns `false`, leaving the map unchanged, if a node
    /// with the same id is already present.
    pub fn insert(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id) {
            log::warn!("node {} already on the map", node.id);
            return false;
        }
        self.nodes.insert(node.id, node);
        self.index.insert(node);
        true
    }

    /// Remove every node. The root extent is kept until the next rebuild.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Current extent of the index root.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.index.bounds()
    }

    #[inline]
    pub fn index(&self) -> &SpatialNode<Node> {
        &self.index
    }

    #[inline]
    pub fn index_config(&self) -> &IndexConfig {
        &self.config
    }

    /// Nodes whose footprint intersects `query`.
    pub fn retrieve(&self, query: &dyn Shape) -> Vec<Node> {
        self.index.retrieve(query)
    }

    /// Nodes whose footprint intersects the circle of `radius` around
    /// `point`.
    pub fn get_all_in_range(&self, point: Point, radius: f64) -> Vec<Node> {
        self.index.get_all_in_range(point, radius)
    }
}

impl Default for StarMap {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::CategoryId;
    use jumpmap_core::CircleShape;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn node(id: u32, x: f64, y: f64) -> Node {
        Node::new(NodeId(id), CategoryId(0), Point::new(x, y))
    }

    fn sorted_ids(nodes: &[Node]) -> Vec<u32> {
        let mut ids: Vec<u32> = nodes.iter().map(|n| n.id.0).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn empty_map() {
        let map = StarMap::default();
        assert!(map.is_empty());
        assert_eq!(map.bounds(), FALLBACK_BOUNDS);
        assert!(map.get_all_in_range(Point::ZERO, 100.0).is_empty());
    }

    #[test]
    fn fits_bounds_to_nodes() {
        let map = StarMap::from_nodes(
            IndexConfig::default(),
            [node(1, -10.0, 0.0), node(2, 30.0, 20.0), node(3, 0.0, -5.0)],
        );
        assert_eq!(map.len(), 3);
        let b = map.bounds();
        assert_eq!(b.min(), Point::new(-10.0, -5.0));
        assert_eq!(b.max(), Point::new(30.0, 20.0));
    }

    #[test]
    fn keeps_configured_bounds() {
        let fixed = Bounds::new(Point::ZERO, 1000.0, 1000.0);
        let config = IndexConfig {
            bounds: Some(fixed),
            ..IndexConfig::default()
        };
        let map = StarMap::from_nodes(config, [node(1, 1.0, 1.0)]);
        assert_eq!(map.bounds(), fixed);
    }

    #[test]
    fn duplicate_ids_keep_the_first() {
        let map = StarMap::from_nodes(
            IndexConfig::default(),
            [node(1, 0.0, 0.0), node(1, 50.0, 50.0), node(2, 10.0, 10.0)],
        );
        assert_eq!(map.len(), 2);
        assert_eq!(map.node(NodeId(1)).unwrap().pos(), Point::ZERO);
        assert_eq!(map.index().len(), 2);
        assert!(map.get_all_in_range(Point::new(50.0, 50.0), 1.0).is_empty());
    }

    #[test]
    fn insert_rejects_known_ids() {
        let mut map = StarMap::from_nodes(IndexConfig::default(), [node(1, 0.0, 0.0)]);
        assert!(map.insert(node(2, 0.5, 0.5)));
        assert!(!map.insert(node(2, 9.0, 9.0)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.node(NodeId(2)).unwrap().pos(), Point::new(0.5, 0.5));
    }

    #[test]
    fn clear_then_rebuild() {
        let mut map = StarMap::from_nodes(IndexConfig::default(), [node(1, 0.0, 0.0)]);
        map.clear();
        assert!(map.is_empty());
        assert!(map.index().is_empty());
        assert!(map.node(NodeId(1)).is_none());

        map.rebuild([node(5, 3.0, 4.0), node(6, -3.0, -4.0)]);
        assert_eq!(sorted_ids(&map.get_all_in_range(Point::ZERO, 5.0)), vec![5, 6]);
    }

    #[test]
    fn range_queries_match_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        let nodes: Vec<Node> = (0..2000)
            .map(|i| node(i, rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0)))
            .collect();
        let map = StarMap::from_nodes(IndexConfig::default(), nodes.iter().copied());
        assert!(map.index().max_depth_reached() > 0);

        for _ in 0..50 {
            let center = Point::new(rng.random_range(-500.0..500.0), rng.random_range(-500.0..500.0));
            let radius = rng.random_range(1.0..80.0);
            let query = CircleShape::new(center, radius);
            let expected: Vec<Node> = nodes
                .iter()
                .copied()
                .filter(|n| n.intersects(&query))
                .collect();
            assert_eq!(
                sorted_ids(&map.get_all_in_range(center, radius)),
                sorted_ids(&expected)
            );
            assert_eq!(sorted_ids(&map.retrieve(&query)), sorted_ids(&expected));
        }
    }
}
