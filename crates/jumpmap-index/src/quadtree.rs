use std::collections::HashSet;
use std::hash::Hash;

use jumpmap_core::{Bounds, CircleShape, Point, Shape};

use crate::limits::IndexLimits;

/// One node of the quadtree. The root is simply a node at depth 0.
///
/// Either all four children exist or none do. Once a node has children its
/// own shape list stays empty; every shape lives in one or more leaves.
#[derive(Clone, Debug)]
pub struct SpatialNode<T> {
    bounds: Bounds,
    shapes: Vec<T>,
    children: Option<Box<[SpatialNode<T>; 4]>>,
    depth: usize,
    limits: IndexLimits,
}

impl<T> SpatialNode<T> {
    /// Create an empty root covering `bounds`.
    pub fn new(bounds: Bounds, limits: IndexLimits) -> Self {
        Self::with_depth(bounds, limits, 0)
    }

    fn with_depth(bounds: Bounds, limits: IndexLimits, depth: usize) -> Self {
        Self {
            bounds,
            shapes: Vec::new(),
            children: None,
            depth,
            limits,
        }
    }

    /// The rectangle this node partitions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Tree-wide split limits.
    #[inline]
    pub fn limits(&self) -> IndexLimits {
        self.limits
    }

    /// Level of this node, 0 for the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Shapes held directly by this node. Always empty for internal nodes.
    #[inline]
    pub fn shapes(&self) -> &[T] {
        &self.shapes
    }

    /// The four children, if this node has split.
    #[inline]
    pub fn children(&self) -> Option<&[SpatialNode<T>; 4]> {
        self.children.as_deref()
    }

    /// Deepest level reached anywhere below (and including) this node.
    pub fn max_depth_reached(&self) -> usize {
        match &self.children {
            Some(children) => children
                .iter()
                .map(SpatialNode::max_depth_reached)
                .max()
                .unwrap_or(self.depth),
            None => self.depth,
        }
    }

    /// Whether nothing is stored anywhere in the tree.
    pub fn is_empty(&self) -> bool {
        match &self.children {
            Some(children) => children.iter().all(SpatialNode::is_empty),
            None => self.shapes.is_empty(),
        }
    }

    /// Drop every shape and child, turning this node back into a fresh leaf.
    /// Bounds and limits are kept.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.children = None;
    }

    /// Replace the bounds of an empty root. Used when the extent of the next
    /// bulk load differs from the last one.
    pub fn reset(&mut self, bounds: Bounds) {
        self.clear();
        self.bounds = bounds;
    }

    /// Which quadrants of this node `shape` reaches, using the node's center
    /// against the shape's extent. A shape exactly on a dividing line with
    /// zero radius reaches neither side of that line.
    pub fn quadrants_of(&self, shape: &dyn Shape) -> [bool; 4] {
        let c = self.bounds.center;
        let p = shape.center();
        let r = shape.radius();

        let right = p.x + r > c.x;
        let left = p.x - r < c.x;
        let top = p.y + r > c.y;
        let bottom = p.y - r < c.y;

        [right && top, left && top, left && bottom, right && bottom]
    }
}

impl<T: Shape + Clone> SpatialNode<T> {
    /// Insert a shape, splitting this node if it overflows.
    pub fn insert(&mut self, shape: T) {
        if self.children.is_some() {
            self.insert_into_children(shape);
            return;
        }

        self.shapes.push(shape);
        if self.shapes.len() > self.limits.max_shapes && self.depth < self.limits.max_depth {
            self.split();
        }
    }

    fn split(&mut self) {
        debug_assert!(self.children.is_none(), "split called on an internal node");
        let depth = self.depth + 1;
        let (bounds, limits) = (self.bounds, self.limits);
        self.children = Some(Box::new(std::array::from_fn(|i| {
            SpatialNode::with_depth(bounds.quadrant(i), limits, depth)
        })));

        log::trace!(
            "split node at depth {} {} holding {} shapes",
            self.depth,
            self.bounds,
            self.shapes.len()
        );

        for shape in std::mem::take(&mut self.shapes) {
            self.insert_into_children(shape);
        }
    }

    fn insert_into_children(&mut self, shape: T) {
        let hits = self.quadrants_of(&shape);
        let Some(children) = self.children.as_deref_mut() else {
            return;
        };

        let Some(last) = hits.iter().rposition(|&hit| hit) else {
            log::debug!(
                "shape at {} reaches no quadrant of {}; dropped",
                shape.center(),
                self.bounds
            );
            return;
        };
        for q in 0..last {
            if hits[q] {
                children[q].insert(shape.clone());
            }
        }
        children[last].insert(shape);
    }
}

impl<T: Shape + Clone + Eq + Hash> SpatialNode<T> {
    /// Every stored shape intersecting `query`, each listed once, in the order
    /// the traversal first meets it.
    pub fn retrieve(&self, query: &dyn Shape) -> Vec<T> {
        self.retrieve_refs(query).into_iter().cloned().collect()
    }

    /// Borrowing form of [`retrieve`](Self::retrieve).
    pub fn retrieve_refs(&self, query: &dyn Shape) -> Vec<&T> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.collect(query, &mut seen, &mut out);
        out
    }

    /// Every stored shape intersecting the circle of `radius` around `point`.
    pub fn get_all_in_range(&self, point: Point, radius: f64) -> Vec<T> {
        self.retrieve(&CircleShape::new(point, radius))
    }

    /// Number of distinct shapes stored in the tree.
    pub fn len(&self) -> usize {
        let mut seen = HashSet::new();
        self.collect_all(&mut seen);
        seen.len()
    }

    fn collect<'a>(&'a self, query: &dyn Shape, seen: &mut HashSet<&'a T>, out: &mut Vec<&'a T>) {
        for shape in &self.shapes {
            if shape.intersects(query) && seen.insert(shape) {
                out.push(shape);
            }
        }

        if let Some(children) = self.children.as_deref() {
            let hits = self.quadrants_of(query);
            for (child, hit) in children.iter().zip(hits) {
                if hit {
                    child.collect(query, seen, out);
                }
            }
        }
    }

    fn collect_all<'a>(&'a self, seen: &mut HashSet<&'a T>) {
        seen.extend(self.shapes.iter());
        if let Some(children) = self.children.as_deref() {
            for child in children.iter() {
                child.collect_all(seen);
            }
        }
    }
}
