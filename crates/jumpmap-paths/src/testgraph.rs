//! Random geometric graphs for exercising the searches.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use jumpmap_core::Point;
use rand::rngs::StdRng;
use rand::RngExt;

use crate::distance::euclidean;
use crate::traits::{EstimatePather, Pather};

/// Undirected graph over `0..n` with explicit adjacency. Records how often
/// each node's neighbors were requested.
pub(crate) struct Graph {
    pos: Vec<Point>,
    adj: Vec<Vec<u32>>,
    use_estimate: bool,
    calls: RefCell<HashMap<u32, usize>>,
}

impl Graph {
    /// Build a graph from an edge list.
    pub(crate) fn from_edges(n: usize, edges: &[(u32, u32)]) -> Self {
        let mut adj = vec![Vec::new(); n];
        for &(a, b) in edges {
            adj[a as usize].push(b);
            adj[b as usize].push(a);
        }
        Self {
            pos: (0..n).map(|i| Point::new(i as f64, 0.0)).collect(),
            adj,
            use_estimate: true,
            calls: RefCell::new(HashMap::new()),
        }
    }

    /// `n` random points in a `size` square, joined when within `radius`.
    pub(crate) fn random_geometric(rng: &mut StdRng, n: usize, size: f64, radius: f64) -> Self {
        let pos: Vec<Point> = (0..n)
            .map(|_| Point::new(rng.random_range(0.0..size), rng.random_range(0.0..size)))
            .collect();
        let mut adj = vec![Vec::new(); n];
        for a in 0..n {
            for b in 0..n {
                if a != b && pos[a].distance(pos[b]) <= radius {
                    adj[a].push(b as u32);
                }
            }
        }
        Self {
            pos,
            adj,
            use_estimate: true,
            calls: RefCell::new(HashMap::new()),
        }
    }

    /// Same graph, estimating every distance as zero.
    pub(crate) fn without_estimate(mut self) -> Self {
        self.use_estimate = false;
        self
    }

    pub(crate) fn adjacent(&self, a: u32, b: u32) -> bool {
        self.adj[a as usize].contains(&b)
    }

    /// Exact hop distance by plain BFS.
    pub(crate) fn hops(&self, from: u32, to: u32) -> Option<usize> {
        let mut dist = vec![usize::MAX; self.adj.len()];
        let mut queue = VecDeque::from([from]);
        dist[from as usize] = 0;
        while let Some(c) = queue.pop_front() {
            if c == to {
                return Some(dist[c as usize]);
            }
            for &n in &self.adj[c as usize] {
                if dist[n as usize] == usize::MAX {
                    dist[n as usize] = dist[c as usize] + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    pub(crate) fn connected(&self, a: u32, b: u32) -> bool {
        self.hops(a, b).is_some()
    }

    /// Largest number of times any single node was expanded.
    pub(crate) fn max_calls_per_node(&self) -> usize {
        self.calls.borrow().values().copied().max().unwrap_or(0)
    }

    pub(crate) fn calls_for(&self, node: u32) -> usize {
        self.calls.borrow().get(&node).copied().unwrap_or(0)
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl Pather for Graph {
    type Node = u32;

    fn neighbors(&self, node: u32, buf: &mut Vec<u32>) {
        *self.calls.borrow_mut().entry(node).or_default() += 1;
        buf.extend_from_slice(&self.adj[node as usize]);
    }
}

impl EstimatePather for Graph {
    fn estimate(&self, from: u32, to: u32) -> f64 {
        if self.use_estimate {
            euclidean(self.pos[from as usize], self.pos[to as usize])
        } else {
            0.0
        }
    }
}

/// Check that `path` runs from `start` to `goal` along edges of `g`.
pub(crate) fn assert_valid_path(g: &Graph, path: &[u32], start: u32, goal: u32) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        assert!(g.adjacent(w[0], w[1]), "{} -> {} is not an edge", w[0], w[1]);
    }
}
