use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Node identity. Searches key their maps by it.
    type Node: Copy + Eq + Hash;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before
    /// calling. May be expensive; a search calls it once per expansion.
    ///
    /// The best-first searches reopen a node already expanded when a path
    /// with fewer hops to it turns up, so the same node can be asked more
    /// than once. Bidirectional BFS asks at most once per node.
    fn neighbors(&self, node: Self::Node, buf: &mut Vec<Self::Node>);
}

/// Pather with a distance estimate between nodes.
pub trait EstimatePather: Pather {
    /// Non-negative estimate of the distance from `from` to `to`.
    ///
    /// The searches count cost in hops, so this need not be admissible.
    fn estimate(&self, from: Self::Node, to: Self::Node) -> f64;
}

/// A pather built from two closures: one returning the neighbors of a node,
/// one estimating the distance between two nodes.
pub struct FnPather<N, F, H> {
    neighbors: F,
    estimate: H,
    _node: PhantomData<fn(N) -> N>,
}

impl<N, F, H> FnPather<N, F, H>
where
    F: Fn(N) -> Vec<N>,
    H: Fn(N, N) -> f64,
{
    pub fn new(neighbors: F, estimate: H) -> Self {
        Self {
            neighbors,
            estimate,
            _node: PhantomData,
        }
    }
}

impl<N, F> FnPather<N, F, fn(N, N) -> f64>
where
    F: Fn(N) -> Vec<N>,
{
    /// A pather whose estimate is always zero.
    pub fn unweighted(neighbors: F) -> Self {
        Self::new(neighbors, |_, _| 0.0)
    }
}

impl<N, F, H> Pather for FnPather<N, F, H>
where
    N: Copy + Eq + Hash,
    F: Fn(N) -> Vec<N>,
{
    type Node = N;

    fn neighbors(&self, node: N, buf: &mut Vec<N>) {
        buf.extend((self.neighbors)(node));
    }
}

impl<N, F, H> EstimatePather for FnPather<N, F, H>
where
    N: Copy + Eq + Hash,
    F: Fn(N) -> Vec<N>,
    H: Fn(N, N) -> f64,
{
    fn estimate(&self, from: N, to: N) -> f64 {
        (self.estimate)(from, to)
    }
}

impl<N, F, H> fmt::Debug for FnPather<N, F, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPather").finish_non_exhaustive()
    }
}
