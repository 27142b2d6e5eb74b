//! Path searches over implicit graphs.
//!
//! The graph is never materialised: a [`Pather`] enumerates the neighbors of
//! one node at a time, and an [`EstimatePather`] adds a distance estimate
//! between two nodes. Three interchangeable strategies implement
//! [`SearchStrategy`]:
//!
//! - **Best-first** ([`BestFirst`]): a single frontier ordered by hop count
//!   plus estimate.
//! - **Bidirectional best-first** ([`BidirectionalBestFirst`]): one best-first
//!   frontier from each end, expanding whichever side has the cheaper top.
//! - **Bidirectional BFS** ([`BidirectionalBfs`]): alternating full layers
//!   from each end, ignoring the estimate.
//!
//! [`Strategy`] wraps them for runtime selection by [`StrategyKind`]. Every
//! search returns `None` when the goal cannot be reached; that is an ordinary
//! outcome, not an error.
//!
//! The backward frontiers walk edges with the same neighbor function as the
//! forward ones, so the bidirectional strategies assume symmetric adjacency.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | bidirectional BFS |
//! | [`EstimatePather`] : [`Pather`] | every strategy via [`SearchStrategy`] |

mod best_first;
mod bfs;
mod bidirectional;
mod distance;
mod heap;
mod search;
mod traits;

#[cfg(test)]
mod testgraph;

pub use best_first::BestFirst;
pub use bfs::BidirectionalBfs;
pub use bidirectional::BidirectionalBestFirst;
pub use distance::euclidean;
pub use heap::Heap;
pub use search::{
    ParseStrategyError, SearchStrategy, Strategy, StrategyKind, combine_path, path_to,
};
pub use traits::{EstimatePather, FnPather, Pather};
