use std::collections::HashMap;

use crate::search::{Expansions, SearchStrategy, combine_path};
use crate::traits::{EstimatePather, Pather};

/// Unweighted breadth-first search from both ends, one full layer at a time.
///
/// Every hop costs the same and the estimate is ignored, so the returned path
/// always has the fewest hops.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BidirectionalBfs {
    /// Give up after this many neighbor expansions. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

/// Outcome of expanding one layer.
enum Layer<N> {
    /// A newly discovered node was already reached from the other end.
    Met(N),
    /// Layer done, no meeting yet.
    Advanced,
    /// Budget ran out mid-layer.
    Exhausted,
}

impl BidirectionalBfs {
    /// Run the search with a plain [`Pather`]; no estimate is needed.
    pub fn search_unweighted<P: Pather>(
        &self,
        pather: &P,
        start: P::Node,
        goal: P::Node,
    ) -> Option<Vec<P::Node>> {
        if start == goal {
            return Some(vec![start]);
        }

        let mut parent_a = HashMap::from([(start, start)]);
        let mut parent_b = HashMap::from([(goal, goal)]);
        let mut frontier_a = vec![start];
        let mut frontier_b = vec![goal];

        let mut budget = Expansions::new(self.max_expansions);
        let mut nbuf = Vec::new();

        let mut forward_turn = true;
        while !frontier_a.is_empty() || !frontier_b.is_empty() {
            let layer = if forward_turn {
                expand_layer(pather, &mut frontier_a, &mut parent_a, &parent_b, &mut nbuf, &mut budget)
            } else {
                expand_layer(pather, &mut frontier_b, &mut parent_b, &parent_a, &mut nbuf, &mut budget)
            };
            forward_turn = !forward_turn;

            match layer {
                Layer::Met(meeting) => {
                    let path = combine_path(meeting, &parent_a, &parent_b);
                    log::debug!(
                        "bidirectional bfs: {} hops after {} expansions",
                        path.len() - 1,
                        budget.count()
                    );
                    return Some(path);
                }
                Layer::Exhausted => {
                    log::warn!(
                        "bidirectional bfs: gave up after {} expansions",
                        budget.count()
                    );
                    return None;
                }
                Layer::Advanced => {}
            }
        }

        log::debug!(
            "bidirectional bfs: unreachable after {} expansions",
            budget.count()
        );
        None
    }
}

/// Replace `frontier` with every node one hop beyond it that `parent` has not
/// seen yet, stopping at the first one `other` has already seen.
fn expand_layer<P: Pather>(
    pather: &P,
    frontier: &mut Vec<P::Node>,
    parent: &mut HashMap<P::Node, P::Node>,
    other: &HashMap<P::Node, P::Node>,
    nbuf: &mut Vec<P::Node>,
    budget: &mut Expansions,
) -> Layer<P::Node> {
    let mut next_frontier = Vec::new();
    for &current in frontier.iter() {
        if !budget.spend() {
            return Layer::Exhausted;
        }
        nbuf.clear();
        pather.neighbors(current, nbuf);
        for &next in nbuf.iter() {
            if parent.contains_key(&next) {
                continue;
            }
            parent.insert(next, current);
            if other.contains_key(&next) {
                return Layer::Met(next);
            }
            next_frontier.push(next);
        }
    }
    *frontier = next_frontier;
    Layer::Advanced
}

impl SearchStrategy for BidirectionalBfs {
    fn search<P: EstimatePather>(
        &self,
        pather: &P,
        start: P::Node,
        goal: P::Node,
    ) -> Option<Vec<P::Node>> {
        self.search_unweighted(pather, start, goal)
    }
}
