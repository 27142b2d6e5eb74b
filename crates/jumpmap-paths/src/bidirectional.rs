use std::collections::HashMap;

use crate::heap::Heap;
use crate::search::{Expansions, SearchStrategy, combine_path};
use crate::traits::EstimatePather;

/// Best-first search run from both ends at once.
///
/// The forward side searches from `start` toward `goal`; the backward side
/// from `goal` toward `start`, estimating against `start`. Each round expands
/// the side whose frontier top is cheaper (the forward side on ties). The
/// search stops as soon as one side produces a node the other has already
/// reached, so the result is not necessarily the fewest hops.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BidirectionalBestFirst {
    /// Give up after this many neighbor expansions. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

/// One direction of the search.
struct Side<N> {
    target: N,
    parent: HashMap<N, N>,
    distance: HashMap<N, u32>,
    estimate: HashMap<N, f64>,
    open: Heap<N>,
}

impl<N: Copy + Eq + std::hash::Hash> Side<N> {
    fn new(root: N, target: N, h0: f64) -> Self {
        let mut open = Heap::new();
        open.add(root, h0);
        Self {
            target,
            parent: HashMap::from([(root, root)]),
            distance: HashMap::from([(root, 0)]),
            estimate: HashMap::from([(root, h0)]),
            open,
        }
    }

    /// Record `next` as reached from `current` if that improves its estimate.
    fn relax<P: EstimatePather<Node = N>>(&mut self, pather: &P, current: N, next: N) {
        let next_distance = self.distance[&current] + 1;
        let next_estimate = f64::from(next_distance) + pather.estimate(next, self.target);
        if let Some(&known) = self.estimate.get(&next) {
            if next_estimate >= known {
                return;
            }
        }

        self.distance.insert(next, next_distance);
        self.estimate.insert(next, next_estimate);
        self.parent.insert(next, current);

        if !self.open.update_item(next, next_estimate) {
            self.open.add(next, next_estimate);
        }
    }
}

impl SearchStrategy for BidirectionalBestFirst {
    fn search<P: EstimatePather>(
        &self,
        pather: &P,
        start: P::Node,
        goal: P::Node,
    ) -> Option<Vec<P::Node>> {
        if start == goal {
            return Some(vec![start]);
        }

        let mut forward = Side::new(start, goal, pather.estimate(start, goal));
        let mut backward = Side::new(goal, start, pather.estimate(goal, start));

        let mut budget = Expansions::new(self.max_expansions);
        let mut nbuf = Vec::new();

        loop {
            let (Some((_, top_f)), Some((_, top_b))) = (forward.open.peek(), backward.open.peek())
            else {
                log::debug!(
                    "bidirectional best-first: unreachable after {} expansions",
                    budget.count()
                );
                return None;
            };

            let (side, other) = if top_f <= top_b {
                (&mut forward, &backward)
            } else {
                (&mut backward, &forward)
            };
            let Some((current, _)) = side.open.pop() else {
                return None;
            };

            if !budget.spend() {
                log::warn!(
                    "bidirectional best-first: gave up after {} expansions",
                    budget.count()
                );
                return None;
            }

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            let mut meeting = None;
            for &next in &nbuf {
                side.relax(pather, current, next);
                if other.distance.contains_key(&next) {
                    meeting = Some(next);
                    break;
                }
            }

            if let Some(meeting) = meeting {
                let path = combine_path(meeting, &forward.parent, &backward.parent);
                log::debug!(
                    "bidirectional best-first: {} hops after {} expansions",
                    path.len() - 1,
                    budget.count()
                );
                return Some(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::euclidean;
    use crate::testgraph::{Graph, assert_valid_path};
    use crate::traits::FnPather;
    use jumpmap_core::Point;
    use std::cell::RefCell;

    #[test]
    fn start_is_goal() {
        let g = Graph::from_edges(2, &[(0, 1)]);
        assert_eq!(BidirectionalBestFirst::default().search(&g, 1, 1), Some(vec![1]));
    }

    #[test]
    fn adjacent_endpoints() {
        let g = Graph::from_edges(2, &[(0, 1)]);
        assert_eq!(
            BidirectionalBestFirst::default().search(&g, 0, 1),
            Some(vec![0, 1])
        );
    }

    #[test]
    fn meets_in_the_middle() {
        let g = Graph::from_edges(7, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)])
            .without_estimate();
        let path = BidirectionalBestFirst::default().search(&g, 0, 6).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_valid_path(&g, &path, 0, 6);
        // Sides alternate: 0, 6, 1, 5, 2, 4, then 4 reaches 3.
        assert_eq!(g.calls_for(0), 1);
        assert_eq!(g.calls_for(6), 1);
        assert_eq!(g.calls_for(3), 0);
        assert_eq!(g.max_calls_per_node(), 1);
    }

    #[test]
    fn ties_expand_the_forward_side() {
        // Both tops start at 2.0 and stay level, so the forward side runs to
        // the goal before the backward side expands anything.
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)]);
        let path = BidirectionalBestFirst::default().search(&g, 0, 2).unwrap();
        assert_eq!(path, vec![0, 1, 2]);
        assert_eq!(g.calls_for(0), 1);
        assert_eq!(g.calls_for(1), 1);
        assert_eq!(g.calls_for(2), 0);
    }

    #[test]
    fn backward_side_estimates_toward_start() {
        // 0 and 2 sit on the x axis with 1 well above them.
        let pos = [Point::new(0.0, 0.0), Point::new(1.0, 3.0), Point::new(2.0, 0.0)];
        let estimates = RefCell::new(Vec::new());
        let pather = FnPather::new(
            |n: u32| match n {
                1 => vec![0, 2],
                _ => vec![1],
            },
            |a: u32, b: u32| {
                estimates.borrow_mut().push((a, b));
                euclidean(pos[a as usize], pos[b as usize])
            },
        );

        let path = BidirectionalBestFirst::default().search(&pather, 0, 2);
        assert_eq!(path, Some(vec![0, 1, 2]));
        // Forward root, backward root, then 1 from each side. The forward
        // top after the first round is 1 + sqrt(10) against the backward
        // root's 2, so the backward side takes the second round.
        assert_eq!(*estimates.borrow(), vec![(0, 2), (2, 0), (1, 2), (1, 0)]);
    }

    #[test]
    fn disconnected_goal_is_unreachable() {
        let g = Graph::from_edges(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]);
        assert_eq!(BidirectionalBestFirst::default().search(&g, 0, 5), None);
    }

    #[test]
    fn isolated_start_is_unreachable() {
        let g = Graph::from_edges(4, &[(1, 2), (2, 3)]);
        assert_eq!(BidirectionalBestFirst::default().search(&g, 0, 3), None);
        assert_eq!(g.total_calls(), 1);
    }

    #[test]
    fn budget_stops_early() {
        let g = Graph::from_edges(7, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
        let capped = BidirectionalBestFirst {
            max_expansions: Some(1),
        };
        assert_eq!(capped.search(&g, 0, 6), None);
        assert_eq!(g.total_calls(), 1);
    }
}
