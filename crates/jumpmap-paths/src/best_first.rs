use std::collections::HashMap;

use crate::heap::Heap;
use crate::search::{Expansions, SearchStrategy, path_to};
use crate::traits::EstimatePather;

/// Single-frontier best-first search.
///
/// Cost so far is the hop count from `start`; the frontier is ordered by hop
/// count plus [`EstimatePather::estimate`] to the goal. The two are in
/// different units (hops against plane distance), so with a geometric
/// estimate the search prefers geometrically closer stops without
/// guaranteeing the fewest hops. With a zero estimate it returns a path of
/// minimum hop count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestFirst {
    /// Give up after this many neighbor expansions. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchStrategy for BestFirst {
    fn search<P: EstimatePather>(
        &self,
        pather: &P,
        start: P::Node,
        goal: P::Node,
    ) -> Option<Vec<P::Node>> {
        if start == goal {
            return Some(vec![start]);
        }

        let h0 = pather.estimate(start, goal);
        let mut parent = HashMap::from([(start, start)]);
        let mut distance = HashMap::from([(start, 0u32)]);
        let mut estimate = HashMap::from([(start, h0)]);

        let mut open = Heap::new();
        open.add(start, h0);

        let mut budget = Expansions::new(self.max_expansions);
        let mut nbuf = Vec::new();

        while let Some((current, _)) = open.pop() {
            if current == goal {
                let path = path_to(goal, &parent);
                log::debug!(
                    "best-first: {} hops after {} expansions",
                    path.len() - 1,
                    budget.count()
                );
                return Some(path);
            }

            if !budget.spend() {
                log::warn!(
                    "best-first: gave up after {} expansions",
                    budget.count()
                );
                return None;
            }

            let next_distance = distance[&current] + 1;
            nbuf.clear();
            pather.neighbors(current, &mut nbuf);

            for &next in &nbuf {
                let next_estimate = f64::from(next_distance) + pather.estimate(next, goal);
                if let Some(&known) = estimate.get(&next) {
                    if next_estimate >= known {
                        continue;
                    }
                }

                distance.insert(next, next_distance);
                estimate.insert(next, next_estimate);
                parent.insert(next, current);

                if !open.update_item(next, next_estimate) {
                    open.add(next, next_estimate);
                }
            }
        }

        log::debug!(
            "best-first: unreachable after {} expansions",
            budget.count()
        );
        None
    }
}
