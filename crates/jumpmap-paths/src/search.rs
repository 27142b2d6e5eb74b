use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::best_first::BestFirst;
use crate::bfs::BidirectionalBfs;
use crate::bidirectional::BidirectionalBestFirst;
use crate::traits::EstimatePather;

/// Common interface of the path searches.
pub trait SearchStrategy {
    /// Find a path from `start` to `goal`, both included.
    ///
    /// Returns `None` if the goal is unreachable, or if the strategy's
    /// expansion budget runs out first. `start == goal` yields `[start]`.
    fn search<P: EstimatePather>(
        &self,
        pather: &P,
        start: P::Node,
        goal: P::Node,
    ) -> Option<Vec<P::Node>>;
}

// ---------------------------------------------------------------------------
// Path reconstruction
// ---------------------------------------------------------------------------

/// Follow `parent` links from `node` back to the search root (the node that is
/// its own parent) and return the path from the root to `node`, inclusive.
pub fn path_to<N: Copy + Eq + Hash>(node: N, parent: &HashMap<N, N>) -> Vec<N> {
    let mut path = vec![node];
    let mut current = node;
    loop {
        let Some(&p) = parent.get(&current) else {
            debug_assert!(false, "parent chain ends without reaching the root");
            break;
        };
        if p == current {
            break;
        }
        path.push(p);
        current = p;
        if path.len() > parent.len() {
            debug_assert!(false, "parent chain contains a cycle");
            break;
        }
    }
    path.reverse();
    path
}

/// Join two half-paths that meet at `meeting`: the path from the root of
/// `parent_a` to `meeting`, then on to the root of `parent_b`.
pub fn combine_path<N: Copy + Eq + Hash>(
    meeting: N,
    parent_a: &HashMap<N, N>,
    parent_b: &HashMap<N, N>,
) -> Vec<N> {
    let mut path = path_to(meeting, parent_a);
    let mut back = path_to(meeting, parent_b);
    back.pop();
    back.reverse();
    path.extend(back);
    path
}

// ---------------------------------------------------------------------------
// Expansion budget
// ---------------------------------------------------------------------------

/// Counts neighbor expansions against an optional cap.
#[derive(Debug)]
pub(crate) struct Expansions {
    count: usize,
    limit: Option<usize>,
}

impl Expansions {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self { count: 0, limit }
    }

    /// Record one expansion. Returns `false`, without counting, once the cap
    /// is reached.
    pub(crate) fn spend(&mut self) -> bool {
        if let Some(limit) = self.limit {
            if self.count >= limit {
                return false;
            }
        }
        self.count += 1;
        true
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }
}

// ---------------------------------------------------------------------------
// Strategy selection
// ---------------------------------------------------------------------------

/// Which search to run. This is the configuration-facing name of a
/// [`Strategy`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrategyKind {
    #[default]
    BestFirst,
    BidirectionalBestFirst,
    BidirectionalBfs,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::BestFirst,
        StrategyKind::BidirectionalBestFirst,
        StrategyKind::BidirectionalBfs,
    ];

    /// The snake_case name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::BestFirst => "best_first",
            Self::BidirectionalBestFirst => "bidirectional_best_first",
            Self::BidirectionalBfs => "bidirectional_bfs",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`StrategyKind`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search strategy \u{201c}{}\u{201d} (expected best_first, bidirectional_best_first or bidirectional_bfs)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|k| k.name() == norm)
            .ok_or_else(|| ParseStrategyError(s.to_string()))
    }
}

/// One of the three searches, chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    BestFirst(BestFirst),
    BidirectionalBestFirst(BidirectionalBestFirst),
    BidirectionalBfs(BidirectionalBfs),
}

impl Strategy {
    /// Build the strategy for `kind`, optionally capping neighbor expansions.
    pub fn new(kind: StrategyKind, max_expansions: Option<usize>) -> Self {
        match kind {
            StrategyKind::BestFirst => Self::BestFirst(BestFirst { max_expansions }),
            StrategyKind::BidirectionalBestFirst => {
                Self::BidirectionalBestFirst(BidirectionalBestFirst { max_expansions })
            }
            StrategyKind::BidirectionalBfs => {
                Self::BidirectionalBfs(BidirectionalBfs { max_expansions })
            }
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::BestFirst(_) => StrategyKind::BestFirst,
            Self::BidirectionalBestFirst(_) => StrategyKind::BidirectionalBestFirst,
            Self::BidirectionalBfs(_) => StrategyKind::BidirectionalBfs,
        }
    }

    pub fn max_expansions(&self) -> Option<usize> {
        match self {
            Self::BestFirst(s) => s.max_expansions,
            Self::BidirectionalBestFirst(s) => s.max_expansions,
            Self::BidirectionalBfs(s) => s.max_expansions,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(StrategyKind::default(), None)
    }
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        Self::new(kind, None)
    }
}

impl SearchStrategy for Strategy {
    fn search<P: EstimatePather>(
        &self,
        pather: &P,
        start: P::Node,
        goal: P::Node,
    ) -> Option<Vec<P::Node>> {
        match self {
            Self::BestFirst(s) => s.search(pather, start, goal),
            Self::BidirectionalBestFirst(s) => s.search(pather, start, goal),
            Self::BidirectionalBfs(s) => s.search(pather, start, goal),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_kind_uses_snake_case() {
        let json = serde_json::to_string(&StrategyKind::BidirectionalBestFirst).unwrap();
        assert_eq!(json, "\"bidirectional_best_first\"");
        let back: StrategyKind = serde_json::from_str("\"bidirectional_bfs\"").unwrap();
        assert_eq!(back, StrategyKind::BidirectionalBfs);
    }
}
