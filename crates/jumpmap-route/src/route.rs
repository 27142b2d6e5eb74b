//! Per-segment route results.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// Number of jumps in a segment, or [`Jumps::Infinite`] when no path exists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jumps {
    Count(u32),
    Infinite,
}

impl Jumps {
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Count(_))
    }

    /// The jump count, or `None` if infinite.
    #[inline]
    pub fn count(self) -> Option<u32> {
        match self {
            Self::Count(n) => Some(n),
            Self::Infinite => None,
        }
    }
}

impl Add for Jumps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Count(a), Self::Count(b)) => Self::Count(a.saturating_add(b)),
            _ => Self::Infinite,
        }
    }
}

impl Sum for Jumps {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::Count(0), Add::add)
    }
}

impl fmt::Display for Jumps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Infinite => f.write_str("\u{221e}"),
        }
    }
}

/// The route between two consecutive waypoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub start: NodeId,
    pub destination: NodeId,
    /// Nodes visited, endpoints included. For an unreachable segment this is
    /// just `[start, destination]`, a placeholder edge for drawing.
    pub jump_planets: Vec<NodeId>,
    pub jumps: Jumps,
    pub jump_possible: bool,
}

impl RoutePoint {
    /// A segment along `path`, which must start at `start` and end at
    /// `destination`.
    pub fn reachable(start: NodeId, destination: NodeId, path: Vec<NodeId>) -> Self {
        debug_assert_eq!(path.first(), Some(&start));
        debug_assert_eq!(path.last(), Some(&destination));
        let jumps = u32::try_from(path.len().saturating_sub(1)).unwrap_or(u32::MAX);
        Self {
            start,
            destination,
            jump_planets: path,
            jumps: Jumps::Count(jumps),
            jump_possible: true,
        }
    }

    /// A segment with no path between its endpoints.
    pub fn unreachable(start: NodeId, destination: NodeId) -> Self {
        Self {
            start,
            destination,
            jump_planets: vec![start, destination],
            jumps: Jumps::Infinite,
            jump_possible: false,
        }
    }
}

impl fmt::Display for RoutePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: ", self.start, self.destination)?;
        if !self.jump_possible {
            return write!(f, "no route ({} jumps)", self.jumps);
        }
        write!(f, "{} jumps via", self.jumps)?;
        for id in &self.jump_planets {
            write!(f, " {id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jumps_add_and_sum() {
        assert_eq!(Jumps::Count(2) + Jumps::Count(3), Jumps::Count(5));
        assert_eq!(Jumps::Count(2) + Jumps::Infinite, Jumps::Infinite);
        let total: Jumps = [Jumps::Count(1), Jumps::Count(4)].into_iter().sum();
        assert_eq!(total, Jumps::Count(5));
        let empty: Jumps = std::iter::empty::<Jumps>().sum();
        assert_eq!(empty, Jumps::Count(0));
    }

    #[test]
    fn jumps_display() {
        assert_eq!(Jumps::Count(7).to_string(), "7");
        assert_eq!(Jumps::Infinite.to_string(), "\u{221e}");
    }

    #[test]
    fn reachable_counts_hops() {
        let rp = RoutePoint::reachable(NodeId(1), NodeId(3), vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert!(rp.jump_possible);
        assert_eq!(rp.jumps, Jumps::Count(2));
        assert_eq!(rp.to_string(), "#1 -> #3: 2 jumps via #1 #2 #3");
    }

    #[test]
    fn unreachable_is_a_placeholder_edge() {
        let rp = RoutePoint::unreachable(NodeId(1), NodeId(3));
        assert!(!rp.jump_possible);
        assert_eq!(rp.jumps, Jumps::Infinite);
        assert_eq!(rp.jump_planets, vec![NodeId(1), NodeId(3)]);
    }

    #[test]
    fn route_point_json() {
        let rp = RoutePoint::unreachable(NodeId(4), NodeId(9));
        let json = serde_json::to_string(&rp).unwrap();
        assert_eq!(
            json,
            r#"{"start":4,"destination":9,"jump_planets":[4,9],"jumps":"infinite","jump_possible":false}"#
        );
        let back: RoutePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rp);
    }
}
