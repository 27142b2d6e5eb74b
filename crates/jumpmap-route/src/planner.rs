//! Waypoint route planning.

use std::collections::HashSet;

use jumpmap_paths::{EstimatePather, Pather, SearchStrategy, Strategy, euclidean};

use crate::config::RouteConfig;
use crate::map::StarMap;
use crate::node::{CategoryId, NodeId};
use crate::route::{Jumps, RoutePoint};

/// The jump graph of a map for one segment search. Its neighbors are worked
/// out on demand from the spatial index.
struct JumpPather<'a> {
    map: &'a StarMap,
    exclusions: &'a HashSet<CategoryId>,
    jump_range: f64,
    start: NodeId,
    goal: NodeId,
}

impl JumpPather<'_> {
    fn allowed(&self, id: NodeId, category: CategoryId) -> bool {
        id == self.start || id == self.goal || !self.exclusions.contains(&category)
    }
}

impl Pather for JumpPather<'_> {
    type Node = NodeId;

    fn neighbors(&self, node: NodeId, buf: &mut Vec<NodeId>) {
        let Some(from) = self.map.node(node) else {
            return;
        };
        buf.extend(
            self.map
                .get_all_in_range(from.pos(), self.jump_range)
                .into_iter()
                .filter(|n| n.id != node && self.allowed(n.id, n.category))
                .map(|n| n.id),
        );
    }
}

impl EstimatePather for JumpPather<'_> {
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        match (self.map.node(from), self.map.node(to)) {
            (Some(a), Some(b)) => euclidean(a.pos(), b.pos()),
            _ => 0.0,
        }
    }
}

/// Turns an ordered list of waypoints into a route, one independent search
/// per consecutive pair.
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    waypoints: Vec<NodeId>,
    exclusions: HashSet<CategoryId>,
    route: Vec<RoutePoint>,
    strategy: Strategy,
}

impl RoutePlanner {
    /// A planner using best-first search with no expansion cap.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// A planner with the strategy and exclusions of `config`.
    pub fn from_config(config: &RouteConfig) -> Self {
        Self {
            exclusions: config.exclusions.iter().copied().collect(),
            ..Self::with_strategy(config.search_strategy())
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Takes effect on the next calculation.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    #[inline]
    pub fn waypoints(&self) -> &[NodeId] {
        &self.waypoints
    }

    /// Append a waypoint. Returns `false` and does nothing if it equals the
    /// current last waypoint.
    pub fn add_waypoint(&mut self, node: NodeId) -> bool {
        if self.waypoints.last() == Some(&node) {
            return false;
        }
        self.waypoints.push(node);
        true
    }

    /// Remove the first occurrence of `node`. Returns whether one was found.
    pub fn remove_waypoint(&mut self, node: NodeId) -> bool {
        match self.waypoints.iter().position(|&w| w == node) {
            Some(i) => {
                self.waypoints.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove the waypoint at `index`, if there is one.
    pub fn remove_waypoint_at(&mut self, index: usize) -> Option<NodeId> {
        (index < self.waypoints.len()).then(|| self.waypoints.remove(index))
    }

    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }

    /// Forbid routes through `category`, except at segment endpoints.
    /// Returns `false` if it was already excluded.
    pub fn add_exclusion(&mut self, category: CategoryId) -> bool {
        self.exclusions.insert(category)
    }

    pub fn remove_exclusion(&mut self, category: CategoryId) -> bool {
        self.exclusions.remove(&category)
    }

    #[inline]
    pub fn is_excluded(&self, category: CategoryId) -> bool {
        self.exclusions.contains(&category)
    }

    pub fn exclusions(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.exclusions.iter().copied()
    }

    pub fn clear_exclusions(&mut self) {
        self.exclusions.clear();
    }

    /// Segments from the last calculation. Empty before the first one.
    #[inline]
    pub fn route(&self) -> &[RoutePoint] {
        &self.route
    }

    pub fn clear_route(&mut self) {
        self.route.clear();
    }

    /// Jumps over the whole route, infinite if any segment is unreachable.
    pub fn total_jumps(&self) -> Jumps {
        self.route.iter().map(|rp| rp.jumps).sum()
    }

    /// Whether a route has been calculated and every segment is reachable.
    pub fn is_complete(&self) -> bool {
        !self.route.is_empty() && self.route.iter().all(|rp| rp.jump_possible)
    }

    /// Recompute the route over `map`, where one jump covers at most
    /// `jump_range`. With fewer than two waypoints nothing changes and
    /// `false` is returned.
    ///
    /// Two nodes are one jump apart when their distance is at most
    /// `jump_range` plus [`NODE_RADIUS`](crate::NODE_RADIUS): the range query
    /// also reaches the footprint of the candidate node.
    pub fn calculate_route(&mut self, map: &StarMap, jump_range: f64) -> bool {
        if self.waypoints.len() < 2 {
            log::debug!(
                "route needs at least two waypoints, have {}",
                self.waypoints.len()
            );
            return false;
        }

        self.route = self
            .waypoints
            .windows(2)
            .map(|pair| self.find_route(map, jump_range, pair[0], pair[1]))
            .collect();

        log::info!(
            "route over {} waypoints with {}: {} jumps",
            self.waypoints.len(),
            self.strategy.kind(),
            self.total_jumps()
        );
        true
    }

    /// Search a single segment from `start` to `destination`.
    pub fn find_route(
        &self,
        map: &StarMap,
        jump_range: f64,
        start: NodeId,
        destination: NodeId,
    ) -> RoutePoint {
        for id in [start, destination] {
            if !map.contains(id) {
                log::warn!("waypoint {id} is not on the map");
                return RoutePoint::unreachable(start, destination);
            }
        }

        let pather = JumpPather {
            map,
            exclusions: &self.exclusions,
            jump_range,
            start,
            goal: destination,
        };
        match self.strategy.search(&pather, start, destination) {
            Some(path) => RoutePoint::reachable(start, destination, path),
            None => RoutePoint::unreachable(start, destination),
        }
    }
}
