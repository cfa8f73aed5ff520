//! Weighted best-first flight path search.
//!
//! The drone moves in fixed steps along one of sixteen compass headings.
//! Every step must stay clear of the no-fly zones, and once the search has
//! expanded a position inside the central area every later step must stay
//! inside it.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use tracing::{debug, trace, warn};

use crate::geo::{COMPASS_HEADINGS, DRONE_IS_CLOSE_DISTANCE, DRONE_MOVE_DISTANCE, LngLat};
use crate::geometry::Region;
use crate::node::{NodeArena, NodeId, SearchNode};

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Distance covered by each move.
    pub step_length: f64,
    /// A position strictly closer than this to the goal ends the search.
    pub close_distance: f64,
    /// Multiplier on the straight-line distance heuristic. Values above 1.0
    /// trade path length for fewer expansions.
    pub heuristic_weight: f64,
    /// Maximum number of node expansions.
    pub max_iterations: usize,
    /// Maximum number of distinct positions discovered.
    pub max_nodes: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            step_length: DRONE_MOVE_DISTANCE,
            close_distance: DRONE_IS_CLOSE_DISTANCE,
            heuristic_weight: 1.5,
            max_iterations: 5000,
            max_nodes: 10000,
        }
    }
}

/// Why a search ended without reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// More than `max_iterations` nodes were expanded.
    IterationLimit,
    /// More than `max_nodes` positions were discovered.
    NodeLimit,
    /// Every reachable position was expanded.
    Exhausted,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::IterationLimit => write!(f, "search exhausted its iteration budget"),
            FailureReason::NodeLimit => write!(f, "too many states explored"),
            FailureReason::Exhausted => write!(f, "no path exists"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPath {
    /// Positions from the start to the position that reached the goal.
    pub path: Vec<LngLat>,
    pub iterations: usize,
    pub nodes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoPathFound {
    pub reason: FailureReason,
    pub iterations: usize,
    pub nodes: usize,
}

impl fmt::Display for NoPathFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no flight path found: {} ({} iterations, {} nodes)",
            self.reason, self.iterations, self.nodes
        )
    }
}

impl std::error::Error for NoPathFound {}

/// Finds a flight path from `start` to within reach of `goal`.
///
/// Returns `None` whatever the cause of failure; use [`search`] to learn it.
pub fn find_path(
    start: LngLat,
    goal: LngLat,
    no_fly_zones: &[Region],
    central_area: &Region,
    options: &PlanOptions,
) -> Option<Vec<LngLat>> {
    search(start, goal, no_fly_zones, central_area, options)
        .ok()
        .map(|planned| planned.path)
}

/// Runs one search and reports either the path or the reason it failed.
///
/// Regions are trusted to be closed; validate them before calling.
pub fn search(
    start: LngLat,
    goal: LngLat,
    no_fly_zones: &[Region],
    central_area: &Region,
    options: &PlanOptions,
) -> Result<PlannedPath, NoPathFound> {
    let result = FlightSearch::new(goal, no_fly_zones, central_area, options).run(start);

    match &result {
        Ok(planned) => debug!(
            iterations = planned.iterations,
            nodes = planned.nodes,
            steps = planned.path.len().saturating_sub(1),
            "flight path found"
        ),
        Err(failure) => warn!(
            reason = %failure.reason,
            iterations = failure.iterations,
            nodes = failure.nodes,
            "no flight path found"
        ),
    }

    result
}

/// Heap entry; `BinaryHeap` is a max-heap so the ordering is reversed.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    id: NodeId,
    node: SearchNode,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.node.cmp_total_cost(&self.node)
    }
}

/// Working state of a single search. Nothing here outlives the call.
struct FlightSearch<'a> {
    goal: LngLat,
    no_fly_zones: &'a [Region],
    central_area: &'a Region,
    options: &'a PlanOptions,
    arena: NodeArena,
    open: BinaryHeap<OpenEntry>,
    best: HashMap<LngLat, NodeId>,
    closed: HashSet<LngLat>,
    has_entered_central_area: bool,
    iterations: usize,
}

impl<'a> FlightSearch<'a> {
    fn new(
        goal: LngLat,
        no_fly_zones: &'a [Region],
        central_area: &'a Region,
        options: &'a PlanOptions,
    ) -> Self {
        Self {
            goal,
            no_fly_zones,
            central_area,
            options,
            arena: NodeArena::new(),
            open: BinaryHeap::new(),
            best: HashMap::new(),
            closed: HashSet::new(),
            has_entered_central_area: false,
            iterations: 0,
        }
    }

    fn run(mut self, start: LngLat) -> Result<PlannedPath, NoPathFound> {
        self.insert(SearchNode::new(start, None, 0.0, self.heuristic(&start)));

        while let Some(OpenEntry { id, node: current }) = self.open.pop() {
            let position = current.position();

            if self.is_stale(id, &position) {
                continue;
            }

            self.iterations += 1;
            if self.iterations > self.options.max_iterations {
                return Err(self.failure(FailureReason::IterationLimit));
            }

            if position.is_close_to(&self.goal, self.options.close_distance) {
                return Ok(PlannedPath {
                    path: self.arena.path_to(id),
                    iterations: self.iterations,
                    nodes: self.best.len(),
                });
            }

            self.closed.insert(position);

            // Never reset: frontier nodes found before entry are held to the
            // central area once any expanded position is inside it.
            if !self.has_entered_central_area && self.central_area.contains(&position) {
                trace!(
                    lng = position.lng,
                    lat = position.lat,
                    "entered central area"
                );
                self.has_entered_central_area = true;
            }

            self.expand(id, &current);

            if self.best.len() > self.options.max_nodes {
                return Err(self.failure(FailureReason::NodeLimit));
            }
        }

        Err(self.failure(FailureReason::Exhausted))
    }

    fn expand(&mut self, id: NodeId, current: &SearchNode) {
        let position = current.position();
        let path_cost = current.path_cost() + self.options.step_length;

        for angle in COMPASS_HEADINGS {
            let next = position.next_position(angle, self.options.step_length);
            if !self.is_allowed(&next) {
                continue;
            }

            let known = self.best.get(&next).and_then(|&known| self.arena.get(known));
            let improves = match known {
                Some(known) => path_cost < known.path_cost(),
                None => true,
            };
            if improves {
                self.insert(SearchNode::new(next, Some(id), path_cost, self.heuristic(&next)));
            }
        }
    }

    fn insert(&mut self, node: SearchNode) {
        let id = self.arena.push(node);
        self.best.insert(node.position(), id);
        self.open.push(OpenEntry { id, node });
    }

    /// A popped entry is stale once its position has been expanded or a
    /// cheaper node has replaced it.
    fn is_stale(&self, id: NodeId, position: &LngLat) -> bool {
        self.closed.contains(position) || self.best.get(position) != Some(&id)
    }

    fn is_allowed(&self, position: &LngLat) -> bool {
        if self.closed.contains(position) {
            return false;
        }
        if self.no_fly_zones.iter().any(|zone| zone.contains(position)) {
            return false;
        }
        !self.has_entered_central_area || self.central_area.contains(position)
    }

    fn heuristic(&self, position: &LngLat) -> f64 {
        self.options.heuristic_weight * position.distance_to(&self.goal)
    }

    fn failure(&self, reason: FailureReason) -> NoPathFound {
        NoPathFound {
            reason,
            iterations: self.iterations,
            nodes: self.best.len(),
        }
    }
}
