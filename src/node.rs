//! Search states and the arena that owns them.

use std::cmp::Ordering;

use crate::geo::LngLat;

/// Handle of a node inside a [`NodeArena`].
pub type NodeId = usize;

/// One discovered search state.
///
/// Nodes are never mutated after creation. A cheaper route to the same
/// position produces a new node that supersedes the old one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    position: LngLat,
    parent: Option<NodeId>,
    path_cost: f64,
    heuristic_cost: f64,
    total_cost: f64,
}

impl SearchNode {
    pub fn new(
        position: LngLat,
        parent: Option<NodeId>,
        path_cost: f64,
        heuristic_cost: f64,
    ) -> Self {
        Self {
            position,
            parent,
            path_cost,
            heuristic_cost,
            total_cost: path_cost + heuristic_cost,
        }
    }

    pub fn position(&self) -> LngLat {
        self.position
    }

    /// The node this one was reached from; `None` for the start node.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Distance flown from the start.
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// Estimated remaining distance to the goal.
    pub fn heuristic_cost(&self) -> f64 {
        self.heuristic_cost
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Orders nodes by ascending total cost.
    pub fn cmp_total_cost(&self, other: &SearchNode) -> Ordering {
        self.total_cost.total_cmp(&other.total_cost)
    }
}

/// Append-only storage for the nodes of one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Positions from the root of `id`'s parent chain down to `id`.
    ///
    /// An unknown handle yields an empty path.
    pub fn path_to(&self, id: NodeId) -> Vec<LngLat> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(node) = cursor.and_then(|id| self.nodes.get(id)) {
            path.push(node.position);
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
