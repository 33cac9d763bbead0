//! Search nodes, the per-run node arena, and the A\* frontier key.

use std::cmp::Ordering;

use crate::policy::TieBreak;

/// Handle to a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena (root = 0).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
///
/// The predecessor chain is expressed through `parent` handles into the same
/// arena; the root has `parent == None` and `action == None`.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// State snapshot at this node.
    pub state: S,
    /// Parent node (`None` for root).
    pub parent: Option<NodeId>,
    /// The action that produced this node from its parent.
    pub action: Option<A>,
    /// Cumulative path cost from the root.
    pub path_cost: i64,
    /// Heuristic estimate at this node (0 outside A\*).
    pub heuristic: i64,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Insertion counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S, A> SearchNode<S, A> {
    /// `f_cost = path_cost + heuristic`, the A\* ordering value.
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.path_cost.saturating_add(self.heuristic)
    }
}

/// Append-only node storage owned by one search invocation.
///
/// Nodes are never removed or mutated after insertion, so a [`NodeId`]
/// stays valid for the life of the arena.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert the root node for `state`.
    pub fn push_root(&mut self, state: S, heuristic: i64) -> NodeId {
        let id = self.next_id();
        self.nodes.push(SearchNode {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            heuristic,
            depth: 0,
            creation_order: id.0 as u64,
        });
        id
    }

    /// Insert a child of `parent` reached by `action` at additional cost `step_cost`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this arena.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        action: A,
        state: S,
        step_cost: i64,
        heuristic: i64,
    ) -> NodeId {
        let (path_cost, depth) = {
            let p = &self.nodes[parent.0];
            (p.path_cost.saturating_add(step_cost), p.depth + 1)
        };
        let id = self.next_id();
        self.nodes.push(SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
            heuristic,
            depth,
            creation_order: id.0 as u64,
        });
        id
    }

    /// Handle the next pushed node will receive.
    fn next_id(&self) -> NodeId {
        NodeId(self.nodes.len())
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// The A\* frontier ordering key.
///
/// Lower `f_cost` first. On ties, `tie_break` decides whether lower or higher
/// `path_cost` wins, then older `creation_order` (FIFO).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub path_cost: i64,
    pub creation_order: u64,
    pub tie_break: TieBreak,
}

impl FrontierKey {
    #[must_use]
    pub fn for_node<S, A>(node: &SearchNode<S, A>, tie_break: TieBreak) -> Self {
        Self {
            f_cost: node.f_cost(),
            path_cost: node.path_cost,
            creation_order: node.creation_order,
            tie_break,
        }
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_cost = match self.tie_break {
            TieBreak::ShallowFirst => self.path_cost.cmp(&other.path_cost),
            TieBreak::DeepFirst => other.path_cost.cmp(&self.path_cost),
        };
        self.f_cost
            .cmp(&other.f_cost)
            .then(by_cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
