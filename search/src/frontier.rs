//! Open sets (FIFO, LIFO, best-first) and the closed set.
//!
//! Frontiers store [`NodeId`] handles; the nodes themselves live in the
//! run's [`crate::node::NodeArena`]. The closed set is a `BTreeSet` keyed by
//! the state space's canonical id.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, VecDeque};

use crate::node::{FrontierKey, NodeId, SearchNode};
use crate::policy::TieBreak;

/// Ordering strategy for discovered-but-unexpanded nodes.
pub trait OpenSet {
    /// Add a node. `node` is the arena entry for `id`.
    fn push<S, A>(&mut self, id: NodeId, node: &SearchNode<S, A>);

    /// The node the strategy will hand out next, without removing it.
    fn peek(&self) -> Option<NodeId>;

    /// Remove and return the next node.
    fn pop(&mut self) -> Option<NodeId>;

    /// Number of queued nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the open set has reached.
    fn high_water(&self) -> u64;
}

/// Tracks the maximum observed size.
#[derive(Debug, Default, Clone, Copy)]
struct HighWater(u64);

impl HighWater {
    fn observe(&mut self, size: usize) {
        let size = size as u64;
        if size > self.0 {
            self.0 = size;
        }
    }
}

/// First-in first-out queue (breadth-first order).
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    high_water: HighWater,
}

impl FifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OpenSet for FifoFrontier {
    fn push<S, A>(&mut self, id: NodeId, _node: &SearchNode<S, A>) {
        self.queue.push_back(id);
        self.high_water.observe(self.queue.len());
    }

    fn peek(&self) -> Option<NodeId> {
        self.queue.front().copied()
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water.0
    }
}

/// Last-in first-out stack (depth-first order).
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
    high_water: HighWater,
}

impl LifoFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OpenSet for LifoFrontier {
    fn push<S, A>(&mut self, id: NodeId, _node: &SearchNode<S, A>) {
        self.stack.push(id);
        self.high_water.observe(self.stack.len());
    }

    fn peek(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water.0
    }
}

/// Min-priority queue on [`FrontierKey`].
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop
/// the lowest key first.
#[derive(Debug)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<(FrontierKey, NodeId)>>,
    tie_break: TieBreak,
    high_water: HighWater,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
            high_water: HighWater::default(),
        }
    }
}

impl OpenSet for BestFirstFrontier {
    fn push<S, A>(&mut self, id: NodeId, node: &SearchNode<S, A>) {
        let key = FrontierKey::for_node(node, self.tie_break);
        self.heap.push(Reverse((key, id)));
        self.high_water.observe(self.heap.len());
    }

    fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|Reverse((_, id))| *id)
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse((_, id))| id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> u64 {
        self.high_water.0
    }
}

/// Ids of states that have already been expanded. Append-only during a run.
#[derive(Debug)]
pub struct ClosedSet<I> {
    ids: BTreeSet<I>,
}

impl<I: Ord> ClosedSet<I> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Mark `id` as expanded. Returns `false` if it already was.
    pub fn insert(&mut self, id: I) -> bool {
        self.ids.insert(id)
    }

    #[must_use]
    pub fn contains(&self, id: &I) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<I: Ord> Default for ClosedSet<I> {
    fn default() -> Self {
        Self::new()
    }
}
