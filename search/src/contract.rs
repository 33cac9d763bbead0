//! State-space contract trait.

use std::fmt::Debug;

/// One outgoing transition: the action taken and the state it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<A, S> {
    pub action: A,
    pub state: S,
}

impl<A, S> Successor<A, S> {
    #[must_use]
    pub fn new(action: A, state: S) -> Self {
        Self { action, state }
    }
}

/// Trait for problem domains that support graph search.
///
/// # Contract
///
/// - `successors` must not mutate its input; every successor is a fresh value.
/// - `successors` must be deterministic: same state, same transitions, same
///   order. The order decides exploration order and tie-breaking.
/// - `unique_id` must be canonical: structurally equal states map to equal
///   ids and distinct states to distinct ids. The search does not check this.
/// - `heuristic` must be non-negative. A\* returns cost-optimal paths only
///   when it never overestimates the remaining cost.
pub trait StateSpace {
    /// Domain state. Treated as an immutable snapshot.
    type State: Clone;
    /// Action identifier attached to each transition.
    type Action: Clone + Debug + PartialEq;
    /// Canonical, totally ordered state identity for closed-set membership.
    type Id: Ord + Clone + Debug;

    /// Test whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerate transitions out of `state` in a fixed order.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::Action, Self::State>>;

    /// Canonical identity of `state`.
    fn unique_id(&self, state: &Self::State) -> Self::Id;

    /// Estimated remaining cost to a goal. Only A\* consults it.
    fn heuristic(&self, _state: &Self::State) -> i64 {
        0
    }
}
