//! Closed-set graph search loop shared by BFS and A\*.
//!
//! The two algorithms differ only in the open-set ordering and in whether
//! node costs include the heuristic; the expansion discipline is the same:
//!
//! 1. Discard a frontier head whose id is already closed.
//! 2. Goal-test the head; stop if it is a goal.
//! 3. Pop it, close its id, and push every successor whose id is not closed.

use log::debug;

use crate::contract::StateSpace;
use crate::frontier::{ClosedSet, OpenSet};
use crate::node::NodeArena;
use crate::path::trace_path;
use crate::policy::SearchPolicy;
use crate::report::{SearchOutcome, SearchStats, TerminationReason};

/// How child nodes are costed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeCosting {
    /// Added to the parent's path cost for every action.
    pub step_cost: i64,
    /// Whether to consult [`StateSpace::heuristic`].
    pub use_heuristic: bool,
}

/// Run the closed-set loop with `frontier` as the open set.
///
/// Policy validation is the caller's responsibility.
pub(crate) fn closed_set_search<W, F>(
    label: &str,
    space: &W,
    initial: &W::State,
    policy: &SearchPolicy,
    mut frontier: F,
    costing: NodeCosting,
) -> SearchOutcome<W::State, W::Action>
where
    W: StateSpace,
    F: OpenSet,
{
    let heuristic = |state: &W::State| {
        if costing.use_heuristic {
            space.heuristic(state)
        } else {
            0
        }
    };

    let mut arena: NodeArena<W::State, W::Action> = NodeArena::new();
    let mut closed: ClosedSet<W::Id> = ClosedSet::new();
    let mut stats = SearchStats {
        iterations: 1,
        ..SearchStats::default()
    };

    let root = arena.push_root(initial.clone(), heuristic(initial));
    frontier.push(root, arena.get(root));
    debug!("{label}: start, root f_cost={}", arena.get(root).f_cost());

    let mut goal = None;
    let termination = loop {
        let Some(head) = frontier.peek() else {
            break TerminationReason::FrontierExhausted;
        };

        let head_id = space.unique_id(&arena.get(head).state);
        if closed.contains(&head_id) {
            let _ = frontier.pop();
            stats.duplicates_suppressed += 1;
            continue;
        }

        stats.evaluated += 1;
        if space.is_goal(&arena.get(head).state) {
            goal = Some(head);
            break TerminationReason::GoalReached;
        }

        if policy.expansion_budget_spent(stats.expanded) {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let _ = frontier.pop();
        closed.insert(head_id);

        let successors = space.successors(&arena.get(head).state);
        stats.expanded += 1;
        stats.generated += successors.len() as u64;

        for successor in successors {
            if closed.contains(&space.unique_id(&successor.state)) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            let h = heuristic(&successor.state);
            let child = arena.push_child(
                head,
                successor.action,
                successor.state,
                costing.step_cost,
                h,
            );
            frontier.push(child, arena.get(child));
        }
    };
    stats.frontier_high_water = frontier.high_water();

    let path = goal.map(|id| trace_path(&arena, id));
    debug!(
        "{label}: {} after {} evaluated / {} expanded, closed={}, path_len={:?}",
        termination.as_str(),
        stats.evaluated,
        stats.expanded,
        closed.len(),
        path.as_ref().map(crate::path::SearchPath::len),
    );

    SearchOutcome {
        path,
        termination,
        stats,
    }
}
