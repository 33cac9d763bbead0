//! Uninformed search: breadth-first, depth-limited, iterative deepening.

use log::{debug, trace};

use crate::contract::StateSpace;
use crate::error::SearchError;
use crate::frontier::{FifoFrontier, LifoFrontier, OpenSet};
use crate::graph::{closed_set_search, NodeCosting};
use crate::node::NodeArena;
use crate::path::trace_path;
use crate::policy::SearchPolicy;
use crate::report::{SearchOutcome, SearchStats, TerminationReason};

/// Breadth-first search with a closed set.
///
/// The first goal found is a shallowest one. Among equally shallow goals the
/// one whose action sequence comes first in successor order wins.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn breadth_first<W: StateSpace>(
    space: &W,
    initial: &W::State,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<W::State, W::Action>, SearchError> {
    policy.validate()?;
    Ok(closed_set_search(
        "bfs",
        space,
        initial,
        policy,
        FifoFrontier::new(),
        NodeCosting {
            step_cost: 1,
            use_heuristic: false,
        },
    ))
}

/// Depth-limited depth-first search.
///
/// Nodes at `depth_limit` are goal-tested but never expanded, so a returned
/// path has at most `depth_limit` actions. There is no closed set: states
/// may be revisited along different branches within the bound.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn depth_limited<W: StateSpace>(
    space: &W,
    initial: &W::State,
    depth_limit: u32,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<W::State, W::Action>, SearchError> {
    policy.validate()?;
    Ok(depth_limited_pass(space, initial, depth_limit, policy, 0))
}

/// Iterative deepening: depth-limited search with limits 1, 2, 3, ...
///
/// Stops at the first limit that yields a path. Also stops when a pass
/// exhausts its stack without cutting anything off (the reachable tree is
/// finite and holds no goal), when the expansion budget runs out, or when
/// the next limit would exceed `policy.max_depth`. Without a `max_depth` an
/// unreachable goal in a cyclic space deepens forever.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn iterative_deepening<W: StateSpace>(
    space: &W,
    initial: &W::State,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<W::State, W::Action>, SearchError> {
    policy.validate()?;

    let mut total = SearchStats::default();
    let mut depth_limit: u32 = 1;
    loop {
        if policy.max_depth.is_some_and(|max| depth_limit > max) {
            debug!("ids: depth budget exceeded at limit {depth_limit}");
            return Ok(SearchOutcome {
                path: None,
                termination: TerminationReason::DepthBudgetExceeded,
                stats: total,
            });
        }

        let pass = depth_limited_pass(space, initial, depth_limit, policy, total.expanded);
        total.absorb(&pass.stats);
        trace!(
            "ids: limit {depth_limit} -> {} ({} expanded so far)",
            pass.termination.as_str(),
            total.expanded
        );

        if pass.termination != TerminationReason::DepthLimitReached {
            return Ok(SearchOutcome {
                path: pass.path,
                termination: pass.termination,
                stats: total,
            });
        }
        depth_limit = depth_limit.saturating_add(1);
    }
}

/// One depth-limited pass. `spent` is the number of expansions already
/// charged against the policy budget by earlier passes.
fn depth_limited_pass<W: StateSpace>(
    space: &W,
    initial: &W::State,
    depth_limit: u32,
    policy: &SearchPolicy,
    spent: u64,
) -> SearchOutcome<W::State, W::Action> {
    let mut arena: NodeArena<W::State, W::Action> = NodeArena::new();
    let mut stack = LifoFrontier::new();
    let mut stats = SearchStats {
        iterations: 1,
        ..SearchStats::default()
    };
    let mut cut_off = false;

    let root = arena.push_root(initial.clone(), 0);
    stack.push(root, arena.get(root));

    let mut goal = None;
    let termination = loop {
        let Some(top) = stack.peek() else {
            break if cut_off {
                TerminationReason::DepthLimitReached
            } else {
                TerminationReason::FrontierExhausted
            };
        };

        stats.evaluated += 1;
        if space.is_goal(&arena.get(top).state) {
            goal = Some(top);
            break TerminationReason::GoalReached;
        }

        let _ = stack.pop();
        if arena.get(top).depth >= depth_limit {
            cut_off = true;
            continue;
        }

        // Nodes at the limit cost no expansion, so the budget is checked here.
        if policy.expansion_budget_spent(spent + stats.expanded) {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let successors = space.successors(&arena.get(top).state);
        stats.expanded += 1;
        stats.generated += successors.len() as u64;

        // Reversed so the first-listed successor is on top of the stack.
        for successor in successors.into_iter().rev() {
            let child = arena.push_child(top, successor.action, successor.state, 1, 0);
            stack.push(child, arena.get(child));
        }
    };
    stats.frontier_high_water = stack.high_water();

    SearchOutcome {
        path: goal.map(|id| trace_path(&arena, id)),
        termination,
        stats,
    }
}
