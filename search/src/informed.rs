//! Informed search: A\*.

use crate::contract::StateSpace;
use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::graph::{closed_set_search, NodeCosting};
use crate::policy::SearchPolicy;
use crate::report::SearchOutcome;

/// A\* search ordered by `path_cost + heuristic(state)`.
///
/// Each action costs `policy.step_cost`. Ties on estimated total cost are
/// resolved by `policy.tie_break`, then by insertion order. With a
/// heuristic that never overestimates (and is consistent, as the 8-puzzle
/// Manhattan distance is) the first goal popped is cost-optimal.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn astar<W: StateSpace>(
    space: &W,
    initial: &W::State,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<W::State, W::Action>, SearchError> {
    policy.validate()?;
    Ok(closed_set_search(
        "astar",
        space,
        initial,
        policy,
        BestFirstFrontier::new(policy.tie_break),
        NodeCosting {
            step_cost: policy.step_cost,
            use_heuristic: true,
        },
    ))
}
