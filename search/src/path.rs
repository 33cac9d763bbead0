//! Path reconstruction and replay verification.

use crate::contract::StateSpace;
use crate::error::PathError;
use crate::node::{NodeArena, NodeId};

/// Actions and states from just after the initial state to the goal.
///
/// `actions[i]` takes `states[i - 1]` (or the initial state for `i == 0`)
/// to `states[i]`. Both vectors have the same length; an initial state that
/// is already a goal yields two empty vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath<S, A> {
    pub actions: Vec<A>,
    pub states: Vec<S>,
}

impl<S, A> SearchPath<S, A> {
    /// Number of actions on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the initial state was already a goal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The goal state, if the path has at least one step.
    #[must_use]
    pub fn last_state(&self) -> Option<&S> {
        self.states.last()
    }
}

/// Walk parent links from `goal` to the root and return the path in
/// root-to-goal order, excluding the root's own state.
#[must_use]
pub fn trace_path<S: Clone, A: Clone>(arena: &NodeArena<S, A>, goal: NodeId) -> SearchPath<S, A> {
    let depth = arena.get(goal).depth as usize;
    let mut actions = Vec::with_capacity(depth);
    let mut states = Vec::with_capacity(depth);

    let mut current = arena.get(goal);
    while let (Some(parent), Some(action)) = (current.parent, current.action.as_ref()) {
        actions.push(action.clone());
        states.push(current.state.clone());
        current = arena.get(parent);
    }

    actions.reverse();
    states.reverse();
    SearchPath { actions, states }
}

/// Replay `path` from `initial` against `space`.
///
/// For each step the successor generated by the recorded action must have
/// the same canonical id as the recorded state, and the final state must be
/// a goal. An empty path is valid only if `initial` is a goal.
///
/// # Errors
///
/// Returns the first [`PathError`] encountered.
pub fn verify_path<W: StateSpace>(
    space: &W,
    initial: &W::State,
    path: &SearchPath<W::State, W::Action>,
) -> Result<(), PathError> {
    if path.actions.len() != path.states.len() {
        return Err(PathError::LengthMismatch {
            actions: path.actions.len(),
            states: path.states.len(),
        });
    }

    let mut current = initial.clone();
    for (step, (action, recorded)) in path.actions.iter().zip(&path.states).enumerate() {
        let Some(next) = space
            .successors(&current)
            .into_iter()
            .find(|s| s.action == *action)
        else {
            return Err(PathError::UnknownAction {
                step,
                action: format!("{action:?}"),
            });
        };

        let recorded_id = space.unique_id(recorded);
        let replayed_id = space.unique_id(&next.state);
        if recorded_id != replayed_id {
            return Err(PathError::StateMismatch {
                step,
                recorded: format!("{recorded_id:?}"),
                replayed: format!("{replayed_id:?}"),
            });
        }
        current = next.state;
    }

    if space.is_goal(&current) {
        Ok(())
    } else {
        Err(PathError::GoalNotReached)
    }
}
