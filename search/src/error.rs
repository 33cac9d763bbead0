//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Running out of frontier
//! is not an error: it is the "no solution" outcome carried by
//! [`crate::report::SearchOutcome`].

use thiserror::Error;

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy carries values the algorithms cannot honour.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}

/// Failure replaying a [`crate::path::SearchPath`] against its state space.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// `actions` and `states` have different lengths.
    #[error("path has {actions} actions but {states} states")]
    LengthMismatch { actions: usize, states: usize },
    /// No successor of the previous state is produced by this action.
    #[error("step {step}: action {action} is not applicable")]
    UnknownAction { step: usize, action: String },
    /// The action is applicable but yields a different state than recorded.
    #[error("step {step}: recorded state {recorded} differs from replayed state {replayed}")]
    StateMismatch {
        step: usize,
        recorded: String,
        replayed: String,
    },
    /// The final state of the path does not satisfy the goal test.
    #[error("path ends in a non-goal state")]
    GoalNotReached,
}
