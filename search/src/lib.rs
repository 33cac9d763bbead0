//! Lodestar Search: generic graph search and adversarial game search.
//!
//! This crate provides the search layer. It depends only on
//! `lodestar_kernel`; the concrete domains live in `lodestar_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! lodestar_kernel  ←  lodestar_search  ←  lodestar_harness
//! (hash, canon)       (frontiers, nodes)   (puzzle, tic-tac-toe, runner)
//! ```
//!
//! # Key types
//!
//! - [`StateSpace`](contract::StateSpace) -- goal test, successors, canonical id, heuristic
//! - [`NodeArena`](node::NodeArena) -- per-run node storage with parent handles
//! - [`SearchPath`](path::SearchPath) -- `(actions, states)` from just after the root to the goal
//! - [`SearchOutcome`](report::SearchOutcome) -- path, termination reason and counters
//! - [`SearchPolicy`](policy::SearchPolicy) -- optional budgets, step cost, tie-break
//! - [`Game`](adversarial::Game) -- two-player zero-sum game contract for minimax
//!
//! # Entry points
//!
//! - [`uninformed::breadth_first`], [`uninformed::depth_limited`],
//!   [`uninformed::iterative_deepening`]
//! - [`informed::astar`]
//! - [`adversarial::minimax`], [`adversarial::alpha_beta`]

#![forbid(unsafe_code)]

pub mod adversarial;
pub mod contract;
pub mod error;
pub mod frontier;
mod graph;
pub mod informed;
pub mod node;
pub mod path;
pub mod policy;
pub mod report;
pub mod uninformed;
