//! Shared helpers for lodestar benchmark suites.

use lodestar_harness::policy::RunConfig;
use lodestar_harness::runner::run_puzzle;
use lodestar_harness::worlds::eight_puzzle::{PuzzleMove, PuzzleState};
use lodestar_kernel::proof::hash::{canonical_hash, ContentHash};
use lodestar_kernel::proof::hash_domain::HashDomain;
use lodestar_search::node::{NodeArena, NodeId};

use PuzzleMove::{Down, Left, Right, Up};

/// Named 8-puzzle instances with optimal solution lengths 6, 10 and 16.
#[must_use]
pub fn puzzle_instances() -> Vec<(&'static str, PuzzleState)> {
    vec![
        (
            "six",
            PuzzleState::scrambled(&[Up, Left, Down, Right, Right, Down]),
        ),
        (
            "ten",
            PuzzleState::scrambled(&[Up, Right, Down, Left, Left, Up, Right, Right, Down, Left]),
        ),
        (
            "sixteen",
            PuzzleState::scrambled(&[
                Down, Left, Up, Right, Right, Up, Left, Left, Down, Down, Right, Right, Up, Left,
                Up, Right,
            ]),
        ),
    ]
}

/// An arena holding a root and `n` children with cycling heuristic values,
/// so best-first ordering has real work to do.
#[must_use]
pub fn fan_out_arena(n: i64) -> (NodeArena<i64, i64>, Vec<NodeId>) {
    let mut arena = NodeArena::new();
    let root = arena.push_root(0, 0);
    let mut ids = vec![root];
    for i in 1..=n {
        ids.push(arena.push_child(root, i, i, 1, i % 17));
    }
    (arena, ids)
}

/// Run every instance twice under `config` and return a guard digest over
/// the report bytes.
///
/// # Panics
///
/// Panics if a run fails or two runs of the same instance disagree.
/// Benchmarks must not time nondeterministic code.
#[must_use]
pub fn determinism_guard(config: &RunConfig) -> ContentHash {
    let mut all_bytes = Vec::new();
    for (name, state) in puzzle_instances() {
        let first = run_puzzle(&state, config).expect("guard run");
        let second = run_puzzle(&state, config).expect("guard run");
        assert_eq!(first.bytes, second.bytes, "nondeterministic report for {name}");
        all_bytes.extend_from_slice(&first.bytes);
    }
    canonical_hash(HashDomain::BenchGuard, &all_bytes)
}
