//! 8-puzzle search properties across BFS, DLS, IDS and A*.
//!
//! Proves:
//! 1. The goal layout yields an empty path from every algorithm
//! 2. BFS and A* (Manhattan) find optimal paths of equal length
//! 3. IDS returns exactly the BFS path
//! 4. Every returned path replays against the puzzle
//! 5. DLS respects its depth limit
//! 6. BFS and A* never expand a state twice
//! 7. Stronger heuristics expand no more states

use std::cell::RefCell;
use std::collections::BTreeSet;

use lock_tests::{instances, shallow_instances};
use lodestar_harness::worlds::eight_puzzle::{EightPuzzle, PuzzleHeuristic, PuzzleMove, PuzzleState};
use lodestar_kernel::proof::hash::ContentHash;
use lodestar_search::contract::{StateSpace, Successor};
use lodestar_search::informed::astar;
use lodestar_search::path::verify_path;
use lodestar_search::policy::SearchPolicy;
use lodestar_search::report::TerminationReason;
use lodestar_search::uninformed::{breadth_first, depth_limited, iterative_deepening};

fn manhattan() -> EightPuzzle {
    EightPuzzle::new(PuzzleHeuristic::Manhattan)
}

// ---------------------------------------------------------------------------
// 1. Goal as initial state
// ---------------------------------------------------------------------------

#[test]
fn goal_initial_state_yields_empty_path_everywhere() {
    let space = manhattan();
    let goal = PuzzleState::goal();
    let policy = SearchPolicy::default();

    let outcomes = [
        breadth_first(&space, &goal, &policy).unwrap(),
        astar(&space, &goal, &policy).unwrap(),
        iterative_deepening(&space, &goal, &policy).unwrap(),
        depth_limited(&space, &goal, 0, &policy).unwrap(),
    ];
    for outcome in outcomes {
        let path = outcome.path.expect("goal is its own solution");
        assert!(path.actions.is_empty());
        assert!(path.states.is_empty());
        assert_eq!(outcome.stats.expanded, 0);
    }
}

// ---------------------------------------------------------------------------
// 2-4. Optimality, IDS/BFS agreement, replay
// ---------------------------------------------------------------------------

#[test]
fn bfs_and_astar_lengths_match_known_optimum() {
    let space = manhattan();
    for instance in instances() {
        let bfs = breadth_first(&space, &instance.state, &SearchPolicy::default()).unwrap();
        let star = astar(&space, &instance.state, &SearchPolicy::default()).unwrap();

        assert_eq!(bfs.path_len(), Some(instance.optimal_len), "{}", instance.name);
        assert_eq!(star.path_len(), bfs.path_len(), "{}", instance.name);

        for outcome in [&bfs, &star] {
            let path = outcome.path.as_ref().unwrap();
            verify_path(&space, &instance.state, path).unwrap();
            assert_eq!(path.actions.len(), path.states.len());
            assert_eq!(path.last_state().copied().unwrap_or(instance.state), PuzzleState::goal());
        }
    }
}

#[test]
fn ids_returns_the_bfs_path() {
    let space = manhattan();
    for instance in shallow_instances() {
        let bfs = breadth_first(&space, &instance.state, &SearchPolicy::default()).unwrap();
        let ids = iterative_deepening(&space, &instance.state, &SearchPolicy::default()).unwrap();

        let bfs_path = bfs.path.unwrap();
        let ids_path = ids.path.unwrap();
        assert_eq!(ids_path.actions, bfs_path.actions, "{}", instance.name);
        assert_eq!(ids_path.states, bfs_path.states, "{}", instance.name);
        verify_path(&space, &instance.state, &ids_path).unwrap();

        let expected_iterations = u64::try_from(instance.optimal_len.max(1)).unwrap();
        assert_eq!(ids.stats.iterations, expected_iterations, "{}", instance.name);
    }
}

#[test]
fn three_move_scramble_solution_is_locked() {
    let space = manhattan();
    let instance = &instances()[1];
    let outcome = astar(&space, &instance.state, &SearchPolicy::default()).unwrap();
    let ids: Vec<u8> = outcome
        .path
        .unwrap()
        .actions
        .iter()
        .map(|a| a.id())
        .collect();
    assert_eq!(ids, vec![1, 4, 2]);
}

// ---------------------------------------------------------------------------
// 5. DLS depth bound
// ---------------------------------------------------------------------------

#[test]
fn dls_paths_never_exceed_the_limit() {
    let space = manhattan();
    let instance = &instances()[2];
    for limit in 0..=8u32 {
        let outcome =
            depth_limited(&space, &instance.state, limit, &SearchPolicy::default()).unwrap();
        match outcome.path {
            Some(path) => {
                assert!(path.len() <= limit as usize, "limit {limit}");
                assert!(path.len() >= instance.optimal_len);
                verify_path(&space, &instance.state, &path).unwrap();
            }
            None => {
                assert!((limit as usize) < instance.optimal_len, "limit {limit}");
                assert_eq!(outcome.termination, TerminationReason::DepthLimitReached);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 6. No duplicate expansion
// ---------------------------------------------------------------------------

/// Records the id of every state handed to `successors`.
struct Recording {
    inner: EightPuzzle,
    expanded: RefCell<Vec<ContentHash>>,
}

impl StateSpace for Recording {
    type State = PuzzleState;
    type Action = PuzzleMove;
    type Id = ContentHash;

    fn is_goal(&self, state: &PuzzleState) -> bool {
        self.inner.is_goal(state)
    }

    fn successors(&self, state: &PuzzleState) -> Vec<Successor<PuzzleMove, PuzzleState>> {
        self.expanded.borrow_mut().push(state.fingerprint());
        self.inner.successors(state)
    }

    fn unique_id(&self, state: &PuzzleState) -> ContentHash {
        self.inner.unique_id(state)
    }

    fn heuristic(&self, state: &PuzzleState) -> i64 {
        self.inner.heuristic(state)
    }
}

#[test]
fn bfs_and_astar_never_expand_a_closed_state() {
    for instance in instances() {
        for heuristic in PuzzleHeuristic::ALL {
            let space = Recording {
                inner: EightPuzzle::new(heuristic),
                expanded: RefCell::new(Vec::new()),
            };
            let _ = astar(&space, &instance.state, &SearchPolicy::default()).unwrap();
            let expanded = space.expanded.take();
            let unique: BTreeSet<_> = expanded.iter().collect();
            assert_eq!(unique.len(), expanded.len(), "astar {}", instance.name);
        }

        let space = Recording {
            inner: manhattan(),
            expanded: RefCell::new(Vec::new()),
        };
        let outcome = breadth_first(&space, &instance.state, &SearchPolicy::default()).unwrap();
        let expanded = space.expanded.take();
        let unique: BTreeSet<_> = expanded.iter().collect();
        assert_eq!(unique.len(), expanded.len(), "bfs {}", instance.name);
        assert_eq!(outcome.stats.expanded, expanded.len() as u64);
    }
}

// ---------------------------------------------------------------------------
// 7. Heuristic strength
// ---------------------------------------------------------------------------

#[test]
fn stronger_heuristics_expand_fewer_states() {
    for instance in instances() {
        let expanded: Vec<u64> = [
            PuzzleHeuristic::Manhattan,
            PuzzleHeuristic::MisplacedTiles,
            PuzzleHeuristic::Zero,
        ]
        .into_iter()
        .map(|h| {
            let outcome =
                astar(&EightPuzzle::new(h), &instance.state, &SearchPolicy::default()).unwrap();
            assert_eq!(outcome.path_len(), Some(instance.optimal_len));
            outcome.stats.expanded
        })
        .collect();
        assert!(expanded[0] <= expanded[1], "{}: {expanded:?}", instance.name);
        assert!(expanded[1] <= expanded[2], "{}: {expanded:?}", instance.name);
    }
}

#[test]
fn astar_expansion_counts_are_locked() {
    let ten = &instances()[3];
    let count = |h| {
        astar(&EightPuzzle::new(h), &ten.state, &SearchPolicy::default())
            .unwrap()
            .stats
            .expanded
    };
    assert_eq!(count(PuzzleHeuristic::Manhattan), 22);
    assert_eq!(count(PuzzleHeuristic::MisplacedTiles), 56);
    assert_eq!(count(PuzzleHeuristic::Zero), 865);
}

#[test]
fn expansion_budget_stops_astar() {
    let sixteen = &instances()[4];
    let outcome = astar(
        &manhattan(),
        &sixteen.state,
        &SearchPolicy::with_max_expansions(10),
    )
    .unwrap();
    assert!(outcome.path.is_none());
    assert_eq!(outcome.termination, TerminationReason::ExpansionBudgetExceeded);
    assert_eq!(outcome.stats.expanded, 10);
}
