//! Run report and transcript determinism.
//!
//! Proves:
//! 1. Identical inputs produce byte-identical reports and digests
//! 2. The report digest commits to the configuration
//! 3. Report JSON carries the config digest and the search summary
//! 4. Transcripts are byte-identical across repeated games

use lock_tests::instances;
use lodestar_harness::policy::{Algorithm, RunConfig};
use lodestar_harness::runner::{run_puzzle, RunError};
use lodestar_harness::transcript::{self_play, Decider};
use lodestar_harness::worlds::eight_puzzle::{PuzzleHeuristic, PuzzleState};
use lodestar_harness::worlds::tictactoe::{Board, MoveOrder};
use lodestar_kernel::proof::canon::canonical_json_bytes;
use lodestar_search::policy::TieBreak;

fn configs() -> Vec<RunConfig> {
    vec![
        RunConfig::new(Algorithm::Bfs),
        RunConfig::new(Algorithm::Ids),
        RunConfig::new(Algorithm::Dls { depth_limit: 12 }),
        RunConfig::new(Algorithm::AStar),
        RunConfig::new(Algorithm::AStar).with_heuristic(PuzzleHeuristic::MisplacedTiles),
        RunConfig {
            tie_break: TieBreak::DeepFirst,
            ..RunConfig::default()
        },
    ]
}

#[test]
fn reports_are_byte_identical_across_runs() {
    let six = instances()[2].state;
    for config in configs() {
        let first = run_puzzle(&six, &config).unwrap();
        for _ in 0..3 {
            let again = run_puzzle(&six, &config).unwrap();
            assert_eq!(first.bytes, again.bytes, "{config:?}");
            assert_eq!(first.digest, again.digest, "{config:?}");
        }
    }
}

#[test]
fn every_config_yields_a_distinct_digest() {
    let six = instances()[2].state;
    let digests: std::collections::BTreeSet<_> = configs()
        .iter()
        .map(|c| run_puzzle(&six, c).unwrap().digest)
        .collect();
    assert_eq!(digests.len(), configs().len());
}

#[test]
fn report_bytes_are_already_canonical() {
    let report = run_puzzle(&instances()[3].state, &RunConfig::default()).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&report.bytes).unwrap();
    assert_eq!(canonical_json_bytes(&parsed).unwrap(), report.bytes);

    assert_eq!(parsed["schema_version"], "run_report.v1");
    assert_eq!(parsed["config_digest"], report.config.digest.as_str());
    assert_eq!(parsed["search"]["path_len"], 10);
    assert_eq!(parsed["search"]["termination_reason"], "goal_reached");
    assert_eq!(parsed["action_ids"].as_array().unwrap().len(), 10);
    assert_eq!(parsed["initial"], instances()[3].state.to_compact_string());
}

#[test]
fn budget_exhaustion_is_reported_not_raised() {
    let config = RunConfig {
        max_expansions: Some(3),
        ..RunConfig::new(Algorithm::Bfs)
    };
    let report = run_puzzle(&instances()[4].state, &config).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&report.bytes).unwrap();
    assert!(parsed["search"]["path_len"].is_null());
    assert_eq!(
        parsed["search"]["termination_reason"],
        "expansion_budget_exceeded"
    );
    assert_eq!(parsed["search"]["stats"]["expanded"], 3);
}

#[test]
fn unsolvable_instance_rejected() {
    let swapped = PuzzleState::new([[2, 1, 3], [8, 0, 4], [7, 6, 5]]).unwrap();
    assert!(!swapped.is_solvable());
    assert!(matches!(
        run_puzzle(&swapped, &RunConfig::new(Algorithm::Bfs)),
        Err(RunError::Unsolvable { .. })
    ));
}

#[test]
fn transcripts_are_byte_identical_across_games() {
    for order in MoveOrder::ALL {
        let a = self_play(&Board::empty(), order, Decider::AlphaBeta).unwrap();
        let b = self_play(&Board::empty(), order, Decider::AlphaBeta).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.to_canonical_json_bytes().unwrap(),
            b.to_canonical_json_bytes().unwrap()
        );
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    }
}
