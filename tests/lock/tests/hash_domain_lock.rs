//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique and null-terminated
//! 3. All domains follow the `LODESTAR::*::V1\0` naming convention
//! 4. Golden fingerprints for the two world encodings are stable
//! 5. No raw `LODESTAR::` domain literals in production source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use lodestar_harness::worlds::eight_puzzle::PuzzleState;
use lodestar_harness::worlds::tictactoe::Board;
use lodestar_kernel::proof::hash_domain::HashDomain;

// ---------------------------------------------------------------------------
// 1. Canonical set count
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        7,
        "expected 7 domain variants; if you added a new domain, update this count"
    );
}

// ---------------------------------------------------------------------------
// 2. Unique, null-terminated bytes
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_unique_and_null_terminated() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain} is not null-terminated"
        );
    }
}

// ---------------------------------------------------------------------------
// 3. Naming convention
// ---------------------------------------------------------------------------

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"LODESTAR::"),
            "{domain} does not start with LODESTAR::"
        );
        assert!(
            bytes.ends_with(b"::V1\0"),
            "{domain} does not end with ::V1\\0"
        );
    }
}

// ---------------------------------------------------------------------------
// 4. Golden fingerprints
// ---------------------------------------------------------------------------

#[test]
fn puzzle_state_domain_bytes_locked() {
    assert_eq!(
        hex::encode(HashDomain::PuzzleState.as_bytes()),
        "4c4f4445535441523a3a50555a5a4c455f53544154453a3a563100"
    );
}

#[test]
fn goal_puzzle_fingerprint_locked() {
    assert_eq!(
        PuzzleState::goal().fingerprint().as_str(),
        "sha256:c22de9d6e0c86ea7107711f6305c273cac09bae4a13900788b86ccbf0bbcee89"
    );
}

#[test]
fn empty_board_fingerprint_locked() {
    let fingerprint = Board::empty().fingerprint();
    assert_eq!(
        fingerprint.hex_digest(),
        "ec9d4eee8dbb12e759dd48dec8b7fe7720dc1f80805504aae2423f47b8a9c2b3"
    );
    assert_eq!(hex::decode(fingerprint.hex_digest()).map(|d| d.len()), Ok(32));
}

// ---------------------------------------------------------------------------
// 5. No raw LODESTAR:: domain literals in production source
// ---------------------------------------------------------------------------

/// Scan kernel/, search/, harness/ source for `b"LODESTAR::` literals.
/// The only file allowed to contain them is `hash_domain.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let pattern = "b\"LODESTAR::";
    let authority_file = "hash_domain.rs";
    let mut violations = Vec::new();

    for dir in ["kernel/src", "search/src", "harness/src"] {
        for path in rust_files(&workspace_root().join(dir)) {
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.starts_with("//") {
                    continue;
                }
                if trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw LODESTAR:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

/// The search crate must not reach into concrete worlds.
#[test]
fn search_crate_does_not_depend_on_harness() {
    let manifest = std::fs::read_to_string(workspace_root().join("search/Cargo.toml"))
        .expect("search/Cargo.toml must exist");
    assert!(!manifest.contains("lodestar-harness"));

    for path in rust_files(&workspace_root().join("search/src")) {
        let content = std::fs::read_to_string(&path).expect("readable source");
        for line in content.lines().map(str::trim) {
            if line.starts_with("//") {
                continue;
            }
            assert!(
                !line.contains("lodestar_harness"),
                "{} references lodestar_harness: {line}",
                path.display()
            );
        }
    }
}

/// lock-tests lives at tests/lock/, so the workspace root is ../..
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
        .to_path_buf()
}

/// Simple recursive walker over `.rs` files.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(rust_files(&path));
            } else if path.extension().is_some_and(|e| e == "rs") {
                results.push(path);
            }
        }
    }
    results
}
