//! Lodestar Harness: concrete worlds and run orchestration.
//!
//! The harness wires the generic algorithms in `lodestar_search` to two
//! hand-defined domains and packages each run as a canonical, hashed
//! report.
//!
//! The harness does NOT implement search logic; it delegates to the search
//! crate. Worlds provide domain data only; the harness owns orchestration.

#![forbid(unsafe_code)]

pub mod policy;
pub mod runner;
pub mod transcript;
pub mod worlds;
