//! Lodestar Kernel: canonical hashing and canonical JSON for the search stack.
//!
//! # API Surface
//!
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hash
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//!
//! The kernel knows nothing about states, nodes or games. `lodestar_search`
//! uses it for state fingerprints and report digests.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
