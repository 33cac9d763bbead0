//! Proof module: canonical hashing and canonical serialization.
//!
//! `hash_domain` is the only place domain separator bytes are spelled out.

pub mod canon;
pub mod hash;
pub mod hash_domain;
