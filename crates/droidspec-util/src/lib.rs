//! Shared utilities for droidspec.
//!
//! This crate provides cross-cutting concerns used by all other droidspec
//! crates: error types, filesystem helpers, hashing, and terminal status
//! output.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
