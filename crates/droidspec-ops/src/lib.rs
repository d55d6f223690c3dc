//! High-level operations wiring CLI commands to the descriptor core.

pub mod ops_artifacts;
pub mod ops_check;
pub mod ops_init;
pub mod ops_resolve;
pub mod ops_setup;
