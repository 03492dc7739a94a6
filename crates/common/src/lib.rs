//! Shared plumbing for the gradebook crates: logging setup, startup
//! environment checks and small response types.

pub mod types;
pub mod utils;
pub mod env;
