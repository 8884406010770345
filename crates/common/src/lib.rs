//! Shared runtime helpers for the inventory workspace.
//!
//! - `utils::logging`: one-shot tracing subscriber setup for binaries.
//! - `env`: filesystem sanity checks used before touching data files.

pub mod utils;
pub mod env;
