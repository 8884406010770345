//! Storage abstractions for service layer
//!
//! Contains the reusable JSON file codec for small maps and the repository
//! seam the inventory persists through.

pub mod json_map_store;
pub mod repository;
