//! Data types for the inventory tracker.
//! - `StockMap` owns the item -> quantity invariant (no non-positive entries).
//! - `ItemName` rejects blank names at construction.
//! - `ActivityLog` is the per-run record of additions.

pub mod errors;
pub mod item;
pub mod stock;
pub mod activity;

pub use activity::{ActivityLog, LogEntry};
pub use item::ItemName;
pub use stock::{Level, StockMap};

#[cfg(test)]
mod tests;
