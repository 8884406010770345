//! Service layer for the inventory tracker.
//! - `inventory`: add/remove/query operations over the stock map.
//! - `persistence`: JSON file load/save with tolerant missing/malformed handling.
//! - `report`: the printed inventory report.
//! - `demo`: the scripted walkthrough the binary runs.

pub mod errors;
pub mod storage;
pub mod inventory;
pub mod persistence;
pub mod report;
pub mod demo;

pub use errors::ServiceError;
pub use inventory::{Inventory, Removal};
pub use persistence::{LoadStatus, StockFile};
pub use storage::repository::{MemoryStockRepository, StockRepository};
