//! In-memory stock operations.
//!
//! Every failure is logged at warn level (bad input, missing item) and also
//! returned as a `ServiceError`, so callers may ignore or inspect it.

use tracing::{info, warn};

use models::{ActivityLog, ItemName, Level, StockMap};
use crate::errors::ServiceError;

pub use configs::DEFAULT_LOW_STOCK_THRESHOLD;

/// Result of a successful `remove`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    Decremented { remaining: i64 },
    Depleted,
}

/// Stock map plus the activity log of the current run.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    stock: StockMap,
    activity: ActivityLog,
}

impl Inventory {
    pub fn new() -> Self { Self::default() }

    /// Start from a previously loaded map with an empty activity log.
    pub fn from_stock(stock: StockMap) -> Self {
        Self { stock, activity: ActivityLog::new() }
    }

    pub fn stock(&self) -> &StockMap { &self.stock }

    pub fn activity(&self) -> &ActivityLog { &self.activity }

    /// Add `quantity` (any sign) to `item` and record it in the activity log.
    ///
    /// A total that ends at zero or below removes the item.
    pub fn add(&mut self, item: &str, quantity: i64) -> Result<Level, ServiceError> {
        let name = parse_name(item, quantity)?;
        let level = self.stock.adjust(&name, quantity).map_err(|e| {
            warn!(item, quantity, error = %e, "invalid quantity for item");
            ServiceError::from(e)
        })?;
        let entry = self.activity.record_added(&name, quantity);
        info!(item = %name, quantity, at = %entry.at, "added units");
        if level == Level::Depleted {
            info!(item = %name, "stock depleted by addition; item removed");
        }
        Ok(level)
    }

    /// Take `quantity` of `item` out of stock. Reaching zero or below
    /// removes the item entirely.
    pub fn remove(&mut self, item: &str, quantity: i64) -> Result<Removal, ServiceError> {
        let name = parse_name(item, quantity)?;
        if !self.stock.contains(name.as_str()) {
            warn!(item = %name, "attempted to remove missing item");
            return Err(ServiceError::ItemNotFound(name.into_inner()));
        }
        let delta = quantity.checked_neg().ok_or_else(|| {
            warn!(item = %name, quantity, "quantity cannot be negated");
            ServiceError::InvalidArgument(format!("quantity {quantity} out of range"))
        })?;
        match self.stock.adjust(&name, delta) {
            Ok(Level::Depleted) => {
                info!(item = %name, "removed completely");
                Ok(Removal::Depleted)
            }
            Ok(Level::Stocked(remaining)) => {
                info!(item = %name, quantity, remaining, "removed units");
                Ok(Removal::Decremented { remaining })
            }
            Err(e) => {
                warn!(item = %name, quantity, error = %e, "invalid quantity for item");
                Err(e.into())
            }
        }
    }

    /// Quantity on hand, 0 when the item is unknown.
    pub fn get_quantity(&self, item: &str) -> i64 { self.stock.get(item) }

    /// Items with quantity strictly below `threshold`, in iteration order.
    pub fn check_low_items(&self, threshold: i64) -> Vec<String> { self.stock.below(threshold) }
}

fn parse_name(item: &str, quantity: i64) -> Result<ItemName, ServiceError> {
    ItemName::parse(item).map_err(|e| {
        warn!(item, quantity, error = %e, "invalid item or quantity");
        ServiceError::from(e)
    })
}
