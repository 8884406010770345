use std::collections::BTreeMap;
use serde::Serialize;

use crate::errors::ModelError;
use crate::item::ItemName;

/// Stock level of one item after an adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Still on hand with the given positive quantity.
    Stocked(i64),
    /// Reached zero or below; the key was removed.
    Depleted,
}

/// Item name -> quantity. Never holds a non-positive quantity.
///
/// Iterates in item-name order. Serializes as a plain JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StockMap {
    items: BTreeMap<String, i64>,
}

impl StockMap {
    pub fn new() -> Self { Self::default() }

    /// Build from raw decoded entries, dropping anything that breaks the
    /// invariant. Returns the map and the rejected `(name, quantity)` pairs.
    pub fn from_raw(raw: BTreeMap<String, i64>) -> (Self, Vec<(String, i64)>) {
        let (kept, rejected): (BTreeMap<_, _>, BTreeMap<_, _>) = raw
            .into_iter()
            .partition(|(name, qty)| *qty > 0 && !name.trim().is_empty());
        (Self { items: kept }, rejected.into_iter().collect())
    }

    /// Quantity on hand, 0 when absent.
    pub fn get(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool { self.items.contains_key(item) }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn as_map(&self) -> &BTreeMap<String, i64> { &self.items }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Add `delta` (any sign) to the current quantity, treating absent as 0.
    /// A result <= 0 removes the key.
    pub fn adjust(&mut self, item: &ItemName, delta: i64) -> Result<Level, ModelError> {
        let current = self.get(item.as_str());
        let next = current.checked_add(delta).ok_or_else(|| ModelError::Overflow {
            item: item.to_string(),
            current,
            delta,
        })?;
        if next <= 0 {
            self.items.remove(item.as_str());
            Ok(Level::Depleted)
        } else {
            self.items.insert(item.to_string(), next);
            Ok(Level::Stocked(next))
        }
    }

    /// Names with quantity strictly below `threshold`, in iteration order.
    pub fn below(&self, threshold: i64) -> Vec<String> {
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}
