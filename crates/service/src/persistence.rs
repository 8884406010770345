//! Loading and saving the stock map as a JSON file.
//!
//! A missing file and a malformed file both load as an empty map; the
//! difference is visible through `LoadStatus` and the log level.

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tracing::{error, info, warn};

use models::StockMap;
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;
use crate::storage::repository::StockRepository;

pub use configs::DEFAULT_INVENTORY_FILE;

/// How a `load` obtained its map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    Missing,
    Malformed,
}

/// Stock map persisted to one JSON file.
#[derive(Clone)]
pub struct StockFile {
    store: JsonMapStore<String, i64>,
}

impl StockFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { store: JsonMapStore::new(path) }
    }

    pub fn path(&self) -> &Path { self.store.path() }

    /// Load the map and report which case applied.
    /// Only I/O failures other than "not found" are returned as errors.
    pub async fn load_with_status(&self) -> Result<(StockMap, LoadStatus), ServiceError> {
        let path = self.path().display();
        match self.store.read().await {
            Ok(Some(raw)) => {
                let (stock, rejected) = StockMap::from_raw(raw);
                for (item, quantity) in &rejected {
                    warn!(%path, item = %item, quantity = *quantity, "dropping entry with invalid name or non-positive quantity");
                }
                info!(%path, items = stock.len(), "loaded data");
                Ok((stock, LoadStatus::Loaded))
            }
            Ok(None) => {
                warn!(%path, "file not found");
                Ok((StockMap::new(), LoadStatus::Missing))
            }
            Err(ServiceError::Json(e)) => {
                error!(%path, error = %e, "error decoding JSON");
                Ok((StockMap::new(), LoadStatus::Malformed))
            }
            Err(e) => {
                error!(%path, error = %e, "error reading data");
                Err(e)
            }
        }
    }

    pub async fn load(&self) -> Result<StockMap, ServiceError> {
        self.load_with_status().await.map(|(stock, _)| stock)
    }

    /// Overwrite the file with `stock`. Failures are logged and returned.
    pub async fn save(&self, stock: &StockMap) -> Result<(), ServiceError> {
        let path = self.path().display();
        match self.store.write(stock.as_map()).await {
            Ok(()) => {
                info!(%path, items = stock.len(), "saved data");
                Ok(())
            }
            Err(e) => {
                error!(%path, error = %e, "error saving data");
                Err(e)
            }
        }
    }
}

impl Default for StockFile {
    fn default() -> Self { Self::new(DEFAULT_INVENTORY_FILE) }
}

#[async_trait]
impl StockRepository for StockFile {
    async fn load(&self) -> Result<StockMap, ServiceError> { self.load().await }
    async fn save(&self, stock: &StockMap) -> Result<(), ServiceError> { self.save(stock).await }
}

/// Load from `path`; see [`StockFile::load`].
pub async fn load(path: impl Into<PathBuf>) -> Result<StockMap, ServiceError> {
    StockFile::new(path).load().await
}

/// Save to `path`; see [`StockFile::save`].
pub async fn save(stock: &StockMap, path: impl Into<PathBuf>) -> Result<(), ServiceError> {
    StockFile::new(path).save(stock).await
}
