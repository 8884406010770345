use async_trait::async_trait;
use tokio::sync::RwLock;

use models::StockMap;
use crate::errors::ServiceError;

/// Trait abstraction for stock map persistence.
/// Implementations can be file-backed or purely in memory.
#[async_trait]
pub trait StockRepository: Send + Sync {
    async fn load(&self) -> Result<StockMap, ServiceError>;
    async fn save(&self, stock: &StockMap) -> Result<(), ServiceError>;
}

/// Keeps the last saved map in memory. Loading before any save yields an
/// empty map, matching a missing file.
#[derive(Default)]
pub struct MemoryStockRepository {
    inner: RwLock<Option<StockMap>>,
}

impl MemoryStockRepository {
    pub fn new() -> Self { Self::default() }

    /// Number of items in the last saved snapshot, if any save happened.
    pub async fn saved_len(&self) -> Option<usize> {
        self.inner.read().await.as_ref().map(StockMap::len)
    }
}

#[async_trait]
impl StockRepository for MemoryStockRepository {
    async fn load(&self) -> Result<StockMap, ServiceError> {
        Ok(self.inner.read().await.clone().unwrap_or_default())
    }

    async fn save(&self, stock: &StockMap) -> Result<(), ServiceError> {
        *self.inner.write().await = Some(stock.clone());
        Ok(())
    }
}
