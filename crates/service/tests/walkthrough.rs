use async_trait::async_trait;
use models::StockMap;
use service::{demo, MemoryStockRepository, ServiceError, StockFile, StockRepository};

#[tokio::test]
async fn walkthrough_against_memory_repository() -> Result<(), anyhow::Error> {
    let repo = MemoryStockRepository::new();
    let mut out = Vec::new();

    let summary = demo::run(&repo, 5, &mut out).await?;

    assert_eq!(summary.apple_stock, 7);
    // banana sits exactly at the threshold, which is not "below"
    assert!(summary.low_items.is_empty());
    assert!(summary.saved);
    assert!(summary.printed);
    assert_eq!(summary.additions_logged, 2);
    assert_eq!(summary.reloaded.get("apple"), 7);
    assert_eq!(summary.reloaded.get("banana"), 5);
    assert!(!summary.reloaded.contains("orange"));

    let text = String::from_utf8(out)?;
    assert_eq!(
        text,
        "Apple stock: 7\nLow items: []\n\n------ Inventory Report ------\napple -> 7\nbanana -> 5\n------------------------------\n"
    );
    Ok(())
}

#[tokio::test]
async fn walkthrough_threshold_comes_from_caller() -> Result<(), anyhow::Error> {
    let repo = MemoryStockRepository::new();
    let mut out = Vec::new();
    let summary = demo::run(&repo, 6, &mut out).await?;
    assert_eq!(summary.low_items, vec!["banana"]);
    assert!(String::from_utf8(out)?.contains("Low items: [\"banana\"]"));
    Ok(())
}

#[tokio::test]
async fn walkthrough_writes_expected_file() -> Result<(), anyhow::Error> {
    let dir = std::env::temp_dir().join(format!("inventory_walkthrough_{}", uuid::Uuid::new_v4()));
    let path = dir.join("inventory.json");
    let file = StockFile::new(&path);
    let mut out = Vec::new();

    let summary = demo::run(&file, 5, &mut out).await?;
    assert!(summary.saved);

    let text = tokio::fs::read_to_string(&path).await?;
    assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": 5\n}");
    assert_eq!(file.load().await?, summary.reloaded);

    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}

/// Loads from an inner repository but refuses every save.
struct ReadOnly(MemoryStockRepository);

#[async_trait]
impl StockRepository for ReadOnly {
    async fn load(&self) -> Result<StockMap, ServiceError> { self.0.load().await }
    async fn save(&self, _stock: &StockMap) -> Result<(), ServiceError> {
        Err(ServiceError::Io("read-only".into()))
    }
}

#[tokio::test]
async fn walkthrough_survives_failed_save() -> Result<(), anyhow::Error> {
    let repo = ReadOnly(MemoryStockRepository::new());
    let mut out = Vec::new();

    let summary = demo::run(&repo, 5, &mut out).await?;
    assert!(!summary.saved);
    // nothing was persisted, so the reloaded report is empty
    assert!(summary.reloaded.is_empty());
    assert!(String::from_utf8(out)?.ends_with("------ Inventory Report ------\n------------------------------\n"));
    Ok(())
}

#[tokio::test]
async fn walkthrough_stops_on_unreadable_store() -> Result<(), anyhow::Error> {
    // a directory can be neither written nor read as a stock file
    let file = StockFile::new(std::env::temp_dir());
    let mut out = Vec::new();
    let res = demo::run(&file, 5, &mut out).await;
    assert!(matches!(res, Err(ServiceError::Io(_))));

    // output up to the failed load was still written
    let text = String::from_utf8(out)?;
    assert!(text.starts_with("Apple stock: 7\n"));
    Ok(())
}

/// Every write fails, like stdout on a closed pipe.
struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }
    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

#[tokio::test]
async fn walkthrough_continues_when_output_fails() -> Result<(), anyhow::Error> {
    let repo = MemoryStockRepository::new();

    let summary = demo::run(&repo, 5, &mut ClosedPipe).await?;

    assert!(!summary.printed);
    assert!(summary.saved);
    assert_eq!(summary.reloaded.get("apple"), 7);
    assert_eq!(repo.saved_len().await, Some(2));
    Ok(())
}
