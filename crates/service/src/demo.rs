//! Scripted walkthrough used by the `inventory` binary.

use std::io::Write;
use tracing::{debug, info, warn};

use models::StockMap;
use crate::errors::ServiceError;
use crate::inventory::Inventory;
use crate::report;
use crate::storage::repository::StockRepository;

/// What the walkthrough observed, for callers that want more than stdout.
#[derive(Debug)]
pub struct DemoSummary {
    pub apple_stock: i64,
    pub low_items: Vec<String>,
    pub saved: bool,
    /// False when writing to `out` failed at any point.
    pub printed: bool,
    pub reloaded: StockMap,
    pub additions_logged: usize,
}

/// Add apple(10) and banana(5), remove apple(3) and the absent orange(1),
/// print the apple quantity and low-stock list, save, reload, and print the
/// report of what was reloaded.
///
/// A failed save is logged by the repository and does not stop the run,
/// nor does a failed write to `out`; only an unexpected load failure is
/// returned.
pub async fn run<W: Write + ?Sized>(
    repo: &dyn StockRepository,
    low_stock_threshold: i64,
    out: &mut W,
) -> Result<DemoSummary, ServiceError> {
    let mut inventory = Inventory::new();

    inventory.add("apple", 10)?;
    inventory.add("banana", 5)?;
    inventory.remove("apple", 3)?;
    if let Err(e) = inventory.remove("orange", 1) {
        debug!(error = %e, "expected miss on absent item");
    }

    let apple_stock = inventory.get_quantity("apple");
    let low_items = inventory.check_low_items(low_stock_threshold);
    let mut printed = checked(writeln!(out, "Apple stock: {apple_stock}"));
    printed &= checked(writeln!(out, "Low items: {low_items:?}"));

    let saved = repo.save(inventory.stock()).await.is_ok();
    let reloaded = repo.load().await?;
    if let Err(e) = report::write_report(out, &reloaded) {
        warn!(error = %e, "report not printed");
        printed = false;
    }

    info!(saved, printed, items = reloaded.len(), "walkthrough finished");
    Ok(DemoSummary {
        apple_stock,
        low_items,
        saved,
        printed,
        reloaded,
        additions_logged: inventory.activity().len(),
    })
}

fn checked(res: std::io::Result<()>) -> bool {
    res.map_err(|e| warn!(error = %e, "output line not printed")).is_ok()
}
