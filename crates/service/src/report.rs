//! Human-readable inventory report. Presentation only; not meant to be parsed.

use std::io::{self, Write};
use tracing::info;

use models::StockMap;
use crate::errors::ServiceError;

const HEADER: &str = "------ Inventory Report ------";
const FOOTER: &str = "------------------------------";

/// Bordered report, one `item -> quantity` line per item in iteration order.
pub fn render_report(stock: &StockMap) -> String {
    let mut text = format!("\n{HEADER}\n");
    for (item, quantity) in stock.iter() {
        text.push_str(&format!("{item} -> {quantity}\n"));
    }
    text.push_str(FOOTER);
    text.push('\n');
    text
}

pub fn write_report<W: Write + ?Sized>(out: &mut W, stock: &StockMap) -> Result<(), ServiceError> {
    info!(items = stock.len(), "printing inventory report");
    out.write_all(render_report(stock).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| ServiceError::Io(format!("report output: {e}")))
}

/// Print the report to stdout; `write_report` on a locked stdout handle.
pub fn print_data(stock: &StockMap) -> Result<(), ServiceError> {
    write_report(&mut io::stdout().lock(), stock)
}
