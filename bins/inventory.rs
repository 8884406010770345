use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

use service::{demo, StockFile};

fn main() -> std::process::ExitCode {
    // .env may carry RUST_LOG / CONFIG_PATH
    dotenv().ok();

    let config = configs::AppConfig::load_and_validate();
    let format = match &config {
        Ok(cfg) => cfg.logging.format.as_str(),
        Err(_) => "compact",
    };
    common::utils::logging::init_logging(format);

    let run_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");
    info!(service = "inventory", event = "start", %run_id, pid, version, "inventory walkthrough starting");

    let config = config.unwrap_or_else(|e| {
        warn!(service = "inventory", event = "config_invalid", error = %e, "using default configuration");
        configs::AppConfig::default()
    });

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "inventory", event = "panic", %run_id, pid, message = %info, "unhandled panic occurred");
    }));

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "inventory", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    let file = StockFile::new(&config.inventory.file_path);
    let threshold = config.inventory.low_stock_threshold;
    let result = rt.block_on(async {
        let mut stdout = std::io::stdout().lock();
        demo::run(&file, threshold, &mut stdout).await
    });

    match result {
        Ok(summary) => {
            info!(service = "inventory", event = "stop", %run_id, saved = summary.saved, printed = summary.printed, "inventory walkthrough finished");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "inventory", event = "run_failed", %run_id, error = %e, "inventory walkthrough failed");
            std::process::ExitCode::FAILURE
        }
    }
}
