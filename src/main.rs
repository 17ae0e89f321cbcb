use clap::Parser;
use sudoku_audit::utils::{logger, validation::Validate};
use sudoku_audit::{AuditEngine, CliConfig, ConfigProvider, ConsoleSink, FileGridSource};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sudoku-audit");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let source = FileGridSource::new(config.input_path());
    let engine =
        AuditEngine::new_with_monitoring(source, ConsoleSink, config.workers(), config.monitor);

    match engine.run().await {
        Ok(outcome) => {
            // An invalid grid is a reported result, not a process error:
            // the process still exits 0 after printing the verdict.
            if outcome.is_valid() {
                tracing::info!("✅ Grid validated: all 27 regions are duplicate-free");
            } else {
                tracing::info!(
                    "Grid rejected: {} invalid rows, {} invalid columns, {} invalid subgrids",
                    outcome.invalid_rows(),
                    outcome.invalid_columns(),
                    outcome.invalid_subgrids()
                );
            }
        }
        Err(e) => {
            tracing::error!("❌ Validation aborted: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
