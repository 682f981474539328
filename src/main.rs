use clap::Parser;
use freight_quote::utils::{logger, validation::Validate};
use freight_quote::{CliConfig, ComparisonPipeline, LocalStorage, QuoteEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting freight-quote CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let pipeline = ComparisonPipeline::new(LocalStorage::default(), config);
    let engine = QuoteEngine::new(pipeline);

    match engine.run() {
        Ok(output) => {
            tracing::info!("✅ Quote comparison completed");
            println!("✅ Quote comparison completed");
            println!("📁 Reports: {}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Quote comparison failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
