use clap::Parser;
use freight_quote::config::toml_config::{MatchingConfig, QuoteJobConfig};
use freight_quote::core::{ConfigProvider, Pipeline};
use freight_quote::utils::{logger, validation::Validate};
use freight_quote::{ComparisonPipeline, LocalStorage, QuoteEngine};

#[derive(Parser)]
#[command(name = "toml-quote")]
#[command(about = "Quote comparison driven by a TOML job file")]
struct Args {
    /// Path to TOML job file
    #[arg(short, long, default_value = "quote-job.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the number of port suggestions from the job file
    #[arg(long)]
    suggestions: Option<usize>,

    /// Compare and print the result without writing reports
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match QuoteJobConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load job file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if config.json_logging() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based quote comparison");
    tracing::info!("📁 Job loaded from: {}", args.config);

    if let Some(suggestions) = args.suggestions {
        let matching = config
            .matching
            .get_or_insert(MatchingConfig { suggestions: None });
        matching.suggestions = Some(suggestions);
        tracing::info!("🔧 Port suggestions overridden to: {}", suggestions);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    let pipeline = ComparisonPipeline::new(LocalStorage::default(), config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No reports will be written");
        perform_dry_run(&pipeline)?;
        return Ok(());
    }

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

fn display_config_summary(config: &QuoteJobConfig, args: &Args) {
    println!("📋 Job Summary:");
    println!("  Job: {}", config.job.name);
    if let Some(description) = &config.job.description {
        println!("  Description: {}", description);
    }
    println!("  Request: {}", config.input_file());
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.output_formats().join(", "));
    println!("  Port suggestions: {}", config.suggestion_count());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run<P: Pipeline>(pipeline: &P) -> Result<(), Box<dyn std::error::Error>> {
    let request = pipeline.extract()?;
    let outcome = pipeline.transform(request)?;

    println!("🔍 Dry Run Result:");
    println!();
    println!("⚖️ Best option per dimension (-1 = no clear winner):");
    for result in &outcome.comparison.dimensions {
        println!("  {:<24} {}", result.dimension.label(), result.best_index);
    }
    println!("  {:<24} {}", "overall (grand total)", outcome.comparison.overall_best);

    if let Some(port) = &outcome.port {
        println!();
        println!("⚓ Port for {}:", port.city);
        match &port.matched {
            Some(matched) => println!("  {} ({})", matched.name, matched.country),
            None => println!("  no match"),
        }
        for suggestion in &port.suggestions {
            match suggestion.distance_km {
                Some(km) => println!("  - {} {:.0} km", suggestion.port.name, km),
                None => println!("  - {} (no coordinates)", suggestion.port.name),
            }
        }
    }

    println!();
    println!("✅ Dry run complete. Run without --dry-run to write reports.");

    Ok(())
}
