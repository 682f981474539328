use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGET: &str = "freight_quote";

/// Directive applied when `RUST_LOG` is unset. Verbose runs keep dependencies at info.
fn default_directive(level: &str, verbose: bool) -> String {
    if verbose {
        format!("{CRATE_TARGET}=debug,info")
    } else {
        format!("{CRATE_TARGET}={level}")
    }
}

/// `RUST_LOG` wins over the built-in directive.
fn env_filter(level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level, verbose)))
}

fn event_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter("info", verbose))
        .with(event_layer().compact())
        .init();
}

/// Same filter rules as the CLI logger, but one JSON object per event.
pub fn init_json_logger(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(level.unwrap_or("info"), false))
        .with(event_layer().json())
        .init();
}
