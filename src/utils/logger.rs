use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// `RUST_LOG` wins; otherwise the crate logs at info, or debug when verbose.
fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "small_catalog=debug,info"
    } else {
        "small_catalog=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber. Events go to stderr so they never mix
/// with the menu on stdout; `json` picks the JSON layer over the compact one.
pub fn init_logger(verbose: bool, json: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);
    let layer = if json {
        layer.json().boxed()
    } else {
        layer.compact().boxed()
    };

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(layer)
        .init();
}
