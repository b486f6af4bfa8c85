use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "billsplit=warn";
const VERBOSE_FILTER: &str = "billsplit=debug";

/// Install the stderr tracing subscriber.
/// `RUST_LOG` takes precedence over the `verbose` flag. Calling this more than
/// once is harmless: later calls leave the first subscriber in place.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
