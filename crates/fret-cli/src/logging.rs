use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global subscriber. `RUST_LOG` wins over the level flag;
/// JSON output is for machine consumption of the warning stream.
pub fn init_logging(level: Level, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .json()
            .with_writer(std::io::stderr)
            .finish();
        // Ignore error if a global subscriber is already set (e.g., in tests).
        let _ = tracing::subscriber::set_global_default(subscriber);
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}
