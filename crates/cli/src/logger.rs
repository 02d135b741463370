use std::sync::Once;

use tracing_subscriber::{fmt::format::FmtSpan, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// A simple logger writing to stderr, so it never mixes with the report on stdout.
///
/// Set the `RUST_LOG` environment variable to `info` or `debug` to see resolved paths and the
/// commands being run.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        tracing_subscriber::fmt::Subscriber::builder()
            .compact()
            .with_file(false)
            .with_target(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .with_span_events(FmtSpan::CLOSE)
            .finish()
            .init();
    });
}
