use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter applied when neither `RUST_LOG` nor the configuration supply one.
pub const DEFAULT_LOG_FILTER: &str = "lending_core=info";

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. A subscriber installed
/// earlier by the host application is left in place.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
