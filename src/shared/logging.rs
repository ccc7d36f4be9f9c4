use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "linkboard=debug,info";

/// Installs the global subscriber. `RUST_LOG` overrides [`DEFAULT_FILTER`].
/// Calling this twice is harmless; the second call is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("logging initialized");
    }
}
