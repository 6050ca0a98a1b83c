#[cfg(test)]
mod laws;
pub mod list;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a `RUST_LOG`-driven subscriber for the current test binary. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recursion_schemes=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}
