use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initialises the global tracing subscriber for binaries.
///
/// The level defaults to the given filter and can be overridden through
/// the `RUST_LOG` environment variable.
pub fn init_tracer(default_level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}
