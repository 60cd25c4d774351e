//! Opt-in JSONL trace output, enabled by the `trace` feature.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "translit_engine=debug,translit_core=debug";

/// Route `tracing` events to `<log_dir>/translit-trace.jsonl`. Only the first
/// call has any effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "translit-trace.jsonl");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        // The host process outlives any scope we could hold the guard in.
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .init();

        tracing::info!(version = env!("CARGO_PKG_VERSION"), "tracing initialized");
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
