//! Tracing setup for the `stat-radar` binary and embedding hosts.
//!
//! Nothing here runs implicitly: call `init_default_tracing` once at startup,
//! or install your own `tracing` subscriber instead.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `DEFAULT_LOG_DIRECTIVE`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_LOG_DIRECTIVE)
}

/// Like `init_default_tracing` with a caller-chosen fallback directive.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
