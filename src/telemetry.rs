//! Opt-in tracing setup for hosts embedding `mobility-chart`.
//!
//! The library only emits `tracing` events. Hosts either call one of the
//! helpers below or install their own subscriber.

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG` or [`DEFAULT_FILTER`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact fmt subscriber, falling back to `fallback_filter` when
/// `RUST_LOG` is unset or unparsable.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
