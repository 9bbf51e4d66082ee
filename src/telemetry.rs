//! Opt-in tracing setup for hosts embedding `scatter-room`.
//!
//! Components only emit `tracing` events; installing a subscriber is left to
//! the host. These helpers cover the common case behind the `telemetry`
//! feature.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG` or `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"scatter_room=debug"` to watch hover and scene transitions.
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    use super::{init_default_tracing, init_tracing_with_fallback_filter};

    #[test]
    fn tracing_init_is_noop_without_feature() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_fallback_filter("scatter_room=trace"));
    }
}
