//! Structured logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary. Logs go to stderr so stdout carries nothing but reports.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "netgraph=warn";

/// Installs a `tracing-subscriber` formatter honouring `RUST_LOG`.
///
/// `verbosity` raises the default level (1 = info, 2 = debug, 3+ = trace) and
/// is ignored when `RUST_LOG` is set. Repeated calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // try_init so repeated initialisation in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_FILTER,
        1 => "netgraph=info",
        2 => "netgraph=debug",
        _ => "netgraph=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(0), DEFAULT_FILTER);
        assert_eq!(default_directive(2), "netgraph=debug");
        assert_eq!(default_directive(9), "netgraph=trace");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(0);
        init_logging(3);
    }
}
