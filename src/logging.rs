use tracing_subscriber::EnvFilter;

const RELEASE_LEVEL: &str = "info";
const DEBUG_LEVEL: &str = "debug";

/// Pick the log filter. Release builds are pinned to `info` so a stray
/// `RUST_LOG` in the user's shell can't flood the console with per-segment
/// brush chatter; debug builds default to `debug` and honour `RUST_LOG`.
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEBUG_LEVEL))
    } else {
        EnvFilter::new(RELEASE_LEVEL)
    }
}

/// Install the console subscriber. Safe to call twice (tests, re-init);
/// the second call is a no-op.
pub fn init(debug: bool) {
    let filter = filter(debug);
    let directives = filter.to_string();

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok() {
        tracing::debug!(%directives, "logging initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::{filter, init};

    #[test]
    fn release_filter_is_pinned_to_info() {
        assert_eq!(filter(false).to_string(), "info");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
