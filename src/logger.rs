use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the given verbosity
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "byte_lens=debug" } else { "warn" }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_log(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_follows_verbosity() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "byte_lens=debug");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_log(false);
        init_log(true);
        tracing::debug!("logger initialized twice");
    }
}
