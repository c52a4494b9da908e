//! Logging setup.
//!
//! Log output goes to stderr so it never mixes with data an embedding
//! process writes to stdout.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `config.log_level` is used.
/// Returns `false` if a subscriber was already installed, which makes the
/// call safe to repeat from tests.
pub fn init(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_repeatable() {
        let config = Config::default();
        init(&config);
        assert!(!init(&config));
    }
}
