// file: src/logging/logger.rs
// version: 1.0.0
// guid: 9cbb6863-c782-4a30-bbd4-8bdacda544e5

//! Logger initialization and configuration

use crate::{PromptError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Diagnostics are
/// written to stderr; stdout carries only the prompt dialogue.
pub fn init_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| PromptError::Logging(format!("Failed to initialize logger: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_is_single_shot() {
        // The global subscriber can only be set once per process, so the
        // second call must fail regardless of which test ran first.
        let _ = init_logger();
        let second = init_logger();
        assert!(second.is_err());
    }
}
