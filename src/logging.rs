// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Log output goes to stderr through `tracing-subscriber`. The filter is read
//! from `ART_SPACE_LOG` using the usual `EnvFilter` directive syntax
//! (`debug`, `art_space=trace`, ...) and defaults to warnings only.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "ART_SPACE_LOG";

/// Filter used when `ART_SPACE_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the filter from the environment, falling back to the default.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber. Calling it twice is harmless: the second
/// installation attempt is ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
