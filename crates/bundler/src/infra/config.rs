//! Runtime configuration.
//!
//! Only settings that leave the generated header untouched live here; the
//! header itself is controlled by the command-line arguments alone.

use std::env;

/// Filter applied to log output when nothing overrides it.
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Environment variable overriding the log filter (`RUST_LOG` syntax).
pub const LOG_ENV: &str = "BUNDLER_LOG";

/// Settings layered from defaults and environment overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

/// Environment overrides for runtime settings.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    log_filter: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            log_filter: env::var(LOG_ENV).ok(),
        }
    }

    #[cfg(test)]
    fn for_tests(log_filter: &str) -> Self {
        Self {
            log_filter: Some(log_filter.to_owned()),
        }
    }
}

impl Config {
    /// Load configuration from defaults and environment overrides.
    pub fn load() -> Self {
        Self::load_with_overrides(EnvOverrides::from_env())
    }

    fn load_with_overrides(overrides: EnvOverrides) -> Self {
        apply_env_overrides(Self::default(), overrides)
    }
}

fn apply_env_overrides(mut config: Config, env: EnvOverrides) -> Config {
    if let Some(filter) = env.log_filter.filter(|value| !value.trim().is_empty()) {
        config.log_filter = filter;
    }
    config
}
