//! Environment variable sources.
//!
//! The accessor depends on an injected read-only key/value provider
//! rather than reading `std::env` directly, so tests and embedders can
//! substitute an in-memory map or a mock.

use std::collections::HashMap;
use std::env;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-only key/value settings source.
///
/// Implementations must be pure reads: no caching, no writes, no I/O
/// beyond the lookup itself. Each call observes the source at call time.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource {
    /// Look up the raw string value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// Settings source backed by the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Create a process-environment source, loading a `.env` file first
    /// if one is present in the working directory or its ancestors.
    pub fn init() -> Self {
        if dotenvy::dotenv().is_err() {
            tracing::debug!("no .env file found, using process environment only");
        }
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// In-memory source, used by tests and embedded configurations.
impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_env_reads_live_variables() {
        env::set_var("API_CONFIG_ENV_PROBE", "probe-value");
        assert_eq!(
            ProcessEnv.get("API_CONFIG_ENV_PROBE"),
            Some("probe-value".to_string())
        );
        env::remove_var("API_CONFIG_ENV_PROBE");
        assert_eq!(ProcessEnv.get("API_CONFIG_ENV_PROBE"), None);
    }

    #[test]
    fn map_source_returns_owned_copies() {
        let mut map = HashMap::new();
        map.insert("PORT".to_string(), "3000".to_string());

        assert_eq!(EnvSource::get(&map, "PORT"), Some("3000".to_string()));
        assert_eq!(EnvSource::get(&map, "MISSING"), None);
    }
}
