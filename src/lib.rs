//! Typed, fail-fast environment configuration for API backends.
//!
//! Wraps an injected read-only key/value source (normally the process
//! environment) and exposes typed getters plus the fixed settings groups
//! the surrounding application consumes: ORM connection options, S3
//! bucket identity, NATS broker address, JWT signing material and the
//! HTTP listener port.
//!
//! # Modules
//!
//! - **config**: The accessor, settings-group records and constants
//! - **env**: Injectable settings sources
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```no_run
//! use api_config::ApiConfig;
//!
//! let config = ApiConfig::from_process_env();
//! let postgres = config.postgres_config()?;
//! let port = config.app_config()?.port;
//! # Ok::<(), api_config::ConfigError>(())
//! ```
//!
//! A missing or malformed variable surfaces as a [`ConfigError`]; callers
//! are expected to let it terminate startup rather than continue with a
//! partial configuration.

pub mod config;
pub mod env;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{
    ApiConfig, AppConfig, AuthConfig, MigrationSettings, NatsConfig, PostgresConfig, S3Config,
};
pub use env::{EnvSource, ProcessEnv};
pub use errors::{ConfigError, ConfigResult};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use env::MockEnvSource;
