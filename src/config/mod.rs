//! Application configuration module
//!
//! Typed getters over environment variables and the fixed settings
//! groups each consuming subsystem expects.

mod constants;
mod groups;
mod settings;

pub use constants::*;
pub use groups::{AppConfig, AuthConfig, MigrationSettings, NatsConfig, PostgresConfig, S3Config};
pub use settings::ApiConfig;
