//! Settings-group records.
//!
//! Fixed-shape aggregates handed to one consuming subsystem each: the
//! ORM connection initializer, the S3 client, the NATS client, the token
//! module and the HTTP listener. Groups are built fresh on every access
//! and hold no state beyond the call that produced them.

use serde::Serialize;

use super::constants::{
    DB_CONNECTION_NAME, ENTITY_PATHS, MIGRATIONS_GLOB, MIGRATIONS_PATH, MIGRATIONS_TABLE_NAME,
};

/// ORM connection options for the primary database.
#[derive(Clone, Serialize)]
pub struct PostgresConfig {
    /// Database driver identifier (e.g. "postgresql")
    pub db_type: String,
    /// Connection name handed to the ORM
    pub name: &'static str,
    pub host: String,
    pub port: u16,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub db_name: String,
    /// Enable ORM statement logging
    pub debug: bool,
    /// Glob patterns locating entity definitions
    pub entity_paths: &'static [&'static str],
    pub migrations: MigrationSettings,
}

// Don't expose the password in debug output (security)
impl std::fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("db_type", &self.db_type)
            .field("name", &self.name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("db_name", &self.db_name)
            .field("debug", &self.debug)
            .field("entity_paths", &self.entity_paths)
            .field("migrations", &self.migrations)
            .finish()
    }
}

/// Migration policy passed to the ORM collaborator.
///
/// Deployment-layout constants, never environment-derived.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationSettings {
    pub table_name: &'static str,
    pub path: &'static str,
    pub glob: &'static str,
    /// Run each migration inside a transaction
    pub transactional: bool,
    /// Drop foreign-key checks while migrating
    pub disable_foreign_keys: bool,
    /// Roll back the whole batch if any migration fails
    pub all_or_nothing: bool,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            table_name: MIGRATIONS_TABLE_NAME,
            path: MIGRATIONS_PATH,
            glob: MIGRATIONS_GLOB,
            transactional: true,
            disable_foreign_keys: true,
            all_or_nothing: true,
        }
    }
}

impl PostgresConfig {
    /// Attach the static ORM policy to the environment-derived fields.
    pub(crate) fn with_policy(
        db_type: String,
        host: String,
        port: u16,
        username: String,
        password: String,
        db_name: String,
        debug: bool,
    ) -> Self {
        Self {
            db_type,
            name: DB_CONNECTION_NAME,
            host,
            port,
            username,
            password,
            db_name,
            debug,
            entity_paths: ENTITY_PATHS,
            migrations: MigrationSettings::default(),
        }
    }
}

/// S3 bucket identity for the object-storage client.
#[derive(Debug, Clone, Serialize)]
pub struct S3Config {
    pub bucket_region: String,
    pub bucket_api_version: String,
    pub bucket_name: String,
}

/// NATS broker address for the messaging client.
#[derive(Debug, Clone, Serialize)]
pub struct NatsConfig {
    pub host: String,
    pub port: u16,
}

/// Signing key pair and token lifetime for the token module.
#[derive(Clone, Serialize)]
pub struct AuthConfig {
    #[serde(skip_serializing)]
    pub private_key: String,
    pub public_key: String,
    /// Token lifetime in seconds
    pub jwt_expiration_time: u64,
}

// Don't expose the private key in debug output (security)
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .field("jwt_expiration_time", &self.jwt_expiration_time)
            .finish()
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// Listener port, kept as the raw string the listener binds with
    pub port: String,
}
