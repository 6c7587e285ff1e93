//! Application-wide configuration constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Environment Modes
// =============================================================================

/// Mode value for local development
pub const ENV_DEVELOPMENT: &str = "development";

/// Mode value for production deployments
pub const ENV_PRODUCTION: &str = "production";

/// Mode value for test runs
pub const ENV_TEST: &str = "test";

// =============================================================================
// Database (ORM policy constants, not environment-derived)
// =============================================================================

/// Connection name handed to the ORM
pub const DB_CONNECTION_NAME: &str = "default";

/// Glob patterns locating entity definitions, relative to the crate root
pub const ENTITY_PATHS: &[&str] = &[
    "modules/**/*.entity.rs",
    "modules/**/*.view-entity.rs",
];

/// Table the ORM records applied migrations in
pub const MIGRATIONS_TABLE_NAME: &str = "orm_migrations";

/// Directory holding migration definitions
pub const MIGRATIONS_PATH: &str = "database/migrations";

/// Glob selecting migration files within [`MIGRATIONS_PATH`]
pub const MIGRATIONS_GLOB: &str = "*.sql";
