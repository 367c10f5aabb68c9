//! Runtime configuration for the intake binary.
//!
//! Values come from command-line flags with environment variable
//! fallbacks.

use crate::request::adapters::gate::StaticSecretGate;
use clap::Args;
use std::fmt;
use thiserror::Error;

/// Default number of pooled database connections.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The connection pool must hold at least one connection.
    #[error("pool size must be at least 1")]
    ZeroPoolSize,
    /// An administrator command ran without a configured secret.
    #[error("no administrator secret configured (set INTAKE_ADMIN_SECRET)")]
    MissingAdminSecret,
}

/// Connection and access settings.
#[derive(Clone, Args)]
pub struct IntakeConfig {
    /// `PostgreSQL` connection URL of the request store
    #[arg(long, env = "INTAKE_DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum number of pooled database connections
    #[arg(long, env = "INTAKE_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: u32,

    /// Shared secret that unlocks administrator commands
    #[arg(long, env = "INTAKE_ADMIN_SECRET", hide_env_values = true)]
    pub admin_secret: Option<String>,
}

impl IntakeConfig {
    /// Checks values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPoolSize`] when `pool_size` is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }
        Ok(())
    }

    /// Builds the administrator gate from the configured secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAdminSecret`] when no non-empty secret
    /// is configured.
    pub fn admin_gate(&self) -> Result<StaticSecretGate, ConfigError> {
        self.admin_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .map(StaticSecretGate::new)
            .ok_or(ConfigError::MissingAdminSecret)
    }
}

impl fmt::Debug for IntakeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntakeConfig")
            .field("database_url", &"<redacted>")
            .field("pool_size", &self.pool_size)
            .field(
                "admin_secret",
                &self.admin_secret.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
