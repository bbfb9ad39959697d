//! Walkthrough configuration.
//!
//! Values come from environment variables (optionally via a `.env` file).
//! Every variable is optional; a missing one falls back to the default
//! scenario, and a present but unparsable one is an error.
//!
//! # Environment Variables
//!
//! - `SICP_INITIAL_BALANCE`: opening balance of both accounts (default: 100)
//! - `SICP_DEPOSIT`: amount deposited (default: 23)
//! - `SICP_WITHDRAWAL`: amount withdrawn (default: 50)
//! - `SICP_REAL_PART`: first component of the complex number (default: 3.0)
//! - `SICP_IMAG_PART`: second component of the complex number (default: 4.0)

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Parameters for the message-passing walkthrough.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Opening balance of both accounts.
    pub initial_balance: i64,
    /// Amount deposited into each account.
    pub deposit: i64,
    /// Amount withdrawn from each account.
    pub withdrawal: i64,
    /// First component of the complex number.
    pub real_part: f64,
    /// Second component of the complex number.
    pub imag_part: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_balance: 100,
            deposit: 23,
            withdrawal: 50,
            real_part: 3.0,
            imag_part: 4.0,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a key is present but its
    /// value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            initial_balance: parsed_or(&lookup, "SICP_INITIAL_BALANCE", defaults.initial_balance)?,
            deposit: parsed_or(&lookup, "SICP_DEPOSIT", defaults.deposit)?,
            withdrawal: parsed_or(&lookup, "SICP_WITHDRAWAL", defaults.withdrawal)?,
            real_part: parsed_or(&lookup, "SICP_REAL_PART", defaults.real_part)?,
            imag_part: parsed_or(&lookup, "SICP_IMAG_PART", defaults.imag_part)?,
        })
    }
}

/// Parses `key` if present, otherwise returns `default`.
fn parsed_or<F, V>(lookup: &F, key: &str, default: V) -> Result<V, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    V: FromStr,
    V::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|error: V::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
    })
}
