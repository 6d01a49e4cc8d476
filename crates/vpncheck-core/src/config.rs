//! Configuration types for the vpncheck system
//!
//! Configuration is built once at startup and passed by value into each
//! component constructor. The core reads no environment variables and
//! keeps no global state.

use serde::{Deserialize, Serialize};

/// Default key namespace prefix
pub const DEFAULT_KEY_PREFIX: &str = "active_vpn:";

/// Checker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Namespace prefix prepended to an address to form the lookup key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl CheckConfig {
    /// Create a checker configuration with a custom key prefix
    pub fn with_prefix(key_prefix: impl Into<String>) -> Self {
        Self {
            key_prefix: key_prefix.into(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
        }
    }
}

/// Session store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Redis-backed session store
    Redis {
        /// Store host
        #[serde(default = "default_host")]
        host: String,
        /// Store port
        #[serde(default = "default_port")]
        port: u16,
        /// Optional authentication credential
        #[serde(default)]
        password: Option<String>,
        /// Numeric database index selected at connect time
        #[serde(default)]
        db: i64,
    },

    /// In-memory session store (tests, demos)
    Memory,
}

impl StoreConfig {
    /// Validate the store configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            StoreConfig::Redis { host, db, .. } => {
                if host.is_empty() {
                    return Err(crate::Error::config("store host cannot be empty"));
                }
                if *db < 0 {
                    return Err(crate::Error::config("store database index cannot be negative"));
                }
                Ok(())
            }
            StoreConfig::Memory => Ok(()),
        }
    }

    /// Get the store type name
    pub fn type_name(&self) -> &'static str {
        match self {
            StoreConfig::Redis { .. } => "redis",
            StoreConfig::Memory => "memory",
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Redis {
            host: default_host(),
            port: default_port(),
            password: None,
            db: 0,
        }
    }
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    6379
}
