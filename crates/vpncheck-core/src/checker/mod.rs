//! Active session checker
//!
//! The ActiveSessionChecker is responsible for:
//! - Validating the syntactic form of an IP address
//! - Deriving the store lookup key from the namespace prefix
//! - Delegating the existence lookup to the injected SessionStore
//! - Returning a typed verdict, with store failures sanitized
//!
//! ## Control Flow
//!
//! ```text
//! caller ── ip ──▶ validate ──▶ derive key ──▶ SessionStore::exists_key
//!                     │                                  │
//!                InvalidAddress                   Verdict / LookupFailed
//! ```
//!
//! 1. Reject malformed input early; an invalid address never reaches the
//!    store.
//! 2. key = prefix ⧺ ip, verbatim concatenation, no normalization of
//!    address forms.
//! 3. One round trip to the store; no retries, no caching, no batching.
//! 4. Transport failures are logged here with full detail and re-surfaced
//!    as a sanitized error naming only the IP.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error};

use crate::config::CheckConfig;
use crate::error::{Error, Result};
use crate::traits::SessionStore;
use crate::validator;

/// Outcome of a single active-session check.
///
/// Produced only for a syntactically valid address; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    /// The queried address, exactly as supplied
    pub ip: String,
    /// Whether the store holds an active-session marker for the address
    pub active: bool,
    /// When the lookup completed
    pub timestamp: DateTime<Utc>,
}

/// The orchestrating policy: validation → key derivation → lookup.
///
/// The store is injected and owned externally; the checker drives neither
/// `connect()` nor `disconnect()`. Each call is single-shot and stateless
/// beyond the injected client, so many checks may run concurrently as
/// long as the store is safe for concurrent use.
pub struct ActiveSessionChecker {
    /// Session store for existence lookups
    store: Arc<dyn SessionStore>,

    /// Namespace prefix isolating this feature's keys in the store
    key_prefix: String,
}

impl ActiveSessionChecker {
    /// Create a new checker
    ///
    /// # Parameters
    ///
    /// - `store`: Session store implementation (lifecycle owned by caller)
    /// - `config`: Checker configuration (namespace prefix)
    pub fn new(store: Arc<dyn SessionStore>, config: CheckConfig) -> Self {
        Self {
            store,
            key_prefix: config.key_prefix,
        }
    }

    /// Derive the store lookup key for an address.
    ///
    /// Verbatim concatenation: the prefix and the address are copied
    /// exactly, with no compression or expansion of IPv6 groups.
    fn lookup_key(&self, ip: &str) -> String {
        format!("{}{}", self.key_prefix, ip)
    }

    /// Check whether `ip` currently has an active VPN session.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` / `Ok(false)`: The store's verdict, unmodified
    /// - `Err(Error::InvalidAddress)`: Malformed input; the store was
    ///   never queried
    /// - `Err(Error::LookupFailed)`: Store-layer failure, sanitized to
    ///   name only the IP (the transport detail is logged here)
    pub async fn is_ip_active(&self, ip: &str) -> Result<bool> {
        if !validator::is_valid(ip) {
            return Err(Error::invalid_address(ip));
        }

        let key = self.lookup_key(ip);
        debug!("Checking session marker key {}", key);

        match self.store.exists_key(&key).await {
            Ok(active) => Ok(active),
            Err(e) => {
                // Full diagnostic detail stays here; the caller only
                // learns which IP failed.
                error!("Session lookup failed for IP {}: {}", ip, e);
                Err(Error::lookup_failed(ip))
            }
        }
    }

    /// Run the full check and return a [`Verdict`] record.
    ///
    /// Same pipeline as [`Self::is_ip_active`], with the queried address
    /// and a lookup timestamp attached for the invocation surface.
    pub async fn check(&self, ip: &str) -> Result<Verdict> {
        let active = self.is_ip_active(ip).await?;
        Ok(Verdict {
            ip: ip.to_string(),
            active,
            timestamp: Utc::now(),
        })
    }
}
