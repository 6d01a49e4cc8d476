// # Session Store Trait
//
// Defines the interface to the key/value store holding "active VPN"
// marker keys.
//
// ## Purpose
//
// The checker only needs one question answered: does this key exist?
// Marker keys are written and expired by a separate system; this side is
// strictly read-only.
//
// ## Implementations
//
// - Redis-backed: `vpncheck-store-redis` crate
// - In-memory: [`crate::store::MemorySessionStore`] (tests, demos)
//
// ## Connection ownership
//
// The connection state ({Disconnected, Connected}) is owned exclusively
// by the implementation. Callers drive the lifecycle through `connect()`
// and `disconnect()` but never inspect or mutate the connection itself.

use async_trait::async_trait;

/// Connection-health events emitted by a session store.
///
/// Asynchronous connection errors must never crash the calling process;
/// they are forwarded over a bounded channel to an observability consumer
/// and surface on the next operation that depends on the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A connection was established
    Connected {
        /// Endpoint the store connected to (host:port/db)
        endpoint: String,
    },

    /// The connection was released
    Disconnected,

    /// Establishing a connection failed
    ConnectionFailed {
        /// Transport-level detail
        detail: String,
    },

    /// A query failed at the transport level
    QueryFailed {
        /// Transport-level detail
        detail: String,
    },
}

/// Trait for session store implementations
///
/// All methods must be safe to call concurrently from multiple tasks.
/// Every error is terminal for that single call only: the connection
/// stays safe to reuse or explicitly disconnect afterwards.
///
/// Callers that abort an in-flight operation (e.g. an external timeout)
/// must treat the connection as unusable and `disconnect()` +
/// `connect()` before reuse.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Establish the store connection.
    ///
    /// Idempotent: a second call while connected is a no-op and leaves
    /// exactly one live connection.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Connected (or already was)
    /// - `Err(Error::Connection)`: Transport failure
    async fn connect(&self) -> Result<(), crate::Error>;

    /// Release the store connection.
    ///
    /// Idempotent, and safe to call even if `connect()` never succeeded.
    async fn disconnect(&self) -> Result<(), crate::Error>;

    /// Check whether `key` is present in the store.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The store reports the key present (count ≥ 1)
    /// - `Ok(false)`: The key is absent
    /// - `Err(Error::NotConnected)`: No open connection (sequencing error)
    /// - `Err(Error::Query)`: Transport failure during the query
    async fn exists_key(&self, key: &str) -> Result<bool, crate::Error>;
}
