// # Memory Session Store
//
// In-memory implementation of SessionStore.
//
// ## Purpose
//
// Provides a store that answers existence lookups from a plain set of
// keys, with the same connect/disconnect sequencing rules as a remote
// backend. Nothing persists across process restarts.
//
// ## When to Use
//
// - Unit and contract tests
// - Embedded usage and demos without a running Redis

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::Error;
use crate::traits::SessionStore;

/// In-memory session store implementation
///
/// Keys live in a HashSet behind a RwLock; the connected flag enforces the
/// same "no query without connect" contract as the Redis backend.
///
/// # Example
///
/// ```rust,no_run
/// use vpncheck_core::store::MemorySessionStore;
/// use vpncheck_core::traits::SessionStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = MemorySessionStore::new();
///     store.insert_key("active_vpn:10.0.0.5").await;
///
///     store.connect().await?;
///     assert!(store.exists_key("active_vpn:10.0.0.5").await?);
///     store.disconnect().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    keys: Arc<RwLock<HashSet<String>>>,
    connected: Arc<AtomicBool>,
}

impl MemorySessionStore {
    /// Create a new empty memory store (disconnected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with marker keys
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: HashSet<String> = keys.into_iter().map(Into::into).collect();
        Self {
            keys: Arc::new(RwLock::new(keys)),
            connected: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Insert a marker key (test/demo setup helper)
    pub async fn insert_key(&self, key: impl Into<String>) {
        self.keys.write().await.insert(key.into());
    }

    /// Remove a marker key (test/demo setup helper)
    pub async fn remove_key(&self, key: &str) {
        self.keys.write().await.remove(key);
    }

    /// Get the number of marker keys in the store
    pub async fn len(&self) -> usize {
        self.keys.read().await.len()
    }

    /// Check if the store holds no marker keys
    pub async fn is_empty(&self) -> bool {
        self.keys.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn connect(&self) -> Result<(), Error> {
        // Idempotent: already-connected is a no-op
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), Error> {
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn exists_key(&self, key: &str) -> Result<bool, Error> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(Error::NotConnected);
        }
        Ok(self.keys.read().await.contains(key))
    }
}
