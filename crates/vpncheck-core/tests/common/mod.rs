//! Test doubles and common utilities for contract tests
//!
//! This module provides a recording store double that verifies the
//! checker's interaction with the store without any real transport.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use vpncheck_core::error::Result;
use vpncheck_core::traits::SessionStore;

/// A SessionStore double that records every call
///
/// Behavior is driven by three knobs: the set of present keys, the
/// connected flag, and an optional injected query failure.
pub struct RecordingStore {
    /// Keys the store reports as present
    keys: std::sync::Mutex<HashSet<String>>,
    /// Connected/Disconnected state
    connected: AtomicBool,
    /// When set, every exists_key call fails with a query error
    fail_queries: AtomicBool,
    /// Call counter for connect()
    connect_call_count: Arc<AtomicUsize>,
    /// Call counter for disconnect()
    disconnect_call_count: Arc<AtomicUsize>,
    /// Call counter for exists_key()
    exists_call_count: Arc<AtomicUsize>,
    /// Every key that was queried, in order
    queried_keys: Arc<std::sync::Mutex<Vec<String>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            keys: std::sync::Mutex::new(HashSet::new()),
            connected: AtomicBool::new(false),
            fail_queries: AtomicBool::new(false),
            connect_call_count: Arc::new(AtomicUsize::new(0)),
            disconnect_call_count: Arc::new(AtomicUsize::new(0)),
            exists_call_count: Arc::new(AtomicUsize::new(0)),
            queried_keys: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Create a connected store reporting the given keys as present
    pub fn connected_with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        store.connected.store(true, Ordering::SeqCst);
        store
            .keys
            .lock()
            .unwrap()
            .extend(keys.into_iter().map(Into::into));
        store
    }

    /// Make every subsequent exists_key call fail at the transport level
    pub fn fail_queries(&self) {
        self.fail_queries.store(true, Ordering::SeqCst);
    }

    /// Get the number of times connect() was called
    pub fn connect_call_count(&self) -> usize {
        self.connect_call_count.load(Ordering::SeqCst)
    }

    /// Get the number of times disconnect() was called
    pub fn disconnect_call_count(&self) -> usize {
        self.disconnect_call_count.load(Ordering::SeqCst)
    }

    /// Get the number of times exists_key() was called
    pub fn exists_call_count(&self) -> usize {
        self.exists_call_count.load(Ordering::SeqCst)
    }

    /// Get the list of keys that were queried
    pub fn queried_keys(&self) -> Vec<String> {
        self.queried_keys.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SessionStore for RecordingStore {
    async fn connect(&self) -> Result<()> {
        self.connect_call_count.fetch_add(1, Ordering::SeqCst);
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) -> Result<()> {
        self.disconnect_call_count.fetch_add(1, Ordering::SeqCst);
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn exists_key(&self, key: &str) -> Result<bool> {
        self.exists_call_count.fetch_add(1, Ordering::SeqCst);
        self.queried_keys.lock().unwrap().push(key.to_string());

        if !self.connected.load(Ordering::SeqCst) {
            return Err(vpncheck_core::Error::NotConnected);
        }
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(vpncheck_core::Error::query(
                "simulated transport failure: connection reset by peer",
            ));
        }
        Ok(self.keys.lock().unwrap().contains(key))
    }
}
