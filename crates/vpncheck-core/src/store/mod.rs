// # Session Store Implementations
//
// This module provides the in-process implementation of the SessionStore
// trait. The Redis-backed implementation lives in the
// `vpncheck-store-redis` crate.

pub mod memory;

pub use memory::MemorySessionStore;
