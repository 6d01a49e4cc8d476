// # vpncheck-core
//
// Core library for the vpncheck active-session lookup system.
//
// ## Architecture Overview
//
// This library answers one question: is this IP address currently
// associated with an active VPN session?
//
// - **validator**: pure syntactic IPv4/IPv6 classification
// - **SessionStore**: trait for key-existence lookups against a
//   key/value store (read-only; marker keys are written elsewhere)
// - **ActiveSessionChecker**: validation → key derivation → lookup →
//   typed verdict
//
// ## Design Principles
//
// 1. **Reject early**: an invalid address never reaches the store
// 2. **Injected store**: the checker never owns the connection lifecycle
// 3. **Single-shot**: no retries, no caching, no batching
// 4. **Sanitized failures**: transport detail is logged, not propagated

pub mod checker;
pub mod config;
pub mod error;
pub mod store;
pub mod traits;
pub mod validator;

// Re-export core types for convenience
pub use checker::{ActiveSessionChecker, Verdict};
pub use config::{CheckConfig, StoreConfig};
pub use error::{Error, Result};
pub use store::MemorySessionStore;
pub use traits::{SessionStore, StoreEvent};
