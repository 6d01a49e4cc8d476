//! Core traits for the vpncheck system
//!
//! This module defines the abstract interface that store backends must
//! follow.
//!
//! - [`SessionStore`]: key-existence lookups against a key/value store

pub mod session_store;

pub use session_store::{SessionStore, StoreEvent};
