//! Embedded usage of vpncheck-core as a library
//!
//! Runs the full check pipeline against the in-memory store, so it works
//! without a Redis server:
//!
//! ```bash
//! cargo run -p embedded_usage
//! ```

use std::sync::Arc;

use vpncheck_core::traits::SessionStore;
use vpncheck_core::{ActiveSessionChecker, CheckConfig, MemorySessionStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    // Pretend some other system marked 10.0.0.5 as having an active session
    let store = MemorySessionStore::with_keys(["active_vpn:10.0.0.5"]);
    store.connect().await?;

    let checker = ActiveSessionChecker::new(
        Arc::new(store.clone()) as Arc<dyn SessionStore>,
        CheckConfig::default(),
    );

    for ip in ["10.0.0.5", "10.0.0.6", "::1"] {
        let verdict = checker.check(ip).await?;
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    }

    // Malformed input is rejected before the store is ever consulted
    match checker.check("256.1.1.1").await {
        Ok(_) => unreachable!("malformed input must not produce a verdict"),
        Err(e) => println!("rejected: {}", e),
    }

    store.disconnect().await?;
    Ok(())
}
