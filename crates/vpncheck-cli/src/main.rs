// # vpncheck - Active VPN Session Checker
//
// One-shot CLI: takes a single IP address, asks the session store whether
// an active-session marker key exists for it, and prints a JSON result.
//
// This is a THIN integration layer only. All checking logic lives in
// vpncheck-core; the Redis transport lives in vpncheck-store-redis.
//
// ## Configuration
//
// All configuration is done via environment variables:
//
// - `VPNCHECK_REDIS_HOST`: Store host (default: 127.0.0.1)
// - `VPNCHECK_REDIS_PORT`: Store port (default: 6379)
// - `VPNCHECK_REDIS_PASSWORD`: Optional credential
// - `VPNCHECK_REDIS_DB`: Database index (default: 0)
// - `VPNCHECK_KEY_PREFIX`: Key namespace prefix (default: active_vpn:)
// - `VPNCHECK_LOG_LEVEL`: trace|debug|info|warn|error (default: info)
//
// ## Example
//
// ```bash
// export VPNCHECK_REDIS_HOST=10.1.0.2
// vpncheck 192.168.1.100
// ```
//
// Output on success:
//
// ```json
// {
//   "ip": "192.168.1.100",
//   "active": true,
//   "timestamp": "2026-08-23T12:00:00Z"
// }
// ```

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use vpncheck_core::traits::StoreEvent;
use vpncheck_core::{ActiveSessionChecker, CheckConfig, SessionStore, StoreConfig, Verdict};
use vpncheck_store_redis::RedisSessionStore;

/// Exit codes for different termination scenarios
///
/// - 0: Check completed (verdict printed)
/// - 1: Usage or configuration error
/// - 2: Check failure (invalid address, store unreachable, query failed)
#[derive(Debug, Clone, Copy)]
enum VpncheckExitCode {
    /// Verdict produced and printed
    Success = 0,
    /// Missing argument, bad environment configuration
    ConfigError = 1,
    /// The check itself failed
    CheckError = 2,
}

impl From<VpncheckExitCode> for ExitCode {
    fn from(code: VpncheckExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    host: String,
    port: u16,
    password: Option<String>,
    db: i64,
    key_prefix: String,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let port = match env::var("VPNCHECK_REDIS_PORT") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("VPNCHECK_REDIS_PORT is not a valid port: {}", s))?,
            Err(_) => 6379,
        };

        let db = match env::var("VPNCHECK_REDIS_DB") {
            Ok(s) => s
                .parse()
                .with_context(|| format!("VPNCHECK_REDIS_DB is not a valid index: {}", s))?,
            Err(_) => 0,
        };

        Ok(Self {
            host: env::var("VPNCHECK_REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            password: env::var("VPNCHECK_REDIS_PASSWORD").ok(),
            db,
            key_prefix: env::var("VPNCHECK_KEY_PREFIX")
                .unwrap_or_else(|_| "active_vpn:".to_string()),
            log_level: env::var("VPNCHECK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            anyhow::bail!("VPNCHECK_REDIS_HOST cannot be empty");
        }

        if self.db < 0 {
            anyhow::bail!("VPNCHECK_REDIS_DB must be >= 0. Got: {}", self.db);
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "VPNCHECK_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }

    fn store_config(&self) -> StoreConfig {
        StoreConfig::Redis {
            host: self.host.clone(),
            port: self.port,
            password: self.password.clone(),
            db: self.db,
        }
    }

    fn check_config(&self) -> CheckConfig {
        CheckConfig::with_prefix(self.key_prefix.clone())
    }
}

fn main() -> ExitCode {
    // The single positional argument is the IP to check
    let ip = match env::args().nth(1) {
        Some(ip) => ip,
        None => {
            eprintln!("Usage: vpncheck <IP_ADDRESS>");
            return VpncheckExitCode::ConfigError.into();
        }
    };

    // Load and validate configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return VpncheckExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return VpncheckExitCode::ConfigError.into();
    }

    // Initialize tracing
    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return VpncheckExitCode::ConfigError.into();
    }

    // Enter tokio runtime
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return VpncheckExitCode::CheckError.into();
        }
    };

    rt.block_on(async {
        match run_check(&config, &ip).await {
            Ok(verdict) => match serde_json::to_string_pretty(&verdict) {
                Ok(json) => {
                    println!("{}", json);
                    VpncheckExitCode::Success.into()
                }
                Err(e) => {
                    error!("Failed to encode verdict: {}", e);
                    VpncheckExitCode::CheckError.into()
                }
            },
            Err(e) => {
                eprintln!("{}", e);
                VpncheckExitCode::CheckError.into()
            }
        }
    })
}

/// Run a single check against the configured store
async fn run_check(config: &Config, ip: &str) -> Result<Verdict> {
    let (store, events) = RedisSessionStore::new(&config.store_config())?;
    let store = Arc::new(store);

    // Supervised observer: connection-health events are logged off the
    // request path instead of crashing the process.
    let observer = tokio::spawn(observe_store_events(events));

    store.connect().await?;

    let checker = ActiveSessionChecker::new(
        Arc::clone(&store) as Arc<dyn SessionStore>,
        config.check_config(),
    );
    let result = checker.check(ip).await;

    // Always release the connection, even when the check failed
    if let Err(e) = store.disconnect().await {
        warn!("Failed to disconnect from store: {}", e);
    }

    observer.abort();

    Ok(result?)
}

/// Log store connection-health events as they arrive
async fn observe_store_events(mut events: tokio::sync::mpsc::Receiver<StoreEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            StoreEvent::Connected { endpoint } => {
                info!("Store connected: {}", endpoint);
            }
            StoreEvent::Disconnected => {
                info!("Store disconnected");
            }
            StoreEvent::ConnectionFailed { detail } => {
                warn!("Store connection failed: {}", detail);
            }
            StoreEvent::QueryFailed { detail } => {
                warn!("Store query failed: {}", detail);
            }
        }
    }
}
