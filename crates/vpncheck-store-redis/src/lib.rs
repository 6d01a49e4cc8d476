// # Redis Session Store
//
// Redis-backed implementation of the SessionStore trait.
//
// ## Purpose
//
// Holds the single TCP connection to Redis and answers key-existence
// queries (`EXISTS key`). This side is strictly read-only: marker keys
// are written and expired by a separate system.
//
// ## Connection model
//
// One multiplexed async connection behind a mutex. `Some` means
// Connected, `None` means Disconnected; no other component sees or
// mutates this state. A reply count ≥ 1 from EXISTS maps to `true`.
//
// ## Health events
//
// Connection and query failures are forwarded as [`StoreEvent`]s over a
// bounded channel so an observability consumer can watch connection
// health off the request path. A full channel drops the event with a
// warning; it never blocks or crashes the caller.

use tokio::sync::{Mutex, mpsc};
use tracing::{debug, error, info, warn};

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use vpncheck_core::traits::{SessionStore, StoreEvent};
use vpncheck_core::{Error, StoreConfig};

/// Capacity of the health-event channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Redis-backed session store
///
/// # Example
///
/// ```rust,no_run
/// use vpncheck_core::{StoreConfig, SessionStore};
/// use vpncheck_store_redis::RedisSessionStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let (store, _events) = RedisSessionStore::new(&StoreConfig::default())?;
///     store.connect().await?;
///     let present = store.exists_key("active_vpn:10.0.0.5").await?;
///     store.disconnect().await?;
///     println!("present: {}", present);
///     Ok(())
/// }
/// ```
pub struct RedisSessionStore {
    /// Redis client (connection factory)
    client: redis::Client,

    /// The single live connection; None = Disconnected
    conn: Mutex<Option<MultiplexedConnection>>,

    /// Endpoint description for logs and events (never includes the credential)
    endpoint: String,

    /// Health-event sender
    event_tx: mpsc::Sender<StoreEvent>,
}

impl RedisSessionStore {
    /// Create a new Redis session store from configuration.
    ///
    /// # Returns
    ///
    /// A tuple of (store, event_receiver) where event_receiver yields
    /// connection-health events.
    pub fn new(config: &StoreConfig) -> Result<(Self, mpsc::Receiver<StoreEvent>), Error> {
        config.validate()?;

        let StoreConfig::Redis {
            host,
            port,
            password,
            db,
        } = config
        else {
            return Err(Error::config(format!(
                "redis store cannot be built from a '{}' store config",
                config.type_name()
            )));
        };

        let url = connection_url(host, *port, password.as_deref(), *db);
        let client = redis::Client::open(url)
            .map_err(|e| Error::config(format!("invalid redis connection parameters: {}", e)))?;

        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        let store = Self {
            client,
            conn: Mutex::new(None),
            endpoint: format!("{}:{}/{}", host, port, db),
            event_tx: tx,
        };

        Ok((store, rx))
    }

    /// Emit a health event without blocking the request path
    fn emit_event(&self, event: StoreEvent) {
        if self.event_tx.try_send(event).is_err() {
            warn!("Store event channel full or closed, dropping health event");
        }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn connect(&self) -> Result<(), Error> {
        let mut guard = self.conn.lock().await;
        if guard.is_some() {
            debug!("Already connected to {}", self.endpoint);
            return Ok(());
        }

        match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => {
                info!("Connected to session store at {}", self.endpoint);
                self.emit_event(StoreEvent::Connected {
                    endpoint: self.endpoint.clone(),
                });
                *guard = Some(conn);
                Ok(())
            }
            Err(e) => {
                error!("Failed to connect to {}: {}", self.endpoint, e);
                self.emit_event(StoreEvent::ConnectionFailed {
                    detail: e.to_string(),
                });
                Err(Error::connection(e.to_string()))
            }
        }
    }

    async fn disconnect(&self) -> Result<(), Error> {
        let mut guard = self.conn.lock().await;
        if guard.take().is_some() {
            debug!("Disconnected from {}", self.endpoint);
            self.emit_event(StoreEvent::Disconnected);
        }
        Ok(())
    }

    async fn exists_key(&self, key: &str) -> Result<bool, Error> {
        // Clone the multiplexed handle so concurrent lookups don't
        // serialize on the connection mutex.
        let mut conn = {
            let guard = self.conn.lock().await;
            guard.as_ref().ok_or(Error::NotConnected)?.clone()
        };

        let count: i64 = redis::cmd("EXISTS")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                error!("EXISTS query failed on {}: {}", self.endpoint, e);
                self.emit_event(StoreEvent::QueryFailed {
                    detail: e.to_string(),
                });
                Error::query(e.to_string())
            })?;

        Ok(count >= 1)
    }
}

/// Build the redis connection URL from discrete settings.
///
/// The credential, when present, rides in the URL userinfo; the database
/// index is selected via the path.
fn connection_url(host: &str, port: u16, password: Option<&str>, db: i64) -> String {
    match password {
        Some(password) => format!("redis://:{}@{}:{}/{}", password, host, port, db),
        None => format!("redis://{}:{}/{}", host, port, db),
    }
}
