//! Live data source polling the monitoring API.
//!
//! Spawns a background tokio task that runs full polling rounds against the
//! API on an interval and pushes each snapshot through a watch channel. The
//! TUI thread consumes them without ever blocking on the network.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::DataSource;
use nodewatch_client::ApiClient;
use nodewatch_types::NetworkSnapshot;

/// A data source backed by a background API poller.
///
/// Must be created inside a tokio runtime (the poller is spawned onto it);
/// `poll()` itself is sync and runs on the TUI thread.
#[derive(Debug)]
pub struct RpcSource {
    receiver: watch::Receiver<NetworkSnapshot>,
    description: String,
    shared_error: Arc<Mutex<Option<String>>>,
    last_error: Option<String>,
}

impl RpcSource {
    /// Spawn the polling task and return the source plus its task handle.
    /// Abort the handle on shutdown.
    pub fn spawn(client: ApiClient, interval: Duration) -> (Self, JoinHandle<()>) {
        let (tx, rx) = watch::channel(NetworkSnapshot::default());
        let description = format!("rpc: {}", client.rpc_url());
        let shared_error = Arc::new(Mutex::new(None));

        let error_slot = Arc::clone(&shared_error);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match client.collect().await {
                    Ok(snapshot) => {
                        if let Ok(mut slot) = error_slot.lock() {
                            *slot = None;
                        }
                        // Receiver gone means the TUI shut down.
                        if tx.send(snapshot).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        if let Ok(mut slot) = error_slot.lock() {
                            *slot = Some(e.to_string());
                        }
                    }
                }
            }
        });

        let source = Self {
            receiver: rx,
            description,
            shared_error,
            last_error: None,
        };
        (source, handle)
    }
}

impl DataSource for RpcSource {
    fn poll(&mut self) -> Option<NetworkSnapshot> {
        if let Ok(slot) = self.shared_error.lock() {
            self.last_error = slot.clone();
        }

        // The initial channel value is a placeholder; has_changed only
        // flips once the first real round lands, so the UI keeps showing
        // "Loading" until then.
        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_description() {
        tokio_test::block_on(async {
            let client = ApiClient::builder().base_url("http://127.0.0.1:1").build();
            let (mut source, handle) = RpcSource::spawn(client, Duration::from_secs(3600));

            assert!(source.description().starts_with("rpc: http://127.0.0.1:1"));
            // Nothing has been fetched yet at spawn time.
            assert!(source.poll().is_none());

            handle.abort();
        });
    }
}
