//! Channel-based data source.
//!
//! Receives network snapshots via a tokio watch channel. Useful for
//! embedding the dashboard in a process that produces snapshots itself.

use tokio::sync::watch;

use super::DataSource;
use nodewatch_types::NetworkSnapshot;

/// A data source fed by the sending half of a watch channel.
///
/// # Example
///
/// ```
/// use nodewatch_tui::source::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("embedded");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<NetworkSnapshot>,
    description: String,
    initial_returned: bool,
}

impl ChannelSource {
    /// Wrap the receiving end of a watch channel.
    pub fn new(receiver: watch::Receiver<NetworkSnapshot>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
        }
    }

    /// Create a channel pair: the sender pushes snapshots, the source feeds
    /// the dashboard.
    pub fn create(source_description: &str) -> (watch::Sender<NetworkSnapshot>, Self) {
        let (tx, rx) = watch::channel(NetworkSnapshot::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<NetworkSnapshot> {
        // Surface the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

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
        // Errors belong to whatever feeds the channel.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodewatch_types::MonitoredNode;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // Initially returns the default (empty) snapshot
        let snapshot = source.poll().unwrap();
        assert!(snapshot.is_empty());

        // No change, so poll returns None
        assert!(source.poll().is_none());

        // Push a snapshot through the channel
        let update = NetworkSnapshot {
            nodes: vec![MonitoredNode {
                name: "n1".into(),
                address: "a:1".into(),
                network: "mainnet".into(),
                email: String::new(),
                website: String::new(),
                status: None,
                overall_score: 0.0,
            }],
            ..Default::default()
        };
        tx.send(update).unwrap();

        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.nodes.len(), 1);
    }
}
