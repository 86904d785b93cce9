//! Snapshot - the result of one full polling round against the API.

use serde::{Deserialize, Serialize};

use crate::node::{BootstrapNode, MonitoredNode, PeerNode};
use crate::stats::{MapNode, NetworkStats};

/// Everything the dashboard needs from one polling round.
///
/// Also the on-disk format for snapshot files, so the TUI can replay a
/// capture offline. All fields default so that partial files (say, a
/// capture of just the gRPC listing) still load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// gRPC nodes from `getNodes`.
    #[serde(default)]
    pub nodes: Vec<MonitoredNode>,
    /// JSON-RPC nodes from `getJSONRPCNodes`.
    #[serde(default)]
    pub jsonrpc: Vec<MonitoredNode>,
    #[serde(default)]
    pub bootstrap: Vec<BootstrapNode>,
    #[serde(default)]
    pub peers: Vec<PeerNode>,
    #[serde(default)]
    pub map: Vec<MapNode>,
    /// Absent when the server predates the statistics methods.
    #[serde(default)]
    pub stats: Option<NetworkStats>,
}

impl NetworkSnapshot {
    /// True when no listing carried any entries.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
            && self.jsonrpc.is_empty()
            && self.bootstrap.is_empty()
            && self.peers.is_empty()
            && self.map.is_empty()
    }

    /// Total entries across the health-tracked listings (peers excluded).
    pub fn monitored_count(&self) -> usize {
        self.nodes.len() + self.jsonrpc.len() + self.bootstrap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_loads() {
        let json = r#"{
            "nodes": [
                {"name": "n1", "address": "a:1", "status": null, "overallScore": 50.0}
            ]
        }"#;
        let snapshot: NetworkSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.nodes.len(), 1);
        assert!(snapshot.bootstrap.is_empty());
        assert!(snapshot.stats.is_none());
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.monitored_count(), 1);
    }

    #[test]
    fn test_empty_object_is_empty_snapshot() {
        let snapshot: NetworkSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }
}
