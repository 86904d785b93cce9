//! Node records returned by the monitoring API.

use serde::{Deserialize, Serialize};

use crate::status::DailyStatus;

/// A gRPC or JSON-RPC node under monitoring.
///
/// The server returns the same shape from `getNodes` and `getJSONRPCNodes`;
/// the `network` field distinguishes mainnet from testnet listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredNode {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub network: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    /// Daily health-check history, unordered and possibly gappy. `None`
    /// means the server has not checked this node yet.
    pub status: Option<Vec<DailyStatus>>,
    /// Uptime percentage over the server's scoring window, `[0, 100]`.
    #[serde(default)]
    pub overall_score: f64,
}

impl MonitoredNode {
    /// The node's raw observations, empty when none were reported.
    pub fn observations(&self) -> &[DailyStatus] {
        self.status.as_deref().unwrap_or_default()
    }

    pub fn on_network(&self, network: &str) -> bool {
        self.network == network
    }
}

/// A bootstrap node. Bootstrap listings carry no network field: the server
/// tracks one bootstrap set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapNode {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    pub status: Option<Vec<DailyStatus>>,
    #[serde(default)]
    pub overall_score: f64,
}

impl BootstrapNode {
    pub fn observations(&self) -> &[DailyStatus] {
        self.status.as_deref().unwrap_or_default()
    }
}

/// A discovered peer, located but not health-tracked day by day.
///
/// Served by the legacy REST endpoint; field names are snake_case on that
/// wire, unlike the JSON-RPC payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerNode {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    /// `[latitude, longitude]` in degrees.
    pub coordinates: [f64; 2],
    /// Fraction of recent probes that reached the peer, `[0, 1]`.
    #[serde(default)]
    pub online_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitored_node_wire_casing() {
        let json = r#"{
            "name": "validator-7",
            "address": "grpc.example.org:50051",
            "network": "mainnet",
            "email": "ops@example.org",
            "website": "https://example.org",
            "status": [{"date": "2024-01-03", "color": 2}],
            "overallScore": 99.17
        }"#;
        let node: MonitoredNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.overall_score, 99.17);
        assert_eq!(node.observations().len(), 1);
        assert!(node.on_network("mainnet"));
        assert!(!node.on_network("testnet"));
    }

    #[test]
    fn test_null_status_reads_as_empty() {
        let json = r#"{"name": "n", "address": "a", "status": null, "overallScore": 0}"#;
        let node: MonitoredNode = serde_json::from_str(json).unwrap();
        assert!(node.observations().is_empty());
    }

    #[test]
    fn test_peer_node_wire_shape() {
        let json = r#"{
            "name": "peer-12",
            "country": "Germany",
            "city": "Berlin",
            "coordinates": [52.52, 13.405],
            "online_score": 0.98
        }"#;
        let peer: PeerNode = serde_json::from_str(json).unwrap();
        assert_eq!(peer.coordinates, [52.52, 13.405]);
        assert_eq!(peer.online_score, 0.98);
    }
}
