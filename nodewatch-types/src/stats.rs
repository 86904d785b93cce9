//! Aggregate network statistics and map listings.

use serde::{Deserialize, Serialize};

/// Network-wide statistics, as returned by `getNetworkStats`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    pub total_nodes: u64,
    pub reachable_nodes: u64,
    pub countries_count: u64,
    /// Average uptime percentage across reachable nodes.
    pub avg_uptime: f64,
    #[serde(default)]
    pub top_countries: Vec<CountryCount>,
    pub grpc_nodes: u64,
    pub jsonrpc_nodes: u64,
    pub bootstrap_nodes: u64,
}

impl NetworkStats {
    /// Top countries ordered by node count, descending. The server does not
    /// guarantee an order, so the dashboard sorts before rendering.
    pub fn countries_by_count(&self) -> Vec<&CountryCount> {
        let mut countries: Vec<&CountryCount> = self.top_countries.iter().collect();
        countries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
        countries
    }
}

/// Per-country node tally within [`NetworkStats`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCount {
    pub country: String,
    /// ISO 3166-1 alpha-2 code.
    pub country_code: String,
    pub count: u64,
}

/// Kind of a node in map listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Bootstrap,
    Grpc,
    Jsonrpc,
    Peer,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Bootstrap => "Bootstrap",
            NodeKind::Grpc => "gRPC",
            NodeKind::Jsonrpc => "JSON-RPC",
            NodeKind::Peer => "Peer",
        }
    }
}

/// Current reachability of a node in map listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    Online,
    Offline,
    Unknown,
}

/// A node positioned for geographic display, as returned by `getMapNodes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapNode {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// `[latitude, longitude]` in degrees.
    pub coordinates: [f64; 2],
    pub status: OnlineStatus,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: Option<String>,
}

/// One historical point from the server's snapshot log, as returned by
/// `getSnapshots`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub id: u64,
    pub timestamp: String,
    pub total_nodes: u64,
    pub reachable_nodes: u64,
    pub countries_count: u64,
    pub grpc_nodes: u64,
    pub jsonrpc_nodes: u64,
    pub bootstrap_nodes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_wire_casing() {
        let json = r#"{
            "totalNodes": 412,
            "reachableNodes": 388,
            "countriesCount": 31,
            "avgUptime": 97.4,
            "topCountries": [
                {"country": "Germany", "countryCode": "DE", "count": 80},
                {"country": "United States", "countryCode": "US", "count": 120}
            ],
            "grpcNodes": 200,
            "jsonrpcNodes": 150,
            "bootstrapNodes": 62
        }"#;
        let stats: NetworkStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_nodes, 412);

        let sorted = stats.countries_by_count();
        assert_eq!(sorted[0].country_code, "US");
        assert_eq!(sorted[1].country_code, "DE");
    }

    #[test]
    fn test_map_node_kind_tag() {
        let json = r#"{
            "id": 3,
            "name": "seed-1",
            "type": "bootstrap",
            "coordinates": [48.85, 2.35],
            "status": "online",
            "country": "France",
            "city": "Paris"
        }"#;
        let node: MapNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Bootstrap);
        assert_eq!(node.status, OnlineStatus::Online);
        assert_eq!(node.kind.label(), "Bootstrap");
    }
}
