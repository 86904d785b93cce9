//! Snapshot processing: raw API payloads to display-ready dashboard data.
//!
//! Turns one [`NetworkSnapshot`] into per-node rows carrying a normalized
//! status window, a reachability verdict and an identicon, with the
//! configured network filter applied.

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use nodewatch_types::{
    normalize, BootstrapNode, DailyStatus, DayStatus, HealthState, Identicon, MonitoredNode,
    NetworkSnapshot, NetworkStats, PeerNode, DEFAULT_WINDOW_DAYS,
};

use crate::app::View;

/// Display-layer configuration applied when processing snapshots.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Trailing window length in days. Never zero (the CLI enforces it, and
    /// the normalizer rejects it).
    pub window_days: usize,
    /// Restrict gRPC/JSON-RPC listings to one network (`None` = show all).
    pub network: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            network: None,
        }
    }
}

/// Reachability verdict for a node, derived from its most recent
/// observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Up,
    Down,
    /// No usable observation in the window.
    Unknown,
}

impl Reachability {
    pub fn symbol(&self) -> &'static str {
        match self {
            Reachability::Up => "Up",
            Reachability::Down => "Down",
            Reachability::Unknown => "?",
        }
    }

    /// Derive from a normalized window: the newest day that carries a real
    /// observation decides.
    fn from_window(window: &[DayStatus]) -> Self {
        for day in window.iter().rev() {
            match day.health() {
                HealthState::Healthy => return Reachability::Up,
                HealthState::Failed => return Reachability::Down,
                HealthState::Unknown => return Reachability::Unknown,
                HealthState::NoData => continue,
            }
        }
        Reachability::Unknown
    }
}

/// One monitored node, processed for display.
#[derive(Debug, Clone)]
pub struct NodeDisplay {
    pub name: String,
    pub address: String,
    pub network: String,
    pub email: String,
    pub website: String,
    pub overall_score: f64,
    /// Dense trailing window, oldest first, today last.
    pub window: Vec<DayStatus>,
    pub reachability: Reachability,
    pub identicon: Identicon,
}

impl NodeDisplay {
    fn from_monitored(node: MonitoredNode, today: NaiveDate, window_days: usize) -> Result<Self> {
        let observations = node.status.unwrap_or_default();
        Self::build(
            node.name,
            node.address,
            node.network,
            node.email,
            node.website,
            &observations,
            node.overall_score,
            today,
            window_days,
        )
    }

    fn from_bootstrap(node: BootstrapNode, today: NaiveDate, window_days: usize) -> Result<Self> {
        let observations = node.status.unwrap_or_default();
        Self::build(
            node.name,
            node.address,
            String::new(),
            node.email,
            node.website,
            &observations,
            node.overall_score,
            today,
            window_days,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        name: String,
        address: String,
        network: String,
        email: String,
        website: String,
        observations: &[DailyStatus],
        overall_score: f64,
        today: NaiveDate,
        window_days: usize,
    ) -> Result<Self> {
        let window = normalize(observations, today, window_days)
            .with_context(|| format!("normalizing status window for {name}"))?;
        let reachability = Reachability::from_window(&window);
        let identicon = Identicon::from_name(&name);
        Ok(Self {
            name,
            address,
            network,
            email,
            website,
            overall_score,
            window,
            reachability,
            identicon,
        })
    }

    /// Days in the window that carry a real observation, oldest first.
    pub fn observed_days(&self) -> impl Iterator<Item = &DayStatus> {
        self.window.iter().filter(|d| d.health() != HealthState::NoData)
    }
}

/// Complete processed dashboard state for one snapshot.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub grpc: Vec<NodeDisplay>,
    pub jsonrpc: Vec<NodeDisplay>,
    pub bootstrap: Vec<NodeDisplay>,
    pub peers: Vec<PeerNode>,
    pub stats: Option<NetworkStats>,
    pub last_updated: Instant,
}

impl DashboardData {
    /// Process a raw snapshot. `today` fixes the window's newest day; the
    /// dashboard passes the current UTC date.
    pub fn from_snapshot(
        snapshot: NetworkSnapshot,
        today: NaiveDate,
        config: &DashboardConfig,
    ) -> Result<Self> {
        let on_network = |network: &str| match &config.network {
            Some(wanted) => network == wanted,
            None => true,
        };

        let mut grpc = snapshot
            .nodes
            .into_iter()
            .filter(|n| on_network(&n.network))
            .map(|n| NodeDisplay::from_monitored(n, today, config.window_days))
            .collect::<Result<Vec<_>>>()?;

        let mut jsonrpc = snapshot
            .jsonrpc
            .into_iter()
            .filter(|n| on_network(&n.network))
            .map(|n| NodeDisplay::from_monitored(n, today, config.window_days))
            .collect::<Result<Vec<_>>>()?;

        let mut bootstrap = snapshot
            .bootstrap
            .into_iter()
            .map(|n| NodeDisplay::from_bootstrap(n, today, config.window_days))
            .collect::<Result<Vec<_>>>()?;

        // Stable base order; the table views re-sort on demand.
        grpc.sort_by(|a, b| a.name.cmp(&b.name));
        jsonrpc.sort_by(|a, b| a.name.cmp(&b.name));
        bootstrap.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            grpc,
            jsonrpc,
            bootstrap,
            peers: snapshot.peers,
            stats: snapshot.stats,
            last_updated: Instant::now(),
        })
    }

    /// The node list behind a view, `None` for non-node views.
    pub fn nodes_for(&self, view: View) -> Option<&[NodeDisplay]> {
        match view {
            View::Grpc => Some(&self.grpc),
            View::JsonRpc => Some(&self.jsonrpc),
            View::Bootstrap => Some(&self.bootstrap),
            View::Overview | View::Peers => None,
        }
    }

    /// All health-tracked nodes across the three listings.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &NodeDisplay> {
        self.grpc.iter().chain(self.jsonrpc.iter()).chain(self.bootstrap.iter())
    }

    /// `(up, down, unknown)` counts across all health-tracked nodes.
    pub fn reachability_counts(&self) -> (usize, usize, usize) {
        let mut up = 0;
        let mut down = 0;
        let mut unknown = 0;
        for node in self.iter_nodes() {
            match node.reachability {
                Reachability::Up => up += 1,
                Reachability::Down => down += 1,
                Reachability::Unknown => unknown += 1,
            }
        }
        (up, down, unknown)
    }

    /// Summary document for `--export` and the in-app export key.
    pub fn summary_value(&self) -> serde_json::Value {
        let (up, down, unknown) = self.reachability_counts();

        let node_entry = |n: &NodeDisplay| {
            serde_json::json!({
                "name": n.name,
                "address": n.address,
                "network": n.network,
                "overall_score": n.overall_score,
                "reachability": n.reachability.symbol(),
                "observed_days": n.observed_days().count(),
            })
        };

        serde_json::json!({
            "summary": {
                "monitored": self.grpc.len() + self.jsonrpc.len() + self.bootstrap.len(),
                "up": up,
                "down": down,
                "unknown": unknown,
                "peers": self.peers.len(),
            },
            "grpc": self.grpc.iter().map(node_entry).collect::<Vec<_>>(),
            "jsonrpc": self.jsonrpc.iter().map(node_entry).collect::<Vec<_>>(),
            "bootstrap": self.bootstrap.iter().map(node_entry).collect::<Vec<_>>(),
            "stats": self.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodewatch_types::{DailyStatus, MonitoredNode, NO_DATA};

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn node(name: &str, network: &str, observations: Vec<DailyStatus>) -> MonitoredNode {
        MonitoredNode {
            name: name.into(),
            address: format!("{name}.example.org:50051"),
            network: network.into(),
            email: String::new(),
            website: String::new(),
            status: Some(observations),
            overall_score: 90.0,
        }
    }

    #[test]
    fn test_window_is_dense_and_fixed_length() {
        let snapshot = NetworkSnapshot {
            nodes: vec![node("a", "mainnet", vec![DailyStatus::new("2024-01-03", 2)])],
            ..Default::default()
        };
        let data =
            DashboardData::from_snapshot(snapshot, day("2024-01-03"), &DashboardConfig::default())
                .unwrap();

        let row = &data.grpc[0];
        assert_eq!(row.window.len(), 30);
        assert_eq!(row.window[29].code, 2);
        assert_eq!(row.window[0].code, NO_DATA);
        assert_eq!(row.reachability, Reachability::Up);
    }

    #[test]
    fn test_network_filter() {
        let snapshot = NetworkSnapshot {
            nodes: vec![node("m", "mainnet", vec![]), node("t", "testnet", vec![])],
            ..Default::default()
        };
        let config = DashboardConfig {
            network: Some("mainnet".into()),
            ..Default::default()
        };
        let data = DashboardData::from_snapshot(snapshot, day("2024-01-03"), &config).unwrap();
        assert_eq!(data.grpc.len(), 1);
        assert_eq!(data.grpc[0].name, "m");
    }

    #[test]
    fn test_reachability_from_latest_observation() {
        // Down yesterday is still Down today when today has no data yet.
        let snapshot = NetworkSnapshot {
            nodes: vec![node("a", "mainnet", vec![DailyStatus::new("2024-01-02", 0)])],
            ..Default::default()
        };
        let data =
            DashboardData::from_snapshot(snapshot, day("2024-01-03"), &DashboardConfig::default())
                .unwrap();
        assert_eq!(data.grpc[0].reachability, Reachability::Down);

        let (up, down, unknown) = data.reachability_counts();
        assert_eq!((up, down, unknown), (0, 1, 0));
    }

    #[test]
    fn test_no_observations_is_unknown() {
        let snapshot = NetworkSnapshot {
            nodes: vec![node("a", "mainnet", vec![])],
            ..Default::default()
        };
        let data =
            DashboardData::from_snapshot(snapshot, day("2024-01-03"), &DashboardConfig::default())
                .unwrap();
        assert_eq!(data.grpc[0].reachability, Reachability::Unknown);
        assert_eq!(data.grpc[0].observed_days().count(), 0);
    }

    #[test]
    fn test_nodes_sorted_by_name() {
        let snapshot = NetworkSnapshot {
            nodes: vec![node("zeta", "mainnet", vec![]), node("alpha", "mainnet", vec![])],
            ..Default::default()
        };
        let data =
            DashboardData::from_snapshot(snapshot, day("2024-01-03"), &DashboardConfig::default())
                .unwrap();
        assert_eq!(data.grpc[0].name, "alpha");
        assert_eq!(data.grpc[1].name, "zeta");
    }

    #[test]
    fn test_summary_value_counts() {
        let snapshot = NetworkSnapshot {
            nodes: vec![node("a", "mainnet", vec![DailyStatus::new("2024-01-03", 1)])],
            ..Default::default()
        };
        let data =
            DashboardData::from_snapshot(snapshot, day("2024-01-03"), &DashboardConfig::default())
                .unwrap();
        let summary = data.summary_value();
        assert_eq!(summary["summary"]["monitored"], 1);
        assert_eq!(summary["summary"]["up"], 1);
        assert_eq!(summary["grpc"][0]["observed_days"], 1);
    }
}
