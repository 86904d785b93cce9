//! JSON-RPC client for the monitoring API.
//!
//! The monitoring server exposes one JSON-RPC 2.0 endpoint for node
//! listings, statistics and registration, plus a legacy REST endpoint for
//! the peer listing. Both sit under a versioned path:
//!
//! ```text
//! {base}/api/{version}/json-rpc
//! {base}/api/{version}/peers
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use nodewatch_client::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::builder()
//!         .base_url("http://127.0.0.1:4622")
//!         .build();
//!
//!     let nodes = client.get_nodes().await?;
//!     for node in &nodes {
//!         println!("{}: {:.2}%", node.name, node.overall_score);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use nodewatch_types::{
    BootstrapNode, CountResponse, HealthResponse, MapNode, MonitoredNode, NetworkSnapshot,
    NetworkStats, NodeRegistration, PeerNode, RegistrationRequest, RegistrationResponse,
    SnapshotRecord, StatusResponse, SyncResponse,
};

use crate::ClientError;

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
struct JsonRpcResponse<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Client for the monitoring API.
#[derive(Debug)]
pub struct ApiClient {
    http: Client,
    rpc_url: String,
    peers_url: String,
    request_id: AtomicU64,
}

impl ApiClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The JSON-RPC endpoint this client posts to.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// One generic JSON-RPC round trip.
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, ClientError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: self.request_id.fetch_add(1, Ordering::Relaxed),
        };

        let response = self.http.post(&self.rpc_url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        let envelope: JsonRpcResponse<T> = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        if let Some(error) = envelope.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        envelope.result.ok_or(ClientError::MissingResult)
    }

    // ---- node listings ----

    /// All monitored gRPC nodes with their status history.
    pub async fn get_nodes(&self) -> Result<Vec<MonitoredNode>, ClientError> {
        self.call("getNodes", json!({})).await
    }

    /// All monitored JSON-RPC nodes, optionally restricted to one network.
    pub async fn get_jsonrpc_nodes(
        &self,
        network: Option<&str>,
    ) -> Result<Vec<MonitoredNode>, ClientError> {
        self.call("getJSONRPCNodes", json!({ "network": network })).await
    }

    /// All bootstrap nodes with their status history.
    pub async fn get_bootstrap_nodes(&self) -> Result<Vec<BootstrapNode>, ClientError> {
        self.call("getBootstrapNodes", json!({})).await
    }

    /// Discovered peers, served by the legacy REST endpoint.
    pub async fn get_peer_nodes(&self) -> Result<Vec<PeerNode>, ClientError> {
        let response = self.http.get(&self.peers_url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Http(format!(
                "API returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    // ---- health sweeps and counts ----

    /// Trigger a health-check sweep over all gRPC nodes.
    pub async fn check_all_nodes(&self) -> Result<StatusResponse, ClientError> {
        self.call("checkAllNodes", json!({})).await
    }

    /// Trigger a health-check sweep over all bootstrap nodes.
    pub async fn check_all_bootstrap_nodes(&self) -> Result<StatusResponse, ClientError> {
        self.call("checkAllBootstrapNodes", json!({})).await
    }

    pub async fn get_node_count(&self) -> Result<CountResponse, ClientError> {
        self.call("getNodeCount", json!({})).await
    }

    pub async fn get_bootstrap_node_count(&self) -> Result<CountResponse, ClientError> {
        self.call("getBootstrapNodeCount", json!({})).await
    }

    /// Re-sync the gRPC node list from its upstream source.
    pub async fn sync_nodes(&self) -> Result<SyncResponse, ClientError> {
        self.call("syncNodes", json!({})).await
    }

    /// Re-sync the bootstrap node list from its upstream source.
    pub async fn sync_bootstrap_nodes(&self) -> Result<SyncResponse, ClientError> {
        self.call("syncBootstrapNodes", json!({})).await
    }

    /// Monitoring server liveness.
    pub async fn get_health(&self) -> Result<HealthResponse, ClientError> {
        self.call("getHealth", json!({})).await
    }

    // ---- statistics and map ----

    pub async fn get_network_stats(&self) -> Result<NetworkStats, ClientError> {
        self.call("getNetworkStats", json!({})).await
    }

    pub async fn get_map_nodes(&self) -> Result<Vec<MapNode>, ClientError> {
        self.call("getMapNodes", json!({})).await
    }

    /// Historical network snapshots, most recent first.
    pub async fn get_snapshots(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<SnapshotRecord>, ClientError> {
        self.call("getSnapshots", json!({ "limit": limit.unwrap_or(10) })).await
    }

    // ---- registration ----

    /// Submit a public node for listing.
    pub async fn register_node(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ClientError> {
        let params = serde_json::to_value(request).map_err(|e| ClientError::Parse(e.to_string()))?;
        self.call("registerNode", params).await
    }

    /// Review state of a previously submitted registration.
    pub async fn get_registration_status(&self, id: u64) -> Result<NodeRegistration, ClientError> {
        self.call("getRegistrationStatus", json!({ "id": id })).await
    }

    // ---- aggregation ----

    /// Run one full polling round and assemble a [`NetworkSnapshot`].
    ///
    /// The node listings are required; statistics, map and peers degrade to
    /// empty because older servers do not expose those methods.
    pub async fn collect(&self) -> Result<NetworkSnapshot, ClientError> {
        let nodes = self.get_nodes().await?;
        let bootstrap = self.get_bootstrap_nodes().await?;
        let jsonrpc = self.get_jsonrpc_nodes(None).await.unwrap_or_default();
        let stats = self.get_network_stats().await.ok();
        let map = self.get_map_nodes().await.unwrap_or_default();
        let peers = self.get_peer_nodes().await.unwrap_or_default();

        Ok(NetworkSnapshot {
            nodes,
            jsonrpc,
            bootstrap,
            peers,
            map,
            stats,
        })
    }
}

/// Builder for [`ApiClient`].
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    version: Option<String>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Set the server base URL (e.g. `"http://127.0.0.1:4622"`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the API version path segment (default: `"v1"`).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the request timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiClient {
        let timeout = self.timeout.unwrap_or(Duration::from_secs(10));
        let base = self
            .base_url
            .unwrap_or_else(|| "http://127.0.0.1:4622".to_string());
        let base = base.trim_end_matches('/');
        let version = self.version.unwrap_or_else(|| "v1".to_string());

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        ApiClient {
            http,
            rpc_url: format!("{base}/api/{version}/json-rpc"),
            peers_url: format!("{base}/api/{version}/peers"),
            request_id: AtomicU64::new(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = ApiClient::builder().build();
        assert_eq!(client.rpc_url, "http://127.0.0.1:4622/api/v1/json-rpc");
        assert_eq!(client.peers_url, "http://127.0.0.1:4622/api/v1/peers");
    }

    #[test]
    fn test_builder_custom() {
        let client = ApiClient::builder()
            .base_url("https://monitor.example.org/")
            .version("v2")
            .build();
        assert_eq!(client.rpc_url, "https://monitor.example.org/api/v2/json-rpc");
        assert_eq!(client.peers_url, "https://monitor.example.org/api/v2/peers");
    }

    #[test]
    fn test_request_envelope_shape() {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method: "getNodes",
            params: json!({}),
            id: 7,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "getNodes");
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn test_response_with_result() {
        let envelope: JsonRpcResponse<Vec<MonitoredNode>> = serde_json::from_str(
            r#"{
                "jsonrpc": "2.0",
                "result": [
                    {"name": "n1", "address": "a:1", "status": null, "overallScore": 80.0}
                ],
                "id": 1
            }"#,
        )
        .unwrap();
        assert!(envelope.error.is_none());
        assert_eq!(envelope.result.unwrap().len(), 1);
    }

    #[test]
    fn test_response_with_error() {
        let envelope: JsonRpcResponse<Vec<MonitoredNode>> = serde_json::from_str(
            r#"{
                "jsonrpc": "2.0",
                "error": {"code": -32601, "message": "Method not found"},
                "id": 1
            }"#,
        )
        .unwrap();
        assert!(envelope.result.is_none());
        let error = envelope.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Method not found");
    }

    #[test]
    fn test_response_missing_result_detected() {
        let envelope: JsonRpcResponse<CountResponse> =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "id": 1}"#).unwrap();
        assert!(envelope.result.is_none());
        assert!(envelope.error.is_none());
    }
}
