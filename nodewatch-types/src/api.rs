//! Service envelopes and node-registration payloads.

use serde::{Deserialize, Serialize};

/// Result of a count query (`getNodeCount`, `getBootstrapNodeCount`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub total: u64,
    pub timestamp: String,
}

/// Acknowledgement of a triggered health-check sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub timestamp: String,
}

/// Result of a node-list sync from the upstream source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResponse {
    pub message: String,
    pub total_servers: u64,
    pub timestamp: String,
}

/// Monitoring server liveness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Request to list a public node for monitoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    /// `"grpc"` or `"jsonrpc"`.
    pub node_type: String,
    pub name: String,
    pub address: String,
    /// `"mainnet"` or `"testnet"`.
    pub network: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Immediate acknowledgement of a registration submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub id: u64,
    pub status: String,
    pub message: String,
}

/// Review state of a pending registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRegistration {
    pub id: u64,
    pub node_type: String,
    pub name: String,
    pub address: String,
    pub network: String,
    pub email: String,
    #[serde(default)]
    pub website: String,
    pub status: String,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_request_casing() {
        let request = RegistrationRequest {
            node_type: "grpc".into(),
            name: "my-node".into(),
            address: "grpc.example.org:50051".into(),
            network: "mainnet".into(),
            email: "ops@example.org".into(),
            website: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["nodeType"], "grpc");
        // Absent website is omitted, not serialized as null.
        assert!(value.get("website").is_none());
    }

    #[test]
    fn test_registration_status_optional_fields() {
        let json = r#"{
            "id": 9,
            "nodeType": "jsonrpc",
            "name": "n",
            "address": "a",
            "network": "testnet",
            "email": "e@example.org",
            "status": "pending",
            "createdAt": "2024-01-03T08:00:00Z"
        }"#;
        let registration: NodeRegistration = serde_json::from_str(json).unwrap();
        assert_eq!(registration.status, "pending");
        assert!(registration.rejection_reason.is_none());
        assert!(registration.reviewed_at.is_none());
    }
}
