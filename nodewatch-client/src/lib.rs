//! # nodewatch-client
//!
//! Async client for the nodewatch monitoring API.
//!
//! The monitoring server tracks the health of blockchain network nodes and
//! serves the results over a JSON-RPC 2.0 endpoint (node listings,
//! statistics, registration) and a legacy REST endpoint (peer listing).
//! This crate wraps both behind typed methods returning the schema from
//! [`nodewatch_types`].
//!
//! ## Quick start
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
//!     // One full polling round: listings, stats, peers.
//!     let snapshot = client.collect().await?;
//!     println!("monitoring {} nodes", snapshot.monitored_count());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod rpc;

pub use error::ClientError;
pub use rpc::{ApiClient, ApiClientBuilder};

// Re-export the schema for convenience
pub use nodewatch_types::{NetworkSnapshot, NetworkStats};
