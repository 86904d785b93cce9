//! # nodewatch-types
//!
//! Wire schema and derived display data for the nodewatch monitoring API.
//!
//! A separate monitoring server performs the actual health checks against
//! blockchain network nodes (bootstrap, gRPC, JSON-RPC and peer nodes) and
//! exposes the results over JSON-RPC and REST. This crate defines the types
//! those endpoints exchange, plus the small amount of pure computation the
//! dashboard layers on top of them:
//!
//! - **[`status`]**: daily status codes and their health classification
//! - **[`window`]**: normalization of sparse daily observations into a dense,
//!   fixed-length trailing window of calendar days
//! - **[`identicon`]**: deterministic placeholder avatars derived from node
//!   names
//! - **[`node`]**, **[`stats`]**, **[`snapshot`]**, **[`api`]**: serde
//!   mirrors of the monitoring API payloads
//!
//! Everything in this crate is synchronous and free of I/O; the derivation
//! functions are pure and safe to call concurrently.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use nodewatch_types::{normalize, DailyStatus, Identicon, NO_DATA};
//!
//! let observations = vec![DailyStatus {
//!     date: "2024-01-03".into(),
//!     color: 2,
//! }];
//! let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//!
//! let window = normalize(&observations, today, 30).unwrap();
//! assert_eq!(window.len(), 30);
//! assert_eq!(window[29].code, 2);
//! assert_eq!(window[0].code, NO_DATA);
//!
//! let avatar = Identicon::from_name("my-node");
//! assert_eq!(avatar, Identicon::from_name("my-node"));
//! ```

pub mod api;
pub mod identicon;
pub mod node;
pub mod snapshot;
pub mod stats;
pub mod status;
pub mod window;

pub use api::{
    CountResponse, HealthResponse, NodeRegistration, RegistrationRequest, RegistrationResponse,
    StatusResponse, SyncResponse,
};
pub use identicon::{Hsl, Identicon, GRID_SIZE};
pub use node::{BootstrapNode, MonitoredNode, PeerNode};
pub use snapshot::NetworkSnapshot;
pub use stats::{CountryCount, MapNode, NetworkStats, NodeKind, OnlineStatus, SnapshotRecord};
pub use status::{DailyStatus, HealthState, NO_DATA};
pub use window::{normalize, DayStatus, WindowError, DEFAULT_WINDOW_DAYS};
