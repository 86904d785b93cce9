//! # nodewatch-tui
//!
//! A terminal dashboard for monitoring blockchain network node health.
//!
//! The dashboard consumes [`NetworkSnapshot`]s - the output of one polling
//! round against the nodewatch monitoring API - and renders per-node
//! 30-day status strips, network statistics, country distribution and a
//! geographic peer listing in an interactive terminal UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐   ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │──▶│ Terminal│ │
//! │  │ (state) │    │(processing)   │(rendering)  │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘   └─────────┘ │
//! │       │                                                    │
//! │       ▼                                                    │
//! │  ┌─────────┐                                               │
//! │  │ source  │◀── RpcSource | FileSource | ChannelSource    │
//! │  │ (input) │                                               │
//! │  └─────────┘                                               │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, and user interaction
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with
//!   implementations for live API polling, snapshot files, and channels
//! - **[`data`]**: Snapshot processing - normalizes each node's status
//!   history into a dense trailing window and derives reachability
//! - **[`ui`]**: Terminal rendering using ratatui - health strips, stat
//!   cards, peer tables, identicon detail overlay, and theme support
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch the live monitoring API
//! nodewatch --base-url http://127.0.0.1:4622
//!
//! # Replay a captured snapshot file
//! nodewatch --file snapshot.json
//! ```
//!
//! ### As a library with a file source
//!
//! ```
//! use nodewatch_tui::{App, DashboardConfig, FileSource, Theme};
//!
//! let source = Box::new(FileSource::new("snapshot.json"));
//! let app = App::new(source, DashboardConfig::default(), Theme::dark());
//! ```
//!
//! ### As a library with a channel source
//!
//! ```
//! use nodewatch_tui::{App, ChannelSource, DashboardConfig, Theme};
//!
//! // The sender half feeds snapshots from anywhere in-process
//! let (tx, source) = ChannelSource::create("embedded");
//! let app = App::new(Box::new(source), DashboardConfig::default(), Theme::dark());
//! ```
//!
//! ### As a library with the live poller
//!
//! ```no_run
//! use std::time::Duration;
//! use nodewatch_client::ApiClient;
//! use nodewatch_tui::RpcSource;
//!
//! # tokio_test::block_on(async {
//! let client = ApiClient::builder().base_url("http://127.0.0.1:4622").build();
//! let (source, handle) = RpcSource::spawn(client, Duration::from_secs(30));
//! # handle.abort();
//! # });
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use data::{DashboardConfig, DashboardData, NodeDisplay, Reachability};
pub use nodewatch_types::NetworkSnapshot;
pub use source::{ChannelSource, DataSource, FileSource, RpcSource};
pub use ui::Theme;
