//! Data processing - converts raw snapshots into display-ready rows.

mod dashboard;

pub use dashboard::{DashboardConfig, DashboardData, NodeDisplay, Reachability};
