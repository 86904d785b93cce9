//! Terminal rendering using ratatui.
//!
//! - [`common`]: header, tab bar, status bar and help overlay
//! - [`overview`]: stat cards and country distribution
//! - [`health`]: node tables with per-day status strips
//! - [`peers`]: geographic peer listing
//! - [`detail`]: modal overlay with identicon and dated history
//! - [`theme`]: light/dark themes with terminal auto-detection

pub mod common;
pub mod detail;
pub mod health;
pub mod overview;
pub mod peers;
pub mod theme;

pub use health::SortColumn;
pub use theme::Theme;
