//! Data source abstraction for receiving network snapshots.
//!
//! The dashboard can be fed from the live monitoring API, from a snapshot
//! file captured earlier, or from an in-process channel. All three sit
//! behind the [`DataSource`] trait.

mod channel;
mod file;
mod rpc;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use rpc::RpcSource;

use std::fmt::Debug;

use nodewatch_types::NetworkSnapshot;

/// Trait for receiving network snapshots from various backends.
///
/// # Example
///
/// ```
/// use nodewatch_tui::source::{DataSource, FileSource};
///
/// let mut source = FileSource::new("snapshot.json");
/// if let Some(snapshot) = source.poll() {
///     println!("got {} monitored nodes", snapshot.monitored_count());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// Non-blocking; the TUI calls this from its render loop.
    fn poll(&mut self) -> Option<NetworkSnapshot>;

    /// Human-readable description of the source for the status bar.
    fn description(&self) -> &str;

    /// The error message from the last poll, if any.
    fn error(&self) -> Option<&str>;
}
