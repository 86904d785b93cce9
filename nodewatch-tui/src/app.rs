//! Application state and navigation logic.

use anyhow::Result;
use chrono::Utc;

use crate::data::{DashboardConfig, DashboardData, NodeDisplay};
use crate::source::DataSource;
use crate::ui::health::{sort_nodes_by, SortColumn};
use crate::ui::Theme;

/// The current view/tab in the TUI.
///
/// Node detail is shown as an overlay (controlled by
/// `App::show_detail_overlay`) rather than as a separate view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Network statistics and country distribution.
    Overview,
    /// gRPC node health strips.
    Grpc,
    /// JSON-RPC node health strips.
    JsonRpc,
    /// Bootstrap node health strips.
    Bootstrap,
    /// Discovered peers with their locations.
    Peers,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Overview => View::Grpc,
            View::Grpc => View::JsonRpc,
            View::JsonRpc => View::Bootstrap,
            View::Bootstrap => View::Peers,
            View::Peers => View::Overview,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Overview => View::Peers,
            View::Grpc => View::Overview,
            View::JsonRpc => View::Grpc,
            View::Bootstrap => View::JsonRpc,
            View::Peers => View::Bootstrap,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Grpc => "gRPC",
            View::JsonRpc => "JSON-RPC",
            View::Bootstrap => "Bootstrap",
            View::Peers => "Peers",
        }
    }

    /// Whether this view lists health-tracked nodes.
    pub fn is_node_view(&self) -> bool {
        matches!(self, View::Grpc | View::JsonRpc | View::Bootstrap)
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,
    pub show_detail_overlay: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub data: Option<DashboardData>,
    pub load_error: Option<String>,
    pub config: DashboardConfig,

    // Navigation state (visual index into the filtered/sorted list)
    pub selected_index: usize,

    // Sorting (node views)
    pub sort_column: SortColumn,
    pub sort_ascending: bool,

    // Search/filter
    pub filter_text: String,
    pub filter_active: bool,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, std::time::Instant)>,
}

impl App {
    /// Create a new App with the given data source and display config.
    pub fn new(source: Box<dyn DataSource>, config: DashboardConfig, theme: Theme) -> Self {
        Self {
            running: true,
            current_view: View::Overview,
            show_help: false,
            show_detail_overlay: false,
            source,
            data: None,
            load_error: None,
            config,
            selected_index: 0,
            sort_column: SortColumn::default(),
            sort_ascending: true,
            filter_text: String::new(),
            filter_active: false,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, std::time::Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source for new data.
    ///
    /// Returns Ok(true) if new data was received, Ok(false) if no new data.
    /// The window is always anchored at the current UTC day, so a dashboard
    /// left running overnight rolls over with the server.
    pub fn reload_data(&mut self) -> Result<bool> {
        if let Some(err) = self.source.error() {
            self.load_error = Some(err.to_string());
        }

        if let Some(snapshot) = self.source.poll() {
            let today = Utc::now().date_naive();
            let data = DashboardData::from_snapshot(snapshot, today, &self.config)?;
            self.data = Some(data);
            self.load_error = None;

            // Clamp selection to the new row count
            let rows = self.visible_row_count();
            self.selected_index = self.selected_index.min(rows.saturating_sub(1));
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.set_view(self.current_view.next());
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.set_view(self.current_view.prev());
    }

    /// Switch to a specific view, resetting selection and overlay.
    pub fn set_view(&mut self, view: View) {
        if self.current_view != view {
            self.current_view = view;
            self.selected_index = 0;
            self.show_detail_overlay = false;
        }
    }

    /// Number of selectable rows in the current view after filtering.
    pub fn visible_row_count(&self) -> usize {
        let Some(ref data) = self.data else {
            return 0;
        };
        if let Some(nodes) = data.nodes_for(self.current_view) {
            nodes.iter().filter(|n| self.matches_filter(&n.name)).count()
        } else if self.current_view == View::Peers {
            data.peers
                .iter()
                .filter(|p| self.matches_peer_filter(p))
                .count()
        } else {
            0
        }
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.visible_row_count().saturating_sub(1);
        self.selected_index = (self.selected_index + n).min(max);
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        self.selected_index = self.visible_row_count().saturating_sub(1);
    }

    /// The node behind the current visual selection, if the current view
    /// lists nodes. Re-applies filter and sort, because the visual row
    /// order differs from the underlying data order.
    pub fn selected_node(&self) -> Option<&NodeDisplay> {
        let data = self.data.as_ref()?;
        let nodes = data.nodes_for(self.current_view)?;

        let mut rows: Vec<&NodeDisplay> =
            nodes.iter().filter(|n| self.matches_filter(&n.name)).collect();
        sort_nodes_by(&mut rows, self.sort_column, self.sort_ascending);

        rows.get(self.selected_index).copied()
    }

    /// Open the detail overlay for the currently selected node.
    pub fn enter_detail(&mut self) {
        if self.current_view.is_node_view() && self.selected_node().is_some() {
            self.show_detail_overlay = true;
        }
    }

    /// Navigate back: close overlays first, then return to the Overview.
    pub fn go_back(&mut self) {
        if self.show_detail_overlay {
            self.show_detail_overlay = false;
            return;
        }
        if self.current_view != View::Overview {
            self.set_view(View::Overview);
        }
    }

    /// Close the detail overlay if open.
    pub fn close_overlay(&mut self) {
        self.show_detail_overlay = false;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Cycle to the next sort column (node views only).
    pub fn cycle_sort(&mut self) {
        if self.current_view.is_node_view() {
            self.sort_column = self.sort_column.next();
        }
    }

    /// Toggle sort direction between ascending and descending.
    pub fn toggle_sort_direction(&mut self) {
        if self.current_view.is_node_view() {
            self.sort_ascending = !self.sort_ascending;
        }
    }

    /// Enter filter input mode (starts capturing keystrokes for search).
    pub fn start_filter(&mut self) {
        self.filter_active = true;
    }

    /// Exit filter input mode without clearing the filter text.
    pub fn cancel_filter(&mut self) {
        self.filter_active = false;
    }

    /// Clear the filter text and exit filter mode.
    pub fn clear_filter(&mut self) {
        self.filter_text.clear();
        self.filter_active = false;
    }

    /// Append a character to the filter text.
    pub fn filter_push(&mut self, c: char) {
        self.filter_text.push(c);
    }

    /// Remove the last character from the filter text.
    pub fn filter_pop(&mut self) {
        self.filter_text.pop();
    }

    /// Check if a node name matches the current filter.
    pub fn matches_filter(&self, name: &str) -> bool {
        if self.filter_text.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&self.filter_text.to_lowercase())
    }

    /// Peers match on name, country or city.
    pub fn matches_peer_filter(&self, peer: &nodewatch_types::PeerNode) -> bool {
        self.matches_filter(&peer.name)
            || self.matches_filter(&peer.country)
            || self.matches_filter(&peer.city)
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the processed dashboard summary to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        use std::io::Write;

        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };

        let json = serde_json::to_string_pretty(&data.summary_value())?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ChannelSource;
    use nodewatch_types::{DailyStatus, MonitoredNode, NetworkSnapshot};

    fn app_with_nodes(names: &[&str]) -> App {
        let (tx, source) = ChannelSource::create("test");
        let snapshot = NetworkSnapshot {
            nodes: names
                .iter()
                .map(|name| MonitoredNode {
                    name: (*name).into(),
                    address: format!("{name}:50051"),
                    network: "mainnet".into(),
                    email: String::new(),
                    website: String::new(),
                    status: Some(vec![DailyStatus::new("2024-01-03", 2)]),
                    overall_score: 50.0,
                })
                .collect(),
            ..Default::default()
        };
        tx.send(snapshot).unwrap();

        let mut app = App::new(
            Box::new(source),
            DashboardConfig::default(),
            Theme::dark(),
        );
        // The watch channel hands the latest value to the first poll.
        app.reload_data().unwrap();
        app
    }

    #[test]
    fn test_view_cycle_is_closed() {
        let mut view = View::Overview;
        for _ in 0..5 {
            view = view.next();
        }
        assert_eq!(view, View::Overview);
        assert_eq!(View::Overview.prev(), View::Peers);
    }

    #[test]
    fn test_selection_bounded_by_rows() {
        let mut app = app_with_nodes(&["a", "b", "c"]);
        app.set_view(View::Grpc);
        assert_eq!(app.visible_row_count(), 3);

        app.select_next_n(10);
        assert_eq!(app.selected_index, 2);
        app.select_prev();
        assert_eq!(app.selected_index, 1);
        app.select_first();
        assert_eq!(app.selected_index, 0);
        app.select_last();
        assert_eq!(app.selected_index, 2);
    }

    #[test]
    fn test_filter_narrows_selection() {
        let mut app = app_with_nodes(&["alpha", "beta", "alpine"]);
        app.set_view(View::Grpc);

        app.filter_text = "alp".into();
        assert_eq!(app.visible_row_count(), 2);

        app.selected_index = 1;
        let node = app.selected_node().unwrap();
        assert_eq!(node.name, "alpine");
    }

    #[test]
    fn test_detail_only_on_node_views() {
        let mut app = app_with_nodes(&["a"]);
        app.enter_detail();
        assert!(!app.show_detail_overlay);

        app.set_view(View::Grpc);
        app.enter_detail();
        assert!(app.show_detail_overlay);

        app.go_back();
        assert!(!app.show_detail_overlay);
        assert_eq!(app.current_view, View::Grpc);
        app.go_back();
        assert_eq!(app.current_view, View::Overview);
    }

    #[test]
    fn test_sort_cycling_ignored_outside_node_views() {
        let mut app = app_with_nodes(&["a"]);
        let before = app.sort_column;
        app.cycle_sort();
        assert_eq!(app.sort_column, before);

        app.set_view(View::Grpc);
        app.cycle_sort();
        assert_ne!(app.sort_column, before);
    }
}
