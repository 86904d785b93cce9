//! Node health view rendering.
//!
//! One table per node listing (gRPC, JSON-RPC, bootstrap): node name, a
//! colored strip with one cell per day of the trailing window, uptime score
//! and reachability.

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::NodeDisplay;

/// Column to sort by in the node views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    /// Sort by node name alphabetically.
    #[default]
    Name,
    /// Sort by overall uptime score.
    Score,
    /// Sort by reachability verdict.
    Status,
}

impl SortColumn {
    /// Cycle to the next sort column.
    pub fn next(self) -> Self {
        match self {
            SortColumn::Name => SortColumn::Score,
            SortColumn::Score => SortColumn::Status,
            SortColumn::Status => SortColumn::Name,
        }
    }

    fn label(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Score => "score",
            SortColumn::Status => "status",
        }
    }
}

/// Render a node listing as a sortable table with day strips.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ref data) = app.data else {
        return;
    };
    let Some(nodes) = data.nodes_for(app.current_view) else {
        return;
    };

    let total = nodes.len();
    let mut rows_data: Vec<&NodeDisplay> =
        nodes.iter().filter(|n| app.matches_filter(&n.name)).collect();
    sort_nodes_by(&mut rows_data, app.sort_column, app.sort_ascending);

    let window_days = app.config.window_days;

    let header = Row::new(vec![
        Cell::from(format_header("Node", SortColumn::Name, app)),
        Cell::from(format!("Last {window_days} days")),
        Cell::from(format_header("Score", SortColumn::Score, app)),
        Cell::from(format_header("State", SortColumn::Status, app)),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = rows_data
        .iter()
        .map(|node| {
            let state_style = app.theme.reachability_style(node.reachability);
            Row::new(vec![
                Cell::from(node.name.clone()),
                Cell::from(day_strip(node, app)),
                Cell::from(format!("{:6.2}%", node.overall_score)),
                Cell::from(node.reachability.symbol()).style(state_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(1),
        Constraint::Length(window_days.min(120) as u16 + 2),
        Constraint::Length(8),
        Constraint::Min(6),
    ];

    let selected = app.selected_index.min(rows_data.len().saturating_sub(1));

    let sort_dir = if app.sort_ascending { "↑" } else { "↓" };
    let filter_info = if app.filter_active {
        format!(" /{}_", app.filter_text)
    } else if !app.filter_text.is_empty() {
        format!(" /{}/ [c:clear]", app.filter_text)
    } else {
        String::new()
    };
    let position_info = if !rows_data.is_empty() {
        format!(" [{}/{}]", selected + 1, rows_data.len())
    } else {
        String::new()
    };

    let title = format!(
        " {} Nodes ({}/{}) [s:sort {}{}]{}{} ",
        app.current_view.label(),
        rows_data.len(),
        total,
        app.sort_column.label(),
        sort_dir,
        filter_info,
        position_info
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(ratatui::style::Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(table, area, &mut state);
}

/// One colored character per day, oldest left, today rightmost.
fn day_strip(node: &NodeDisplay, app: &App) -> Line<'static> {
    let spans: Vec<Span> = node
        .window
        .iter()
        .map(|day| {
            Span::styled(
                "▇",
                ratatui::style::Style::default().fg(app.theme.day_color(day.health())),
            )
        })
        .collect();
    Line::from(spans)
}

fn format_header(name: &str, col: SortColumn, app: &App) -> String {
    if app.sort_column == col && app.current_view.is_node_view() {
        let arrow = if app.sort_ascending { "↑" } else { "↓" };
        format!("{name}{arrow}")
    } else {
        name.to_string()
    }
}

/// Sort node rows by the given column and direction (also used by App to
/// resolve the visual selection).
pub fn sort_nodes_by(nodes: &mut [&NodeDisplay], column: SortColumn, ascending: bool) {
    nodes.sort_by(|a, b| {
        let primary = match column {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Score => a
                .overall_score
                .partial_cmp(&b.overall_score)
                .unwrap_or(std::cmp::Ordering::Equal),
            SortColumn::Status => (a.reachability.symbol()).cmp(b.reachability.symbol()),
        };

        let primary = if ascending { primary } else { primary.reverse() };

        // Secondary sort by name keeps equal rows stable across reloads
        if primary == std::cmp::Ordering::Equal {
            a.name.cmp(&b.name)
        } else {
            primary
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DashboardConfig, DashboardData};
    use nodewatch_types::{DailyStatus, MonitoredNode, NetworkSnapshot};

    fn display_nodes() -> DashboardData {
        let snapshot = NetworkSnapshot {
            nodes: vec![
                MonitoredNode {
                    name: "beta".into(),
                    address: "b:1".into(),
                    network: "mainnet".into(),
                    email: String::new(),
                    website: String::new(),
                    status: Some(vec![DailyStatus::new("2024-01-03", 0)]),
                    overall_score: 20.0,
                },
                MonitoredNode {
                    name: "alpha".into(),
                    address: "a:1".into(),
                    network: "mainnet".into(),
                    email: String::new(),
                    website: String::new(),
                    status: Some(vec![DailyStatus::new("2024-01-03", 2)]),
                    overall_score: 95.0,
                },
            ],
            ..Default::default()
        };
        DashboardData::from_snapshot(
            snapshot,
            "2024-01-03".parse().unwrap(),
            &DashboardConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_sort_by_score_descending() {
        let data = display_nodes();
        let mut rows: Vec<&NodeDisplay> = data.grpc.iter().collect();
        sort_nodes_by(&mut rows, SortColumn::Score, false);
        assert_eq!(rows[0].name, "alpha");
        assert_eq!(rows[1].name, "beta");
    }

    #[test]
    fn test_sort_by_name_default() {
        let data = display_nodes();
        let mut rows: Vec<&NodeDisplay> = data.grpc.iter().collect();
        sort_nodes_by(&mut rows, SortColumn::Name, true);
        assert_eq!(rows[0].name, "alpha");
    }

    #[test]
    fn test_sort_column_cycle() {
        assert_eq!(SortColumn::Name.next(), SortColumn::Score);
        assert_eq!(SortColumn::Score.next(), SortColumn::Status);
        assert_eq!(SortColumn::Status.next(), SortColumn::Name);
    }
}
