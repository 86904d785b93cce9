//! Overview rendering: stat cards and country distribution.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Width of a full country-distribution bar in characters.
const BAR_WIDTH: usize = 24;

/// Render the Overview: two rows of stat cards plus the country chart.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let loading = Paragraph::new("Loading network statistics...")
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(loading, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // network totals
        Constraint::Length(3), // per-kind counts
        Constraint::Min(4),    // country distribution
    ])
    .split(area);

    // ---- network totals ----
    let (up, _, _) = data.reachability_counts();
    let (total, reachable, countries, avg_uptime) = match data.stats {
        Some(ref stats) => (
            stats.total_nodes.to_string(),
            stats.reachable_nodes.to_string(),
            stats.countries_count.to_string(),
            format!("{:.1}%", stats.avg_uptime),
        ),
        // Older servers carry no statistics; fall back to what the
        // listings themselves show.
        None => (
            data.iter_nodes().count().to_string(),
            up.to_string(),
            "-".to_string(),
            "-".to_string(),
        ),
    };

    let cards = Layout::horizontal([Constraint::Fill(1); 4]).split(chunks[0]);
    render_card(frame, app, cards[0], "Total Nodes", &total);
    render_card(frame, app, cards[1], "Reachable", &reachable);
    render_card(frame, app, cards[2], "Countries", &countries);
    render_card(frame, app, cards[3], "Avg Uptime", &avg_uptime);

    // ---- per-kind counts ----
    let (grpc, jsonrpc, bootstrap, peers) = match data.stats {
        Some(ref stats) => (
            stats.grpc_nodes.to_string(),
            stats.jsonrpc_nodes.to_string(),
            stats.bootstrap_nodes.to_string(),
            data.peers.len().to_string(),
        ),
        None => (
            data.grpc.len().to_string(),
            data.jsonrpc.len().to_string(),
            data.bootstrap.len().to_string(),
            data.peers.len().to_string(),
        ),
    };

    let kinds = Layout::horizontal([Constraint::Fill(1); 4]).split(chunks[1]);
    render_card(frame, app, kinds[0], "gRPC", &grpc);
    render_card(frame, app, kinds[1], "JSON-RPC", &jsonrpc);
    render_card(frame, app, kinds[2], "Bootstrap", &bootstrap);
    render_card(frame, app, kinds[3], "Peers", &peers);

    // ---- country distribution ----
    render_countries(frame, app, chunks[2]);
}

/// One bordered stat card with a title and a bold value.
fn render_card(frame: &mut Frame, app: &App, area: Rect, title: &str, value: &str) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let value_line = Line::from(Span::styled(
        format!(" {value}"),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(value_line).block(block), area);
}

/// Horizontal bar per country, longest bar for the largest count.
fn render_countries(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Country Distribution ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let countries = app
        .data
        .as_ref()
        .and_then(|d| d.stats.as_ref())
        .map(|s| s.countries_by_count())
        .unwrap_or_default();

    if countries.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No country data reported",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let max_count = countries.first().map(|c| c.count).unwrap_or(1).max(1);
    let visible = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = countries
        .iter()
        .take(visible)
        .map(|country| {
            let bar_len =
                ((country.count as f64 / max_count as f64) * BAR_WIDTH as f64).round() as usize;
            let bar: String = "█".repeat(bar_len.max(1));
            Line::from(vec![
                Span::raw(format!(
                    " {:<2} {:<20}",
                    country.country_code,
                    truncated(&country.country, 20)
                )),
                Span::styled(bar, Style::default().fg(app.theme.highlight)),
                Span::styled(
                    format!(" {}", country.count),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn truncated(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
