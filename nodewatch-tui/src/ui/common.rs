//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};

/// Render the header bar with network health overview.
///
/// Displays: status indicator, node counts by reachability, peer count.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let line = Line::from(vec![
            Span::styled(
                " NODEWATCH ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("| Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let (up, down, unknown) = data.reachability_counts();
    let total = up + down + unknown;

    // Overall status indicator: any down node turns the dot red
    let (status_icon, status_color) = if down > 0 {
        ("●", app.theme.failed)
    } else if unknown > 0 {
        ("●", app.theme.unknown)
    } else {
        ("●", app.theme.healthy)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", status_icon), Style::default().fg(status_color)),
        Span::styled("NODEWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(format!("{up}"), Style::default().fg(app.theme.healthy)),
        Span::raw(" up "),
        if down > 0 {
            Span::styled(
                format!("{down}"),
                Style::default().fg(app.theme.failed).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" down "),
        if unknown > 0 {
            Span::styled(format!("{unknown}"), Style::default().fg(app.theme.unknown))
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" unknown │ "),
        Span::styled(format!("{total}"), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" monitored │ "),
        Span::raw(format!("{} peers", data.peers.len())),
    ];

    if let Some(ref stats) = data.stats {
        spans.push(Span::raw(format!(
            " │ {:.1}% avg uptime",
            stats.avg_uptime
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![
        Line::from(" 1:Overview "),
        Line::from(" 2:gRPC "),
        Line::from(" 3:JSON-RPC "),
        Line::from(" 4:Bootstrap "),
        Line::from(" 5:Peers "),
    ];

    let selected = match app.current_view {
        View::Overview => 0,
        View::Grpc => 1,
        View::JsonRpc => 2,
        View::Bootstrap => 3,
        View::Peers => 4,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: data source, time since last update, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Temporary status messages take precedence
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref data) = app.data {
        let elapsed = data.last_updated.elapsed();

        let controls = if app.filter_active {
            "Type to search | Enter:apply Esc:cancel"
        } else if app.current_view.is_node_view() {
            "/:search s:sort S:reverse Enter:detail Tab:switch ?:help q:quit"
        } else {
            "/:search Tab:switch r:reload ?:help q:quit"
        };

        let source_error = app
            .load_error
            .as_deref()
            .map(|e| format!(" | source error: {e}"))
            .unwrap_or_default();

        format!(
            " {} | Updated {:.0}s ago{} | {}",
            app.source_description(),
            elapsed.as_secs_f64(),
            source_error,
            controls,
        )
    } else if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit r:retry", err)
    } else {
        format!(" {} | Loading... | q:quit", app.source_description())
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch views"),
        Line::from("  1-5         Jump to a view"),
        Line::from("  ↑/↓ j/k     Navigate list"),
        Line::from("  PgUp/PgDn   Jump 10 items"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  Enter       Node detail"),
        Line::from("  Esc         Go back"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Node views",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  /         Start filter/search"),
        Line::from("  c         Clear filter"),
        Line::from("  s         Cycle sort column"),
        Line::from("  S         Toggle sort direction"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Reload data"),
        Line::from("  e         Export summary JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 44u16.min(area.width.saturating_sub(4));
    let help_height = 26u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
