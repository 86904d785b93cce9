//! Detail overlay rendering.
//!
//! Displays a modal overlay for the selected node: identicon, contact and
//! endpoint metadata, and the dated day-by-day history behind its strip.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use nodewatch_types::{HealthState, GRID_SIZE};

use crate::app::App;
use crate::data::NodeDisplay;
use crate::ui::Theme;

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 56;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 18;

/// Render the node detail as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }

    let Some(node) = app.selected_node() else {
        return;
    };

    let overlay_width = (area.width * 9 / 10).clamp(MIN_OVERLAY_WIDTH, 100);
    let overlay_height = (area.height * 9 / 10).clamp(MIN_OVERLAY_HEIGHT, 44);

    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    frame.render_widget(Clear, overlay_area);

    let chunks = Layout::vertical([
        Constraint::Length(9), // identicon + metadata
        Constraint::Length(4), // status strip with date range
        Constraint::Min(5),    // observed days table
        Constraint::Length(1), // footer
    ])
    .split(overlay_area);

    render_summary(frame, app, node, chunks[0]);
    render_strip(frame, app, node, chunks[1]);
    render_observed_days(frame, app, node, chunks[2]);

    let footer = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc to close ",
        Style::default().add_modifier(Modifier::DIM),
    )]));
    frame.render_widget(footer, chunks[3]);
}

/// Identicon block grid beside the node's metadata.
fn render_summary(frame: &mut Frame, app: &App, node: &NodeDisplay, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", node.name))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns =
        Layout::horizontal([Constraint::Length(GRID_SIZE as u16 * 2 + 2), Constraint::Fill(1)])
            .split(inner);

    frame.render_widget(identicon_paragraph(node), columns[0]);

    let dash_if_empty = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            s.to_string()
        }
    };

    let state_style = app.theme.reachability_style(node.reachability);
    let metadata = vec![
        Line::from(vec![
            Span::raw("Address:  "),
            Span::styled(node.address.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(format!("Network:  {}", dash_if_empty(&node.network))),
        Line::from(format!("Email:    {}", dash_if_empty(&node.email))),
        Line::from(format!("Website:  {}", dash_if_empty(&node.website))),
        Line::from(vec![
            Span::raw("Score:    "),
            Span::styled(
                format!("{:.2}%", node.overall_score),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("    State: "),
            Span::styled(node.reachability.symbol(), state_style.add_modifier(Modifier::BOLD)),
        ]),
    ];
    frame.render_widget(Paragraph::new(metadata), columns[1]);
}

/// The node's identicon as a grid of double-width cells.
fn identicon_paragraph(node: &NodeDisplay) -> Paragraph<'static> {
    let color = Theme::identicon_color(node.identicon.color());
    let lines: Vec<Line> = node
        .identicon
        .rows()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&filled| {
                    if filled {
                        Span::styled("██", Style::default().fg(color))
                    } else {
                        Span::raw("  ")
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    Paragraph::new(lines)
}

/// The full window strip with its date range.
fn render_strip(frame: &mut Frame, app: &App, node: &NodeDisplay, area: Rect) {
    let block = Block::default()
        .title(format!(" Last {} days ", node.window.len()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let strip: Vec<Span> = node
        .window
        .iter()
        .map(|day| {
            Span::styled("▇", Style::default().fg(app.theme.day_color(day.health())))
        })
        .collect();

    let range = match (node.window.first(), node.window.last()) {
        (Some(first), Some(last)) => format!("{} … {}", first.date, last.date),
        _ => String::new(),
    };

    let lines = vec![
        Line::from(strip),
        Line::from(Span::styled(range, Style::default().add_modifier(Modifier::DIM))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Dated rows for the days that actually carry an observation.
fn render_observed_days(frame: &mut Frame, app: &App, node: &NodeDisplay, area: Rect) {
    let observed: Vec<_> = node.observed_days().collect();

    let block = Block::default()
        .title(format!(" Observations ({}) ", observed.len()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if observed.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No observations in this window",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Code"),
        Cell::from("Health"),
    ])
    .height(1)
    .style(app.theme.header);

    // Newest first: the most recent day is what the operator came to see.
    let rows: Vec<Row> = observed
        .iter()
        .rev()
        .map(|day| {
            let health = day.health();
            let label = match health {
                HealthState::Healthy => "healthy",
                HealthState::Failed => "failed",
                HealthState::Unknown => "unknown",
                HealthState::NoData => "no data",
            };
            Row::new(vec![
                Cell::from(day.date.to_string()),
                Cell::from(day.code.to_string()),
                Cell::from(label).style(Style::default().fg(app.theme.day_color(health))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(6),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
