//! Peers view rendering.
//!
//! Tabular geographic listing of discovered peers: name, location,
//! coordinates and online score.

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use nodewatch_types::PeerNode;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(ref data) = app.data else {
        return;
    };

    let total = data.peers.len();
    let peers: Vec<&PeerNode> =
        data.peers.iter().filter(|p| app.matches_peer_filter(p)).collect();

    let header = Row::new(vec![
        Cell::from("Peer"),
        Cell::from("Country"),
        Cell::from("City"),
        Cell::from("Latitude"),
        Cell::from("Longitude"),
        Cell::from("Online"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = peers
        .iter()
        .map(|peer| {
            let online = peer.online_score;
            let online_style = if online >= 0.9 {
                Style::default().fg(app.theme.healthy)
            } else if online >= 0.5 {
                Style::default().fg(app.theme.unknown)
            } else {
                Style::default().fg(app.theme.failed)
            };
            Row::new(vec![
                Cell::from(peer.name.clone()),
                Cell::from(peer.country.clone()),
                Cell::from(peer.city.clone()),
                Cell::from(format!("{:8.3}", peer.coordinates[0])),
                Cell::from(format!("{:8.3}", peer.coordinates[1])),
                Cell::from(format!("{:5.1}%", online * 100.0)).style(online_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
    ];

    let selected = app.selected_index.min(peers.len().saturating_sub(1));

    let filter_info = if app.filter_active {
        format!(" /{}_", app.filter_text)
    } else if !app.filter_text.is_empty() {
        format!(" /{}/ [c:clear]", app.filter_text)
    } else {
        String::new()
    };

    let title = format!(" Peers ({}/{}){} ", peers.len(), total, filter_info);

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected));

    frame.render_stateful_widget(table, area, &mut state);
}
