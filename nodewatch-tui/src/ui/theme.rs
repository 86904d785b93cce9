//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use nodewatch_types::{HealthState, Hsl};

use crate::data::Reachability;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic selection based on terminal
/// background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for healthy days and reachable nodes.
    pub healthy: Color,
    /// Color for failed days and unreachable nodes.
    pub failed: Color,
    /// Color for unrecognized status codes.
    pub unknown: Color,
    /// Color for days without an observation.
    pub no_data: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows in tables.
    pub header: Style,
    /// Style for selected/highlighted rows.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            healthy: Color::Green,
            failed: Color::Red,
            unknown: Color::Gray,
            no_data: Color::DarkGray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            healthy: Color::Green,
            failed: Color::Red,
            unknown: Color::DarkGray,
            no_data: Color::Gray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color for one day cell in a status strip.
    pub fn day_color(&self, state: HealthState) -> Color {
        match state {
            HealthState::Healthy => self.healthy,
            HealthState::Failed => self.failed,
            HealthState::Unknown => self.unknown,
            HealthState::NoData => self.no_data,
        }
    }

    /// Style for a node's reachability verdict.
    pub fn reachability_style(&self, reachability: Reachability) -> Style {
        match reachability {
            Reachability::Up => Style::default().fg(self.healthy),
            Reachability::Down => {
                Style::default().fg(self.failed).add_modifier(Modifier::BOLD)
            }
            Reachability::Unknown => Style::default().fg(self.unknown),
        }
    }

    /// Terminal color for an identicon hue.
    pub fn identicon_color(hsl: Hsl) -> Color {
        let (r, g, b) = hsl.to_rgb();
        Color::Rgb(r, g, b)
    }
}
