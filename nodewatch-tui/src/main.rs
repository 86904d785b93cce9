use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

use nodewatch_client::ApiClient;
use nodewatch_tui::app::{App, View};
use nodewatch_tui::data::{DashboardConfig, DashboardData};
use nodewatch_tui::source::{DataSource, FileSource, RpcSource};
use nodewatch_tui::{events, ui, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    /// Pick from the terminal background luminance.
    Auto,
    Dark,
    Light,
}

#[derive(Parser, Debug)]
#[command(name = "nodewatch")]
#[command(about = "Terminal dashboard for blockchain network node health")]
struct Args {
    /// Monitoring API base URL
    #[arg(
        short,
        long,
        env = "NODEWATCH_API_URL",
        default_value = "http://127.0.0.1:4622"
    )]
    base_url: String,

    /// API version path segment
    #[arg(long, env = "NODEWATCH_API_VERSION", default_value = "v1")]
    api_version: String,

    /// Read snapshots from a JSON file instead of the live API
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Only show gRPC/JSON-RPC nodes on this network ("all" disables the filter)
    #[arg(short, long, default_value = "mainnet")]
    network: String,

    /// Refresh interval in seconds
    #[arg(short, long, default_value = "30")]
    refresh: u64,

    /// Status window length in days
    #[arg(short, long, default_value = "30", value_parser = clap::value_parser!(u16).range(1..))]
    window: u16,

    /// Color theme
    #[arg(short, long, value_enum, default_value_t = ThemeChoice::Auto)]
    theme: ThemeChoice,

    /// Export the processed summary to a JSON file and exit (needs --file)
    #[arg(short, long, requires = "file")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = DashboardConfig {
        window_days: usize::from(args.window),
        network: match args.network.as_str() {
            "all" => None,
            network => Some(network.to_string()),
        },
    };

    // Handle export mode (non-interactive); clap enforces --file here
    if let (Some(export_path), Some(file)) = (&args.export, &args.file) {
        return export_to_file(file, export_path, &config);
    }

    let theme = match args.theme {
        ThemeChoice::Auto => Theme::auto_detect(),
        ThemeChoice::Dark => Theme::dark(),
        ThemeChoice::Light => Theme::light(),
    };

    let refresh = Duration::from_secs(args.refresh.max(1));

    if let Some(ref path) = args.file {
        // File mode: poll the file on the refresh interval
        let source = Box::new(FileSource::new(path));
        run_tui(source, config, theme, refresh)
    } else {
        run_with_rpc(&args, config, theme, refresh)
    }
}

/// Run against the live monitoring API.
///
/// The poller runs on a background tokio runtime; the TUI stays on the main
/// thread and consumes snapshots through a watch channel.
fn run_with_rpc(
    args: &Args,
    config: DashboardConfig,
    theme: Theme,
    refresh: Duration,
) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    let client = ApiClient::builder()
        .base_url(&args.base_url)
        .version(&args.api_version)
        .build();

    let (source, handle) = rt.block_on(async { RpcSource::spawn(client, refresh) });

    // Redraw fast; the poller decides how often the data actually changes
    let result = run_tui(Box::new(source), config, theme, Duration::from_millis(250));

    // Signal shutdown
    handle.abort();

    result
}

/// Run the TUI with the given data source
fn run_tui(
    source: Box<dyn DataSource>,
    config: DashboardConfig,
    theme: Theme,
    refresh_interval: Duration,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and load initial data
    let mut app = App::new(source, config, theme);
    let _ = app.reload_data();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 64;
    const MIN_HEIGHT: u16 = 14;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered =
                    ratatui::layout::Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with network health
            ui::common::render_header(frame, app, chunks[0]);

            // Render tabs
            ui::common::render_tabs(frame, app, chunks[1]);

            // Render current view
            match app.current_view {
                View::Overview => ui::overview::render(frame, app, chunks[2]),
                View::Grpc | View::JsonRpc | View::Bootstrap => {
                    ui::health::render(frame, app, chunks[2])
                }
                View::Peers => ui::peers::render(frame, app, chunks[2]),
            }

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render detail overlay if active
            if app.show_detail_overlay {
                ui::detail::render_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    // Content starts after header (1) + tabs (1) + table header (1)
                    events::handle_mouse_event(app, mouse, 3);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Auto-refresh data periodically
        if last_refresh.elapsed() >= refresh_interval {
            let _ = app.reload_data();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Export the processed summary of a snapshot file to JSON.
fn export_to_file(
    snapshot_path: &std::path::Path,
    export_path: &std::path::Path,
    config: &DashboardConfig,
) -> Result<()> {
    use std::io::Write;

    let content = std::fs::read_to_string(snapshot_path)?;
    let snapshot = serde_json::from_str(&content)?;

    let today = chrono::Utc::now().date_naive();
    let data = DashboardData::from_snapshot(snapshot, today, config)?;

    let json = serde_json::to_string_pretty(&data.summary_value())?;
    let mut file = std::fs::File::create(export_path)?;
    file.write_all(json.as_bytes())?;

    println!("Exported dashboard summary to: {}", export_path.display());
    Ok(())
}
