mod app;
mod domain;
mod input;
mod insight;
mod notifications;
mod persistence;
mod report;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    config_file, ensure_data_dir, get_data_dir, init_local_dir, load_config, logs_file, save_config,
    trace_log_file, AppConfig, SessionLogStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polyfocus")]
#[command(about = "A terminal Pomodoro timer with session tagging and time-log insights", long_about = None)]
struct Cli {
    /// Model used for insight requests (overrides config.json)
    #[arg(short, long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .polyfocus directory in the current directory
    Init,
    /// Write a Markdown report of the session statistics
    Report {
        /// Output file path. Defaults to <data dir>/report-YYYY-MM-DD.md
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Request an AI analysis of the session history and print it
    Analyze,
}

/// Route tracing output to <data dir>/polyfocus.log; the terminal belongs to the TUI
fn init_logging() -> Result<()> {
    let path = trace_log_file()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "polyfocus=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn load_app_config(model: Option<String>) -> Result<AppConfig> {
    Ok(load_config(config_file()?).with_model_override(model))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            save_config(data_dir.join("config.json"), &AppConfig::default())?;
            println!("Initialized PolyFocus directory: {}", data_dir.display());
            println!();
            println!("PolyFocus will now keep its session history here.");
            println!("Run 'polyfocus' to start the timer.");
            Ok(())
        }
        Some(Commands::Report { output }) => {
            if let Err(e) = init_logging() {
                eprintln!("Warning: logging disabled: {}", e);
            }
            let store = SessionLogStore::load(logs_file()?);
            let output_path = output.map(PathBuf::from);

            println!("Generating report for {} sessions...", store.len());
            let report_path = report::generate_report(store.all(), output_path)?;
            println!("Report generated: {}", report_path.display());
            Ok(())
        }
        Some(Commands::Analyze) => {
            if let Err(e) = init_logging() {
                eprintln!("Warning: logging disabled: {}", e);
            }
            let config = load_app_config(cli.model)?;
            let store = SessionLogStore::load(logs_file()?);
            let runtime = Runtime::new().context("Failed to start async runtime")?;

            println!("Analyzing {} sessions with {}...", store.len(), config.model);
            let text = runtime.block_on(insight::analyze_logs(store.all(), &config));
            println!();
            println!("{}", text);
            Ok(())
        }
        None => run_tui(cli.model),
    }
}

fn run_tui(model: Option<String>) -> Result<()> {
    ensure_data_dir()?;
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // Show which directory we're using
    let data_dir = get_data_dir()?;
    eprintln!("Using PolyFocus directory: {}", data_dir.display());

    let config = load_app_config(model)?;
    let store = SessionLogStore::load(logs_file()?);
    info!(sessions = store.len(), model = %config.model, "Starting PolyFocus");

    // Insight requests run here while the UI loop stays synchronous
    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let mut app = AppState::new(store, config, runtime.handle().clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Pending insight requests are abandoned
    runtime.shutdown_background();

    if let Err(err) = result {
        error!(error = %err, "Event loop failed");
        eprintln!("Error: {}", err);
    }

    info!("PolyFocus closed");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        app.tick(Instant::now());
    }
}
