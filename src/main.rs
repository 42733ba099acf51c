mod app;
mod cli;
mod config;
mod demo;
mod input;
mod layout;
mod model;
mod scroll;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::CliArgs;
use config::ContentSource;
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::fs::OpenOptions;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args.log_filter, args.log_file.as_deref())?;

    let content = ContentSource::load(args.config.as_deref())?;
    match &content.source {
        Some(source) => info!("loaded content from {source}"),
        None => info!("no content file found, showing demo content"),
    }

    let mut app = App::new();
    content.apply(&mut app);

    run(&mut app).await
}

fn init_tracing(level_filter: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_new(level_filter)
        .or_else(|_| EnvFilter::try_new("info"))
        .context("failed to initialize tracing filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact();

    // stdout belongs to the TUI; logs go to a file or nowhere.
    let _ = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::sink).try_init(),
    };

    Ok(())
}

async fn run(app: &mut App) -> Result<()> {
    let mut terminal = init_terminal()?;
    let run_result = run_loop(&mut terminal, app).await;
    let restore_result = restore_terminal(&mut terminal);

    match (run_result, restore_result) {
        (Err(run_error), Err(restore_error)) => Err(anyhow::anyhow!(
            "{run_error:#}\nterminal restore error: {restore_error:#}"
        )),
        (Err(error), _) => Err(error),
        (_, Err(error)) => Err(error),
        (Ok(()), Ok(())) => Ok(()),
    }
}

fn init_terminal() -> Result<TuiTerminal> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal backend")?;
    terminal.clear().context("failed to clear terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut TuiTerminal) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

/// One event is applied and drawn before the next one is read.
async fn run_loop(terminal: &mut TuiTerminal, app: &mut App) -> Result<()> {
    let size = terminal.size().context("failed to query terminal size")?;
    app.resize(size.width, size.height);

    let mut reader = EventStream::new();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .context("failed to render terminal frame")?;

        if !app.running() {
            break;
        }

        match reader.next().await {
            Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                match input::map_key(key) {
                    Some(action) => {
                        debug!("action={action:?}");
                        app.apply_action(action);
                    }
                    None => app.discard_input(),
                }
            }
            Some(Ok(Event::Resize(width, height))) => app.resize(width, height),
            Some(Ok(_)) => {}
            Some(Err(error)) => {
                warn!("terminal event error: {error}");
            }
            None => {
                debug!("terminal event stream closed");
                break;
            }
        }
    }

    Ok(())
}
