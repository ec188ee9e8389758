use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use grid_snake::config::{load_settings, settings_path, Settings};
use grid_snake::error::AppError;
use grid_snake::renderer;
use grid_snake::session::{Control, Session};
use grid_snake::terminal_runtime::TerminalSession;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid rows, overriding the settings file.
    #[arg(long)]
    rows: Option<u16>,

    /// Grid columns, overriding the settings file.
    #[arg(long)]
    columns: Option<u16>,

    /// Milliseconds between ticks, overriding the settings file.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for reproducible snake and food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to load instead of the per-user default.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Minimum level written to the log file.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let settings = resolve_settings(&cli)?;
    log::info!(
        "starting: {}x{} grid, {} ms ticks, seed {:?}",
        settings.rows,
        settings.columns,
        settings.tick_interval_ms,
        cli.seed
    );

    let mut terminal = TerminalSession::enter()?;
    let result = run(&mut terminal, settings, cli.seed);
    drop(terminal);

    if let Err(error) = &result {
        log::error!("exiting with error: {error}");
    }
    result
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("grid-snake.log"));
    let file = File::create(path)?;

    WriteLogger::init(cli.log_level.into(), Config::default(), file)?;
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings, AppError> {
    let path = cli.config.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path)?;

    if let Some(rows) = cli.rows {
        settings.rows = rows;
    }
    if let Some(columns) = cli.columns {
        settings.columns = columns;
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_interval_ms = tick_ms;
    }

    Ok(settings.validate()?)
}

fn run(terminal: &mut TerminalSession, settings: Settings, seed: Option<u64>) -> Result<(), AppError> {
    let tick_interval = settings.tick_interval();
    let mut session = Session::new(settings.grid_size(), seed)?;
    let mut last_tick = Instant::now();

    loop {
        terminal.terminal_mut().draw(|frame| {
            renderer::render(frame, session.view(), session.engine(), session.is_paused())
        })?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if let Some(input) = terminal.poll_input(timeout)? {
            match session.handle_input(input)? {
                Control::Quit => break,
                Control::Restarted => last_tick = Instant::now(),
                Control::Continue => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            session.advance();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
