mod app;
mod cli;
mod command;
mod config;
mod consts;
mod engine;
mod game;
mod highscore;
mod sound;
mod util;
mod warning;
use crate::app::App;
use crate::cli::{Invocation, HELP, USAGE};
use crate::config::Config;
use crate::warning::Warning;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use log::LevelFilter;
use simplelog::WriteLogger;
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Invocation::from_parser(lexopt::Parser::from_env()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n{USAGE}\nRun `gridsnake --help` for more information.");
            return ExitCode::from(2);
        }
    };
    let (mut config, config_error) = match load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    args.apply(&mut config);
    if let Err(e) = init_logging(&config) {
        eprintln!("gridsnake: warning: {e:#}");
    }
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    log::debug!("Configuration: {config:?}");
    let settings = config.settings();
    let app = match config_error {
        Some(e) => {
            log::warn!("{e:#}");
            App::with_warning(Warning::new(&e), settings)
        }
        None => App::new(settings),
    };

    let terminal = ratatui::init();
    if let Err(e) = execute!(io::stdout(), EnableFocusChange) {
        log::warn!("Failed to enable focus reporting: {e}");
    }
    let r = app.run(terminal);
    if let Err(e) = execute!(io::stdout(), DisableFocusChange) {
        log::warn!("Failed to disable focus reporting: {e}");
    }
    ratatui::restore();
    if let Err(ref e) = r {
        log::error!("Terminal I/O failed: {e}");
    }
    log::info!("Exiting");
    io_exit(r)
}

/// Load the configuration file at `path`, or the default configuration file
/// if no path was given.  Only the default file is allowed to be missing.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(p) => Config::load(p, false)
            .with_context(|| format!("Failed to load configuration from {}", p.display())),
        None => {
            let p = Config::default_path()?;
            Config::load(&p, true)
                .with_context(|| format!("Failed to load configuration from {}", p.display()))
        }
    }
}

/// Send log messages to a file, since the terminal belongs to the game
fn init_logging(config: &Config) -> anyhow::Result<()> {
    if config.log.level == LevelFilter::Off {
        return Ok(());
    }
    let path = config
        .log_file()
        .context("Could not determine where to write the log file")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("Failed to create log directory")?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .context("Failed to open log file")?;
    WriteLogger::init(config.log.level, simplelog::Config::default(), file)
        .context("Failed to initialize logger")?;
    Ok(())
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
