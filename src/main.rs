mod app;
mod cli;
mod clipboard;
mod color;
mod config;
mod db;
mod event;
mod history;
mod palette;
mod sampler;
mod tui;
mod ui;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let settings = config::Settings::from_cli(&cli_opts);
    init_tracing(&settings.log_path);
    info!(version = env!("CARGO_PKG_VERSION"), "starting palettr");

    let store = settings.open_store()?;
    let mut sampler = settings.command_sampler()?;
    info!(sampler = sampler.program(), ephemeral = settings.ephemeral, "settings resolved");
    if let Some(command) = cli_opts.command {
        return cli::run(command, store, &mut sampler, &settings);
    }

    let mut app = app::App::new(
        store,
        Box::new(sampler),
        Box::new(clipboard::SystemClipboard),
        settings.settle,
    );
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}

/// Logs go to a file; the TUI owns stdout.
fn init_tracing(log_path: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let directory = log_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "palettr.log".to_string());

    if let Err(err) = config::ensure_parent_dir(log_path) {
        eprintln!("palettr: logging disabled: {err:#}");
        return;
    }
    match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
    {
        Ok(appender) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(appender)
                .try_init();
        }
        Err(err) => eprintln!("palettr: logging disabled: {err}"),
    }
}
