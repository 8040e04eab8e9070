/// CLI argument parsing and command handling.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::color;
use crate::config::Settings;
use crate::db::KvStore;
use crate::history::PickHistory;
use crate::palette::PaletteManager;
use crate::sampler::{self, ColorSampler, Headless, SampleError};

#[derive(Parser)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - A terminal-based color palette generator and picker"
)]
pub struct Cli {
    /// Path of the SQLite database holding picked colors.
    #[arg(long, env = "PALETTR_DB", global = true)]
    pub db: Option<String>,
    /// Keep picked colors in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,
    /// Screen color picker command, e.g. "xcolor" or "hyprpicker".
    #[arg(long, env = "PALETTR_SAMPLER", global = true)]
    pub sampler: Option<String>,
    /// Delay before sampling, in milliseconds.
    #[arg(long, env = "PALETTR_SETTLE_MS", global = true)]
    pub settle_ms: Option<u64>,
    #[arg(long, env = "PALETTR_LOG", global = true)]
    pub log_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a freshly generated palette.
    Generate,
    /// Pick one color from the screen and record it.
    Pick,
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    List,
    Clear,
}

/// Execute a CLI command (generate, pick, or history).
pub fn run(
    command: Command,
    store: Box<dyn KvStore>,
    sampler: &mut dyn ColorSampler,
    settings: &Settings,
) -> Result<()> {
    match command {
        Command::Generate => handle_generate(),
        Command::Pick => handle_pick(PickHistory::load(store), sampler, settings)?,
        Command::History {
            command: HistoryCommand::List,
        } => handle_history_list(&PickHistory::load(store)),
        Command::History {
            command: HistoryCommand::Clear,
        } => PickHistory::load(store).clear_all()?,
    }
    Ok(())
}

fn handle_generate() {
    let palette = PaletteManager::new();
    let codes = palette
        .colors()
        .iter()
        .map(|color| color.to_hex())
        .collect::<Vec<_>>();
    println!("{}", codes.join("  "));
}

fn handle_pick(
    mut history: PickHistory<Box<dyn KvStore>>,
    sampler: &mut dyn ColorSampler,
    settings: &Settings,
) -> Result<()> {
    let sampled = sampler::pick_color(&mut Headless, sampler, settings.settle)
        .and_then(|raw| color::normalize_hex(&raw).ok_or(SampleError::InvalidOutput(raw)));
    match sampled {
        Ok(hex) => {
            if history.record_pick(&hex)? {
                println!("{hex}");
            } else {
                println!("{hex} (already picked)");
            }
        }
        Err(err) => println!("Failed to pick the color: {err}"),
    }
    Ok(())
}

fn handle_history_list<S>(history: &PickHistory<S>) {
    if history.is_empty() {
        println!("No picked colors.");
        return;
    }
    for entry in history.render() {
        println!("{}", entry.hex);
    }
}
