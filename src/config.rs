/// Runtime settings resolved from command-line flags and environment.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::db::{self, KvStore, MemoryStore, SqliteStore};
use crate::sampler::{CommandSampler, DEFAULT_SAMPLER, DEFAULT_SETTLE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub db_path: String,
    pub ephemeral: bool,
    pub sampler: String,
    pub settle: Duration,
    pub log_path: PathBuf,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            db_path: cli.db.clone().unwrap_or_else(db::default_db_path),
            ephemeral: cli.ephemeral,
            sampler: cli
                .sampler
                .clone()
                .unwrap_or_else(|| DEFAULT_SAMPLER.to_string()),
            settle: cli
                .settle_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_SETTLE),
            log_path: cli.log_file.clone().unwrap_or_else(default_log_path),
        }
    }

    /// Opens the configured history store.
    pub fn open_store(&self) -> Result<Box<dyn KvStore>> {
        if self.ephemeral {
            return Ok(Box::new(MemoryStore::new()));
        }
        ensure_parent_dir(Path::new(&self.db_path))?;
        let store = SqliteStore::open(&self.db_path)
            .with_context(|| format!("failed to open database at {}", self.db_path))?;
        Ok(Box::new(store))
    }

    pub fn command_sampler(&self) -> Result<CommandSampler> {
        CommandSampler::from_command_line(&self.sampler).context("sampler command is empty")
    }
}

/// The `palettr` directory inside the user's local data directory. Not created here.
pub fn data_dir() -> Option<PathBuf> {
    Some(dirs::data_local_dir()?.join("palettr"))
}

/// Creates the directory holding `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display())),
        _ => Ok(()),
    }
}

pub fn default_log_path() -> PathBuf {
    data_dir()
        .map(|dir| dir.join("palettr.log"))
        .unwrap_or_else(|| PathBuf::from("palettr.log"))
}
