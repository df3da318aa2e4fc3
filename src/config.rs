use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub(crate) const DB_ENV: &str = "FINTRACK_DB";
const DB_FILE: &str = "fintrack.db";
const LOG_FILE: &str = "fintrack.log";

/// Where the database and log file live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    pub(crate) log_path: PathBuf,
}

impl Config {
    /// `--db` flag, then `$FINTRACK_DB`, then the platform data directory.
    pub(crate) fn resolve(db_flag: Option<&str>) -> Result<Self> {
        Self::resolve_with(db_flag, std::env::var_os(DB_ENV))
    }

    pub(crate) fn resolve_with(db_flag: Option<&str>, db_env: Option<OsString>) -> Result<Self> {
        let db_path = match (db_flag, db_env.filter(|v| !v.is_empty())) {
            (Some(flag), _) => PathBuf::from(shellexpand(flag)),
            (None, Some(env)) => PathBuf::from(env),
            (None, None) => default_data_dir()?.join(DB_FILE),
        };
        Self::for_db(db_path)
    }

    /// Log file sits next to the database; its directory is created if missing.
    fn for_db(db_path: PathBuf) -> Result<Self> {
        let dir = db_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(Self {
            log_path: dir.join(LOG_FILE),
            db_path,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "fintrack", "FinTrack")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Expand a leading `~/` to `$HOME`.
pub(crate) fn shellexpand(path: &str) -> String {
    match path.strip_prefix("~/") {
        Some(rest) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/{rest}")
        }
        None => path.to_string(),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
