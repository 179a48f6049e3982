use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Creates the log directory when file logging is enabled and returns its
/// canonical path.
pub fn ensure_logs_dir(cfg: &LoggingConfig) -> Result<Option<PathBuf>> {
    cfg.logs_dir.as_deref().map(ensure_dir).transpose()
}

fn ensure_dir(path: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(path);
    if !dir.exists() {
        fs::create_dir_all(&dir).with_context(|| format!("failed to create directory {}", path))?;
    }
    let probe_file = dir.join(".write-test");
    fs::write(&probe_file, b"ok")
        .with_context(|| format!("log directory {} is not writable", dir.display()))?;
    fs::remove_file(&probe_file)?;
    Ok(dir.canonicalize().unwrap_or(dir))
}
