use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Environment variable that relocates the taskdesk directory
pub const DIR_ENV: &str = "TASKDESK_DIR";

/// Get the taskdesk directory - `$TASKDESK_DIR` if set, otherwise ~/.taskdesk
pub fn get_taskdesk_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".taskdesk"))
}

/// Ensure the taskdesk directory exists
pub fn ensure_taskdesk_dir() -> Result<PathBuf> {
    let dir = get_taskdesk_dir()?;
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Path to config.json
pub fn config_file() -> Result<PathBuf> {
    Ok(get_taskdesk_dir()?.join("config.json"))
}

/// Directory for rolling log files (created on demand)
pub fn logs_dir() -> Result<PathBuf> {
    let dir = ensure_taskdesk_dir()?.join("logs");
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Write through a temp file in the same directory, then rename over the target
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;
    ensure_dir(dir)?;

    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
