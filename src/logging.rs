//! File logging. The terminal is in raw mode while the app runs, so every
//! log line goes to a file instead of stdout.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".shibadoption";
const LOG_FILE_NAME: &str = "shibadoption.log";

/// Default log location inside the user's home directory.
pub fn default_log_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(log_path_in(base_dirs.home_dir()))
}

fn log_path_in(home: &Path) -> PathBuf {
    home.join(DATA_DIR_NAME).join(LOG_FILE_NAME)
}

/// Install file logging. A failure on an explicitly requested path is
/// returned; the default location is best-effort and never fails startup.
pub fn setup(explicit: Option<&Path>, level: LevelFilter) -> Result<()> {
    match explicit {
        Some(path) => init(path, level),
        None => {
            if let Ok(path) = default_log_path() {
                let _ = init(&path, level);
            }
            Ok(())
        }
    }
}

/// Create the log file (and its parent directory) and install the global
/// logger. `LevelFilter::Off` skips the file entirely.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    if level == LevelFilter::Off {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create log directory")?;
    }
    let log_file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, config, log_file).context("failed to install logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lives_in_a_dot_folder() {
        let path = log_path_in(Path::new("/home/shiba"));
        assert_eq!(path, PathBuf::from("/home/shiba/.shibadoption/shibadoption.log"));
    }

    #[test]
    fn explicit_path_failures_are_reported() {
        let dir = std::env::temp_dir().join("shibadoption-logging-blocked");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("not-a-directory");
        File::create(&blocker).unwrap();

        let err = setup(Some(&blocker.join("app.log")), LevelFilter::Info).unwrap_err();
        assert_eq!(err.to_string(), "failed to create log directory");
    }

    #[test]
    fn off_level_creates_nothing() {
        let path = std::env::temp_dir()
            .join("shibadoption-logging-test")
            .join("never.log");
        init(&path, LevelFilter::Off).unwrap();
        assert!(!path.exists());
    }
}
