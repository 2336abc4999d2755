use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use log::{LevelFilter, info};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "opacity-fix";

pub const DEFAULT_LOG_LEVEL: &str = "error";

fn log_dir() -> PathBuf {
    let strategy = choose_base_strategy().expect("Error when finding cache directory");
    strategy.cache_dir().join(APP_NAME)
}

pub fn default_log_file() -> PathBuf {
    log_dir().join(format!("{APP_NAME}.log"))
}

fn make_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub fn setup_logging(level: LevelFilter) -> anyhow::Result<()> {
    let log_path = default_log_file();
    make_parent_dir(&log_path)?;

    let _ = simple_log::file(log_path.to_str().unwrap(), level.as_str(), 100, 10);

    info!("Logging initialized at {}", log_path.display());
    Ok(())
}
