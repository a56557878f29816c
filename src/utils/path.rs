//! Path utilities: expand ~, resolve the config file location.

use crate::config::Config;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `--config` when given, the platform default otherwise.
pub fn config_path(cli_override: Option<&str>) -> PathBuf {
    cli_override
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file)
}
