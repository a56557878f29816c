use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::config_path;

/// Handle the `init` command
///
/// Writes the default configuration file (sentinels, source directory,
/// header scan depth). In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = config_path(cli.config.as_deref());
    let cfg = Config::default();

    info("Initializing trackpie…");

    if cli.test {
        info(format!("Test mode: {} not written", path.display()));
        return Ok(());
    }

    if path.exists() {
        info(format!(
            "Configuration file already present: {}",
            path.display()
        ));
        return Ok(());
    }

    cfg.save_to(&path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
