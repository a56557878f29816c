use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report the keys missing from the file; they are served from defaults.
    pub fn check(path: &Path) -> AppResult<Vec<String>> {
        let missing = Config::missing_fields(path)?;
        if missing.is_empty() {
            success(format!("Configuration file is complete: {}", path.display()));
        } else {
            for field in &missing {
                warning(format!("Missing field '{field}' (default value in use)"));
            }
        }
        Ok(missing)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&ed).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited successfully using '{ed}'"));
                Ok(())
            }
            _ if ed != default_editor => {
                warning(format!(
                    "Editor '{ed}' not available, falling back to '{default_editor}'"
                ));
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    success(format!(
                        "Configuration file edited successfully using fallback '{default_editor}'"
                    ));
                    Ok(())
                } else {
                    Err(AppError::Config(format!(
                        "failed to edit configuration file using '{default_editor}'"
                    )))
                }
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using '{ed}'"
            ))),
        }
    }
}
