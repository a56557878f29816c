use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Placeholder values substituted for missing categorical fields.
///
/// The spreadsheet path and the PDF converter historically used different
/// tag placeholders; both are kept and can be changed independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentinels {
    /// Missing project (spreadsheet path).
    #[serde(default = "default_project_sentinel")]
    pub project: String,
    /// Missing tags (spreadsheet path).
    #[serde(default = "default_tag_sentinel")]
    pub tag: String,
    /// `-` / `nan` tags in PDF-extracted rows.
    #[serde(default = "default_pdf_tag_sentinel")]
    pub pdf_tag: String,
}

fn default_project_sentinel() -> String {
    "Unspecified".to_string()
}
fn default_tag_sentinel() -> String {
    "Untagged".to_string()
}
fn default_pdf_tag_sentinel() -> String {
    "Unknown".to_string()
}

impl Default for Sentinels {
    fn default() -> Self {
        Self {
            project: default_project_sentinel(),
            tag: default_tag_sentinel(),
            pdf_tag: default_pdf_tag_sentinel(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory searched for an `.xlsx` export when no file is given.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// How many leading rows are scanned for the header row.
    #[serde(default = "default_header_scan_rows")]
    pub header_scan_rows: usize,
    #[serde(default)]
    pub sentinels: Sentinels,
}

fn default_source_dir() -> String {
    "./files/current".to_string()
}
fn default_header_scan_rows() -> usize {
    30
}

/// Keys expected in a complete configuration file.
pub const CONFIG_FIELDS: [&str; 3] = ["source_dir", "header_scan_rows", "sentinels"];
pub const SENTINEL_FIELDS: [&str; 3] = ["project", "tag", "pdf_tag"];

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            header_scan_rows: default_header_scan_rows(),
            sentinels: Sentinels::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("trackpie")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".trackpie")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("trackpie.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories if needed
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// List the keys missing from the raw YAML at `path` (they fall back to defaults).
    pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
        if !path.exists() {
            return Ok(CONFIG_FIELDS.iter().map(|f| f.to_string()).collect());
        }

        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = if content.trim().is_empty() {
            serde_yaml::Value::Null
        } else {
            serde_yaml::from_str(&content)?
        };

        let mut missing = Vec::new();
        for field in CONFIG_FIELDS {
            if value.get(field).is_none() {
                missing.push(field.to_string());
            }
        }

        if let Some(sentinels) = value.get("sentinels") {
            for field in SENTINEL_FIELDS {
                if sentinels.get(field).is_none() {
                    missing.push(format!("sentinels.{field}"));
                }
            }
        }

        Ok(missing)
    }
}
