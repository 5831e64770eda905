use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_rows")]
    pub default_rows: usize,
    #[serde(default = "default_sheet_title")]
    pub sheet_title: String,
}

fn default_output_dir() -> String {
    dirs::download_dir()
        .unwrap_or_else(Config::config_dir)
        .to_string_lossy()
        .to_string()
}
fn default_rows() -> usize {
    crate::core::table::DEFAULT_ROWS
}
fn default_sheet_title() -> String {
    "Salary Sheet".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_rows: default_rows(),
            sheet_title: default_sheet_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("salarysheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".salarysheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("salarysheet.conf")
    }

    /// Export directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Create the config directory and write a default configuration file.
    /// In test mode nothing is written.
    pub fn init_all(is_test: bool) -> AppResult<Self> {
        let config = Self::default();

        if is_test {
            return Ok(config);
        }

        fs::create_dir_all(Self::config_dir())?;

        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        Ok(config)
    }
}
