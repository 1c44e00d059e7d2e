use crate::core::guard::{REPORT_PROPERTY, REPORT_VALUE};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runtime configuration, stored as YAML in the config directory.
///
/// Every field has a default so older or partial files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default = "default_tracker_sheet")]
    pub tracker_sheet: String,
    #[serde(default = "default_activity_sheet")]
    pub activity_sheet: String,

    /// Zero-based row holding the column headers.
    #[serde(default = "default_header_row")]
    pub tracker_header_row: usize,
    #[serde(default = "default_header_row")]
    pub activity_header_row: usize,

    /// Zero-based row where activity data starts.
    #[serde(default = "default_data_offset")]
    pub activity_data_offset: usize,

    /// Column where appended activity rows start, and how many cells they span.
    #[serde(default = "default_first_column")]
    pub activity_first_column: usize,
    #[serde(default = "default_append_width")]
    pub activity_append_width: usize,

    #[serde(default = "default_report_property")]
    pub report_property: String,
    #[serde(default = "default_report_value")]
    pub report_value: String,

    /// Accepted distance from a whole number for an issue id, in `[0, 0.5)`.
    #[serde(default)]
    pub id_tolerance: f64,

    /// Fail instead of falling back to column 0 when a header is missing.
    #[serde(default)]
    pub strict_headers: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_tracker_sheet() -> String {
    "IT Tracker".to_string()
}
fn default_activity_sheet() -> String {
    "Activity".to_string()
}
fn default_header_row() -> usize {
    3
}
fn default_data_offset() -> usize {
    4
}
fn default_first_column() -> usize {
    1
}
fn default_append_width() -> usize {
    7
}
fn default_report_property() -> String {
    REPORT_PROPERTY.to_string()
}
fn default_report_value() -> String {
    REPORT_VALUE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    /// Defaults pointing at the given workbook store.
    pub fn with_database(path: impl AsRef<Path>) -> Self {
        Self {
            database: path.as_ref().to_string_lossy().to_string(),
            tracker_sheet: default_tracker_sheet(),
            activity_sheet: default_activity_sheet(),
            tracker_header_row: default_header_row(),
            activity_header_row: default_header_row(),
            activity_data_offset: default_data_offset(),
            activity_first_column: default_first_column(),
            activity_append_width: default_append_width(),
            report_property: default_report_property(),
            report_value: default_report_value(),
            id_tolerance: 0.0,
            strict_headers: false,
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("TRACKERPANE_HOME") {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("trackerpane")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".trackerpane")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("trackerpane.conf")
    }

    /// Return the full path of the workbook store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("trackerpane.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Self = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Ok(cfg)
    }

    /// Reject values that would let a fractional id round to a whole one.
    pub fn validate(&self) -> Result<(), String> {
        if !self.id_tolerance.is_finite() || !(0.0..0.5).contains(&self.id_tolerance) {
            return Err(format!(
                "id_tolerance must be at least 0 and below 0.5, got {}",
                self.id_tolerance
            ));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the configuration file unless running in test mode.
    pub fn save(&self, is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        fs::create_dir_all(Self::config_dir())?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(self.to_yaml()?.as_bytes())?;
        Ok(())
    }
}
