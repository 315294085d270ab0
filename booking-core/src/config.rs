//! Global booking configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, BookingResult};
use crate::storage::FileStorage;
use crate::view::ViewMode;

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("booking"))
        .unwrap_or_else(|| PathBuf::from("~/.booking"))
}

/// Configuration at ~/.config/booking/config.toml, overridable with
/// `BOOKING_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingConfig {
    /// Where the appointment book lives
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Locale used when none has been chosen with `booking lang`
    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub default_view: ViewMode,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            data_dir: default_data_dir(),
            locale: None,
            default_view: ViewMode::default(),
        }
    }
}

impl BookingConfig {
    pub fn config_path() -> BookingResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BookingError::Config("Could not determine config directory".into()))?
            .join("booking");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/booking/config.toml, creating a commented-out default
    /// on first run.
    pub fn load() -> BookingResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> BookingResult<Self> {
        Self::load_with_env(path, Environment::with_prefix("BOOKING"))
    }

    fn load_with_env(path: &Path, env: Environment) -> BookingResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| BookingError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BookingError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> BookingResult<()> {
        let contents = format!(
            "\
# booking configuration

# Where your appointments are stored:
# data_dir = \"{}\"

# Language (en, el):
# locale = \"en\"

# View used by `booking list` (list, calendar):
# default_view = \"list\"
",
            default_data_dir().display()
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BookingError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BookingError::Config(format!("Could not write config file: {e}")))?;

        tracing::info!(path = %path.display(), "created default config");
        Ok(())
    }
}
