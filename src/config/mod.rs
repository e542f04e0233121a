use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Roster location: a `.csv` sheet or a SQLite database.
    pub store: String,
    #[serde(default = "default_verify_before_write")]
    pub verify_before_write: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_verify_before_write() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            verify_before_write: default_verify_before_write(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattend")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattend")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattend.conf")
    }

    /// Return the full path of the default SQLite roster
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("rattend.sqlite")
    }

    /// Store path with `~/` expanded.
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Initialize the configuration file and return the resolved store path.
    ///
    /// The store itself is created by the `init` command, which knows the
    /// store kind.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let store_path = match custom_store {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::store_file(),
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
            file.write_all(yaml.as_bytes())
                .map_err(|e| AppError::ConfigSave(e.to_string()))?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(store_path)
    }
}
