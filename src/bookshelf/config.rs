use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_FILE: &str = "library.csv";
const DEFAULT_JSON_INDENT: usize = 4;

/// Configuration for bookshelf, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Path of the CSV store. Relative paths resolve against the working directory.
    #[serde(default = "default_store_file")]
    pub store_file: PathBuf,

    /// Indent width for JSON exports
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,
}

fn default_store_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_json_indent() -> usize {
    DEFAULT_JSON_INDENT
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            json_indent: default_json_indent(),
        }
    }
}

impl LibraryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            LibraryError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Overrides the store path, as given on the command line.
    pub fn with_store_file(mut self, store_file: Option<PathBuf>) -> Self {
        if let Some(path) = store_file {
            self.store_file = path;
        }
        self
    }
}
