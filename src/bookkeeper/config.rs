use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "data.json";
const DEFAULT_SEED_CONTACTS: usize = 10;
const DEFAULT_SEED_NOTES: usize = 20;

/// Configuration for bookkeeper, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    /// File name of the persisted book inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Number of starter contacts generated when no data file exists
    #[serde(default = "default_seed_contacts")]
    pub seed_contacts: usize,

    /// Number of starter notes generated when no data file exists
    #[serde(default = "default_seed_notes")]
    pub seed_notes: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_seed_contacts() -> usize {
    DEFAULT_SEED_CONTACTS
}

fn default_seed_notes() -> usize {
    DEFAULT_SEED_NOTES
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_contacts: DEFAULT_SEED_CONTACTS,
            seed_notes: DEFAULT_SEED_NOTES,
        }
    }
}

impl AssistantConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AssistantError::Io)?;
        let config: AssistantConfig =
            serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AssistantError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AssistantError::Serialization)?;
        fs::write(config_path, content).map_err(AssistantError::Io)?;
        Ok(())
    }
}
