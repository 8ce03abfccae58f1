use crate::tui::components::dialogs::{DEFAULT_CONFIRM_TEXT, DEFAULT_OKAY_TEXT, DEFAULT_REJECT_TEXT};
use crate::tui::themes;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    #[error("Button label '{0}' must not be empty")]
    EmptyLabel(&'static str),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Default labels for the alert, confirm and prompt buttons
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabels {
    pub okay: String,
    pub yes: String,
    pub no: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            okay: DEFAULT_OKAY_TEXT.to_string(),
            yes: DEFAULT_CONFIRM_TEXT.to_string(),
            no: DEFAULT_REJECT_TEXT.to_string(),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Theme preset name
    pub theme: String,

    /// Labels used when a dialog does not name its buttons
    pub button_labels: ButtonLabels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: themes::DEFAULT_THEME.to_string(),
            button_labels: ButtonLabels::default(),
        }
    }
}

/// Partial configuration as read from a file; absent keys keep the defaults
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub theme: Option<String>,
    pub button_labels: ButtonLabelsFile,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonLabelsFile {
    pub okay: Option<String>,
    pub yes: Option<String>,
    pub no: Option<String>,
}

impl Config {
    /// Initialize configuration from files and the environment
    pub async fn init() -> Result<Self, ConfigError> {
        debug!("Initializing configuration");

        let mut config = Self::default();

        if let Some(file_config) = Self::load_from_file().await? {
            config.merge_with(file_config);
        }

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Files searched in order; the first one that exists is used
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("./.termdialog.json"),
            PathBuf::from("./termdialog.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("termdialog").join("termdialog.json"));
        }

        paths
    }

    /// Load the first configuration file found, if any
    pub async fn load_from_file() -> Result<Option<ConfigFile>, ConfigError> {
        for path in Self::candidate_paths() {
            if path.exists() {
                return Self::load_from_path(&path).await.map(Some);
            }
        }
        Ok(None)
    }

    /// Load a configuration file from an explicit path
    pub async fn load_from_path(path: &Path) -> Result<ConfigFile, ConfigError> {
        debug!("Loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `TERMDIALOG_*` variables through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(theme) = lookup("TERMDIALOG_THEME") {
            self.theme = theme;
        }
        if let Some(okay) = lookup("TERMDIALOG_OKAY_LABEL") {
            self.button_labels.okay = okay;
        }
        if let Some(yes) = lookup("TERMDIALOG_YES_LABEL") {
            self.button_labels.yes = yes;
        }
        if let Some(no) = lookup("TERMDIALOG_NO_LABEL") {
            self.button_labels.no = no;
        }
    }

    /// Merge a file configuration into this one
    pub fn merge_with(&mut self, other: ConfigFile) {
        if let Some(theme) = other.theme {
            self.theme = theme;
        }
        if let Some(okay) = other.button_labels.okay {
            self.button_labels.okay = okay;
        }
        if let Some(yes) = other.button_labels.yes {
            self.button_labels.yes = yes;
        }
        if let Some(no) = other.button_labels.no {
            self.button_labels.no = no;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if themes::by_name(&self.theme).is_none() {
            return Err(ConfigError::UnknownTheme {
                name: self.theme.clone(),
                available: themes::names().join(", "),
            });
        }

        let labels = [
            ("okay", &self.button_labels.okay),
            ("yes", &self.button_labels.yes),
            ("no", &self.button_labels.no),
        ];
        for (name, label) in labels {
            if label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel(name));
            }
        }

        Ok(())
    }
}
