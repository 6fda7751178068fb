//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use udtriples_domain::Split;
use udtriples_extractor::ExtractorConfig;
use udtriples_io::DatasetMapping;

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "udtriples.toml";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Triple extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Where triple files go
    #[serde(default)]
    pub output: OutputSettings,

    /// Split name to corpus path
    #[serde(default = "default_datasets")]
    pub datasets: BTreeMap<String, PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Output location settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Output directory
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name prefix, usually a language code
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `udtriples.toml` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate extractor settings and split names.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)?;
        self.dataset_mapping()?;
        Ok(())
    }

    /// Dataset table keyed by [`Split`].
    ///
    /// Split names are case-insensitive; two keys naming the same split
    /// are rejected.
    pub fn dataset_mapping(&self) -> Result<DatasetMapping> {
        let mut mapping = DatasetMapping::new();
        for (name, path) in &self.datasets {
            let split = name.parse::<Split>().map_err(CliError::Config)?;
            if mapping.insert(split, path.clone()).is_some() {
                return Err(CliError::Config(format!(
                    "Dataset for split '{}' is given more than once",
                    split
                )));
            }
        }
        Ok(mapping)
    }

    /// Replace or add the corpus for one split.
    pub fn set_dataset(&mut self, split: Split, path: PathBuf) {
        self.datasets.insert(split.to_string(), path);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            output: OutputSettings::default(),
            datasets: default_datasets(),
            settings: Settings::default(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            prefix: default_prefix(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

/// Estonian EDT treebank in its release layout.
fn default_datasets() -> BTreeMap<String, PathBuf> {
    Split::ALL
        .iter()
        .map(|split| {
            let path = PathBuf::from(format!("UD_Estonian-EDT/et_edt-ud-{}.conllu", split));
            (split.to_string(), path)
        })
        .collect()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_prefix() -> String {
    "est".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
