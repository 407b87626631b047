//! Configuration system for GharConnect.
//!
//! GharConnect uses TOML configuration files named `.gharconnect.toml`.
//! Configuration is resolved by walking up the directory tree from the current
//! working directory, collecting any `.gharconnect.toml` files found, then
//! loading `~/.gharconnect.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod template;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawCatalog, RawConfig, RawSettings, RawSociety, parse_config_file, parse_config_str,
};
pub use resolve::resolve_data_dir;
use serde::{Deserialize, Serialize};
pub use template::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for GharConnect.
///
/// This represents the fully resolved configuration after merging all
/// discovered `.gharconnect.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The society this catalog serves.
    pub society: Society,
    /// Catalog data location.
    pub catalog: CatalogSettings,
    /// General settings.
    pub settings: Settings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.gharconnect.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.gharconnect.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.gharconnect.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// This is primarily useful for testing.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - A missing catalog data directory
    /// - Expected table files absent from the data directory
    /// - An empty society name
    /// - A zero default result limit
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// This outputs the merged configuration in the same format as a
    /// `.gharconnect.toml` file, making it easy to see the effective
    /// configuration. The `data_dir` shown is the resolved absolute path.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableConfig {
            society: self.society.clone(),
            catalog: SerializableCatalog {
                data_dir: self
                    .catalog
                    .data_dir
                    .as_ref()
                    .map(|p| p.display().to_string()),
            },
            settings: self.settings.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// The society a catalog serves.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Society {
    /// Society slug substituted into result URLs.
    pub name: String,
    /// Display city, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Default for Society {
    fn default() -> Self {
        Self {
            name: String::from("gharconnect"),
            city: None,
        }
    }
}

/// Catalog data location.
#[derive(Debug, Clone, Default)]
pub struct CatalogSettings {
    /// Resolved absolute path to the directory holding catalog table files.
    pub data_dir: Option<PathBuf>,
}

/// General settings for GharConnect.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum results per query.
    pub default_limit: usize,
    /// Whether direct-redirect shortcuts are enabled.
    pub shortcuts: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_limit: 20,
            shortcuts: true,
        }
    }
}

/// Internal struct for TOML serialization of the effective configuration.
#[derive(Serialize)]
struct SerializableConfig {
    /// Society section.
    society: Society,
    /// Catalog section with the resolved data directory.
    catalog: SerializableCatalog,
    /// General settings section.
    settings: Settings,
}

/// Catalog section with the resolved path rendered as a string.
#[derive(Serialize)]
struct SerializableCatalog {
    /// Resolved data directory, if configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    data_dir: Option<String>,
}
