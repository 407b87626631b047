//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// Catalog table files expected under `data_dir`.
const EXPECTED_TABLES: &[&str] = &["vendors.json", "doctors.json", "apartments.json"];

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No catalog data directory is configured.
    NoDataDir,
    /// An expected catalog table file is missing from the data directory.
    TableFileMissing {
        /// The table filename.
        table: String,
        /// The path that was checked.
        path: String,
    },
    /// The society name is empty.
    EmptySocietyName,
    /// The default result limit is zero, so every search returns nothing.
    ZeroDefaultLimit,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDataDir => {
                write!(f, "no catalog data_dir is configured")
            }
            Self::TableFileMissing { table, path } => {
                write!(f, "catalog table '{table}' not found at {path}")
            }
            Self::EmptySocietyName => {
                write!(f, "society name is empty")
            }
            Self::ZeroDefaultLimit => {
                write!(f, "default_limit is 0; searches will return no results")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - A missing catalog data directory
/// - Expected table files absent from the data directory
/// - An empty society name
/// - A zero default result limit
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.society.name.trim().is_empty() {
        warnings.push(ConfigWarning::EmptySocietyName);
    }

    if config.settings.default_limit == 0 {
        warnings.push(ConfigWarning::ZeroDefaultLimit);
    }

    match &config.catalog.data_dir {
        None => warnings.push(ConfigWarning::NoDataDir),
        Some(data_dir) => {
            for table in EXPECTED_TABLES {
                let path = data_dir.join(table);
                if !path.is_file() {
                    warnings.push(ConfigWarning::TableFileMissing {
                        table: (*table).to_string(),
                        path: path.display().to_string(),
                    });
                }
            }
        }
    }

    warnings
}
