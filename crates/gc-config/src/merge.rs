//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving the catalog data directory.

use std::path::{Path, PathBuf};

use crate::{
    CatalogSettings, Config, ConfigError, Settings, Society,
    parse::{RawConfig, RawSettings, RawSociety},
    resolve::resolve_data_dir,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first
/// (closest to CWD), lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - `data_dir`: first defined value wins, resolved relative to the config
///   file that defined it
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let society = merge_society(configs);
    let settings = merge_settings(configs);
    let catalog = merge_catalog(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(Path::to_path_buf);

    Ok(Config {
        society,
        catalog,
        settings,
        config_root,
    })
}

/// Merges society settings, taking first defined value for each field.
fn merge_society(configs: &[ParsedConfig]) -> Society {
    let mut result = Society::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref society) = parsed.config.society {
            apply_raw_society(&mut result, society);
        }
    }

    result
}

/// Applies raw society settings to result, overwriting any present values.
fn apply_raw_society(result: &mut Society, raw: &RawSociety) {
    if let Some(ref v) = raw.name {
        result.name = v.clone();
    }
    if let Some(ref v) = raw.city {
        result.city = Some(v.clone());
    }
}

/// Merges general settings, taking first defined value for each field.
fn merge_settings(configs: &[ParsedConfig]) -> Settings {
    let mut result = Settings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref settings) = parsed.config.settings {
            apply_raw_settings(&mut result, settings);
        }
    }

    result
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(v) = raw.default_limit {
        result.default_limit = v;
    }
    if let Some(v) = raw.shortcuts {
        result.shortcuts = v;
    }
}

/// Merges the catalog section, resolving `data_dir` against the config file
/// that defined it.
///
/// The highest-precedence definition wins completely.
fn merge_catalog(configs: &[ParsedConfig]) -> Result<CatalogSettings, ConfigError> {
    for parsed in configs {
        let Some(ref catalog) = parsed.config.catalog else {
            continue;
        };
        let Some(ref data_dir) = catalog.data_dir else {
            continue;
        };

        let config_dir = parsed.path.parent().unwrap_or_else(|| Path::new("."));
        let resolved = resolve_data_dir(data_dir, config_dir)?;
        return Ok(CatalogSettings {
            data_dir: Some(resolved),
        });
    }

    Ok(CatalogSettings::default())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{parse::parse_config_str, test_support::Sandbox};

    fn parsed(path: PathBuf, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path,
            config: parse_config_str(toml, Path::new("test")).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty_configs() {
        let result = merge_configs(&[]).unwrap();
        assert_eq!(result.settings.default_limit, 20); // default
        assert!(result.catalog.data_dir.is_none());
        assert!(result.config_root.is_none());
    }

    #[test]
    fn test_merge_single_config() {
        let sandbox = Sandbox::new();
        let catalog_dir = sandbox.mkdir("catalog");

        let config = parsed(
            sandbox.path().join(".gharconnect.toml"),
            r#"
[society]
name = "sunrise-heights"

[catalog]
data_dir = "./catalog"

[settings]
default_limit = 10
"#,
        );

        let result = merge_configs(&[config]).unwrap();
        assert_eq!(result.society.name, "sunrise-heights");
        assert_eq!(result.settings.default_limit, 10);
        assert!(result.settings.shortcuts); // default survives
        assert_eq!(
            result.catalog.data_dir,
            Some(catalog_dir.canonicalize().unwrap())
        );
    }

    #[test]
    fn test_merge_scalar_override() {
        let sandbox = Sandbox::new();

        let high_prec = parsed(
            sandbox.path().join("project/.gharconnect.toml"),
            r#"
[settings]
default_limit = 5
"#,
        );
        let low_prec = parsed(
            sandbox.path().join(".gharconnect.toml"),
            r#"
[settings]
default_limit = 30
shortcuts = false
"#,
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();

        // High precedence wins for default_limit
        assert_eq!(result.settings.default_limit, 5);
        // Low precedence provides shortcuts (not overridden)
        assert!(!result.settings.shortcuts);
    }

    #[test]
    fn test_merge_data_dir_resolved_against_defining_config() {
        let sandbox = Sandbox::new();
        let project_catalog = sandbox.mkdir("project/catalog");
        let _root_catalog = sandbox.mkdir("catalog");
        sandbox.mkdir("project");

        let high_prec = parsed(
            sandbox.path().join("project/.gharconnect.toml"),
            r#"
[catalog]
data_dir = "./catalog"
"#,
        );
        let low_prec = parsed(
            sandbox.path().join(".gharconnect.toml"),
            r#"
[catalog]
data_dir = "./catalog"
"#,
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();
        assert_eq!(
            result.catalog.data_dir,
            Some(project_catalog.canonicalize().unwrap())
        );
    }

    #[test]
    fn test_merge_data_dir_falls_through_to_lower_precedence() {
        let sandbox = Sandbox::new();
        let root_catalog = sandbox.mkdir("catalog");

        let high_prec = parsed(
            sandbox.path().join("project/.gharconnect.toml"),
            r#"
[society]
name = "palm-grove"
"#,
        );
        let low_prec = parsed(
            sandbox.path().join(".gharconnect.toml"),
            r#"
[catalog]
data_dir = "./catalog"
"#,
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();
        assert_eq!(
            result.catalog.data_dir,
            Some(root_catalog.canonicalize().unwrap())
        );
        assert_eq!(result.society.name, "palm-grove");
    }

    #[test]
    fn test_merge_missing_data_dir_errors() {
        let sandbox = Sandbox::new();

        let config = parsed(
            sandbox.path().join(".gharconnect.toml"),
            r#"
[catalog]
data_dir = "./does-not-exist"
"#,
        );

        let err = merge_configs(&[config]).unwrap_err();
        assert!(matches!(err, ConfigError::PathResolution { .. }));
    }

    #[test]
    fn test_config_root_is_highest_precedence_dir() {
        let sandbox = Sandbox::new();

        let high_prec = parsed(
            sandbox.path().join("project/sub/.gharconnect.toml"),
            "[society]\nname = \"a\"\n",
        );
        let low_prec = parsed(
            sandbox.path().join(".gharconnect.toml"),
            "[society]\nname = \"b\"\n",
        );

        let result = merge_configs(&[high_prec, low_prec]).unwrap();
        assert_eq!(result.config_root, Some(sandbox.path().join("project/sub")));
        assert_eq!(result.society.name, "a");
    }
}
