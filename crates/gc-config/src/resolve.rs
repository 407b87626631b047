//! Path resolution for the catalog data directory.
//!
//! Resolves relative and tilde-prefixed `data_dir` values to absolute paths.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a catalog data directory to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/catalog`) - expanded to home directory
/// - Relative paths (`./catalog`, `../shared`) - resolved relative to `config_dir`
/// - Absolute paths (`/srv/catalog`) - returned as-is after validation
///
/// The path must exist and be a directory. Returns an error otherwise.
pub fn resolve_data_dir(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    // Canonicalize to resolve symlinks and .. components
    let canonical = absolute
        .canonicalize()
        .map_err(|source| ConfigError::PathResolution {
            path: absolute.clone(),
            source,
        })?;

    if !canonical.is_dir() {
        return Err(ConfigError::DataDirNotDirectory { path: canonical });
    }

    Ok(canonical)
}

/// Expands a tilde prefix to the home directory.
///
/// - `~` alone becomes the home directory
/// - `~/foo` becomes home directory joined with `foo`
/// - Paths not starting with `~` are returned unchanged
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::Sandbox;

    #[test]
    fn test_resolve_relative_path() {
        let sandbox = Sandbox::new();
        let catalog = sandbox.mkdir("catalog");

        let resolved = resolve_data_dir("./catalog", sandbox.path()).unwrap();
        assert_eq!(resolved, catalog.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let sandbox = Sandbox::new();
        let catalog = sandbox.mkdir("catalog");
        let config_dir = sandbox.mkdir("project");

        let resolved = resolve_data_dir("../catalog", &config_dir).unwrap();
        assert_eq!(resolved, catalog.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_absolute_path() {
        let sandbox = Sandbox::new();
        let catalog = sandbox.mkdir("catalog");

        let resolved =
            resolve_data_dir(catalog.to_str().unwrap(), Path::new("/unrelated")).unwrap();
        assert_eq!(resolved, catalog.canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_missing_path_errors() {
        let sandbox = Sandbox::new();
        let err = resolve_data_dir("./missing", sandbox.path()).unwrap_err();
        assert!(matches!(err, ConfigError::PathResolution { .. }));
    }

    #[test]
    fn test_resolve_file_is_not_directory() {
        let sandbox = Sandbox::new();
        fs::write(sandbox.path().join("catalog"), "not a dir").unwrap();

        let err = resolve_data_dir("./catalog", sandbox.path()).unwrap_err();
        assert!(matches!(err, ConfigError::DataDirNotDirectory { .. }));
    }

    #[test]
    fn test_expand_tilde_untouched_without_prefix() {
        let expanded = expand_tilde("./catalog").unwrap();
        assert_eq!(expanded, PathBuf::from("./catalog"));
    }

    #[test]
    fn test_expand_tilde_prefix() {
        let expanded = expand_tilde("~/catalog").unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("catalog"));
    }
}
