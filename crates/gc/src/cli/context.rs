//! Shared context for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use gc_catalog::{CatalogSnapshot, SearchResult, aggregate};
use gc_config::Config;
use gc_store::{JsonStore, SourceReport, load_snapshot};
use tracing::warn;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = Config::load(&cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file
    /// is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Returns the effective society slug, preferring the CLI override.
    pub fn society(&self, cli_override: Option<&str>) -> String {
        cli_override
            .map(str::to_string)
            .unwrap_or_else(|| self.config.society.name.clone())
    }

    /// Loads the catalog snapshot and aggregates it for the given society.
    ///
    /// Without a configured `data_dir` the catalog still contains the static
    /// pages, CTAs, and apartment placeholders; only stored records are
    /// absent. Individual source failures are already substituted with empty
    /// sequences by the loader.
    pub fn load_catalog(&self, society: &str) -> (Vec<SearchResult>, Vec<SourceReport>) {
        let (snapshot, reports) = self.load_snapshot();
        (aggregate(&snapshot, society), reports)
    }

    /// Loads the raw catalog snapshot with per-source reports.
    pub fn load_snapshot(&self) -> (CatalogSnapshot, Vec<SourceReport>) {
        match &self.config.catalog.data_dir {
            Some(data_dir) => {
                let store = JsonStore::new(data_dir);
                load_snapshot(&store)
            }
            None => {
                warn!("no catalog data_dir configured; using static catalog only");
                (CatalogSnapshot::default(), Vec::new())
            }
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}
