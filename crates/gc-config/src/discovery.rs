//! Locating `.gharconnect.toml` files.
//!
//! A catalog setup can spread its configuration over several levels: a file
//! next to the data, overrides deeper in the tree, and a per-user fallback
//! in the home directory. Discovery collects everything that applies to a
//! working directory; precedence is settled later by the merge step.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// Name of a GharConnect configuration file.
pub const CONFIG_FILENAME: &str = ".gharconnect.toml";

/// Collects every configuration file that applies to `cwd`.
///
/// The result is ordered by precedence: the file nearest to `cwd` first,
/// the global `~/.gharconnect.toml` (if present) last. A file with
/// `root = true` is included but ends the collection, cutting off both
/// outer directories and the global fallback.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        found.push(candidate);
        if stop {
            return found;
        }
    }

    // The walk may already have picked the global file up (cwd under home).
    if let Some(global) = global_config_path()
        && global.is_file()
        && found.iter().all(|collected| *collected != global)
    {
        found.push(global);
    }

    found
}

/// Location of the per-user fallback config, `None` when no home directory
/// can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|base| base.home_dir().join(CONFIG_FILENAME))
}

/// Whether `path` is the per-user fallback config.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| global == path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::Sandbox;

    /// Discovery with the global fallback filtered out, so assertions do not
    /// depend on whether the developer's home directory has a config.
    fn discover_local(cwd: &Path) -> Vec<PathBuf> {
        discover_config_files(cwd)
            .into_iter()
            .filter(|path| !is_global_config(path))
            .collect()
    }

    #[test]
    fn nearest_config_comes_first() {
        let sandbox = Sandbox::new();
        let outer = sandbox.write_config("", "# outer\n");
        let mid = sandbox.write_config("block-a", "# mid\n");
        let inner = sandbox.write_config("block-a/flat-12", "# inner\n");
        let cwd = sandbox.mkdir("block-a/flat-12/photos");

        assert_eq!(discover_local(&cwd), vec![inner, mid, outer]);
    }

    #[test]
    fn starting_directory_is_searched_too() {
        let sandbox = Sandbox::new();
        let config = sandbox.write_config("block-a", "# here\n");
        let cwd = sandbox.mkdir("block-a");

        assert_eq!(discover_local(&cwd), vec![config]);
    }

    #[test]
    fn empty_tree_finds_nothing_local() {
        let sandbox = Sandbox::new();
        let cwd = sandbox.mkdir("block-a");

        assert!(discover_local(&cwd).is_empty());
    }

    #[test]
    fn root_marker_cuts_off_outer_configs() {
        let sandbox = Sandbox::new();
        sandbox.write_config("", "# must not apply\n");
        let rooted = sandbox.write_config("society", "root = true\n");
        let cwd = sandbox.mkdir("society/data");

        // Unfiltered on purpose: a root config also suppresses the global file.
        assert_eq!(discover_config_files(&cwd), vec![rooted]);
    }

    #[test]
    fn configs_inside_a_rooted_tree_still_apply() {
        let sandbox = Sandbox::new();
        sandbox.write_config("", "# must not apply\n");
        let rooted = sandbox.write_config("society", "root = true\n");
        let inner = sandbox.write_config("society/block-b", "# inner\n");
        let cwd = sandbox.mkdir("society/block-b/flat-3");

        assert_eq!(discover_config_files(&cwd), vec![inner, rooted]);
    }

    #[test]
    fn explicit_root_false_keeps_walking() {
        let sandbox = Sandbox::new();
        let outer = sandbox.write_config("", "# outer\n");
        let inner = sandbox.write_config("society", "root = false\n");
        let cwd = sandbox.mkdir("society/data");

        assert_eq!(discover_local(&cwd), vec![inner, outer]);
    }

    #[test]
    fn directory_with_the_config_name_is_ignored() {
        let sandbox = Sandbox::new();
        fs::create_dir_all(sandbox.path().join(CONFIG_FILENAME)).unwrap();
        let cwd = sandbox.mkdir("block-a");

        assert!(discover_local(&cwd).is_empty());
    }

    #[test]
    fn global_path_is_under_home() {
        let global = global_config_path().unwrap();
        assert!(global.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&global));
        assert!(!is_global_config(Path::new("/elsewhere/.gharconnect.toml")));
    }
}
