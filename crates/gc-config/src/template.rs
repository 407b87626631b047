//! Template generation for `gc init`.
//!
//! The template is rendered from a filled-in example [`Config`] through the
//! same serializer `gc config` uses, then commented out line by line. The
//! example therefore cannot drift from the schema the parser accepts.

use std::path::PathBuf;

use crate::{CatalogSettings, Config, Settings, Society};

/// Guidance printed above each section of the rendered template.
const SECTION_NOTES: [(&str, &str); 3] = [
    (
        "[society]",
        "name is the URL segment substituted for [society] in results",
    ),
    (
        "[catalog]",
        "data_dir holds vendors.json, doctors.json and apartments.json",
    ),
    (
        "[settings]",
        "default_limit caps search output; shortcuts enables redirects",
    ),
];

/// Returns the commented example written into a project directory.
pub fn local_template() -> String {
    render_template(&example_config("./catalog"))
}

/// Returns the commented example for the per-user `~/.gharconnect.toml`.
///
/// Same schema as the local file; the example data location is
/// home-relative since the global file is not anchored to a project
/// directory.
pub fn global_template() -> String {
    render_template(&example_config("~/gharconnect/catalog"))
}

/// The filled-in configuration the template is rendered from.
fn example_config(data_dir: &str) -> Config {
    Config {
        society: Society {
            name: "sunrise-heights".to_string(),
            city: Some("Mumbai".to_string()),
        },
        catalog: CatalogSettings {
            data_dir: Some(PathBuf::from(data_dir)),
        },
        settings: Settings::default(),
        config_root: None,
    }
}

/// Serializes the example and comments out every setting.
fn render_template(example: &Config) -> String {
    let mut out = String::new();
    for line in example.settings_to_toml().lines() {
        if let Some((_, note)) = SECTION_NOTES.iter().find(|(header, _)| line == *header) {
            out.push_str("# ");
            out.push_str(note);
            out.push('\n');
        }
        if !line.is_empty() {
            out.push_str("# ");
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parse::parse_config_str;

    /// Recovers the example TOML by stripping the comment markers and the
    /// guidance lines (which carry no `=` and no section bracket).
    fn uncomment(template: &str) -> String {
        template
            .lines()
            .filter_map(|line| line.strip_prefix("# "))
            .filter(|line| line.starts_with('[') || line.contains('='))
            .fold(String::new(), |mut toml, line| {
                toml.push_str(line);
                toml.push('\n');
                toml
            })
    }

    #[test]
    fn uncommented_template_parses_with_example_values() {
        let toml = uncomment(&local_template());
        let raw = parse_config_str(&toml, Path::new("template")).unwrap();

        assert_eq!(raw.society.unwrap().name.as_deref(), Some("sunrise-heights"));
        assert_eq!(raw.catalog.unwrap().data_dir.as_deref(), Some("./catalog"));
        let settings = raw.settings.unwrap();
        assert_eq!(settings.default_limit, Some(20));
        assert_eq!(settings.shortcuts, Some(true));
    }

    #[test]
    fn template_as_written_sets_nothing() {
        let raw = parse_config_str(&local_template(), Path::new("template")).unwrap();
        assert!(raw.root.is_none());
        assert!(raw.society.is_none());
        assert!(raw.catalog.is_none());
        assert!(raw.settings.is_none());
    }

    #[test]
    fn global_example_is_not_project_relative() {
        assert!(local_template().contains("\"./catalog\""));
        assert!(global_template().contains("\"~/gharconnect/catalog\""));
    }

    #[test]
    fn every_section_carries_its_note() {
        let template = local_template();
        for (header, note) in SECTION_NOTES {
            assert!(template.contains(&format!("# {header}")), "{header} missing");
            assert!(template.contains(note), "note for {header} missing");
        }
    }
}
