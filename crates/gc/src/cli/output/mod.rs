//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use colored::Colorize;
use comfy_table::{Table, presets};
use gc_catalog::SearchResult;
use gc_search::{Redirect, ScoreBreakdown, score_with_breakdown};
use serde::Serialize;

/// Dim styling for secondary text.
pub fn dim(s: &str) -> String {
    s.dimmed().to_string()
}

/// Bold styling for section headings.
pub fn subheader(s: &str) -> String {
    s.bold().to_string()
}

/// Warning styling.
pub fn warning(s: &str) -> String {
    s.yellow().to_string()
}

/// JSON output for one result, optionally with its scoring signals.
#[derive(Serialize)]
struct JsonResult {
    /// The ranked result.
    #[serde(flatten)]
    result: SearchResult,
    /// Scoring signals when `--explain` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    score_breakdown: Option<ScoreBreakdown>,
}

/// JSON output for `gc search` when the query ranks the catalog.
#[derive(Serialize)]
struct JsonSearchOutput {
    /// The original query string.
    query: String,
    /// Total matches returned.
    total_matches: usize,
    /// Ranked results, best first.
    results: Vec<JsonResult>,
}

/// JSON output for `gc search` when a shortcut fires.
#[derive(Serialize)]
struct JsonRedirectOutput {
    /// The original query string.
    query: String,
    /// Redirect destination.
    redirect: JsonRedirect,
}

/// The redirect payload.
#[derive(Serialize)]
struct JsonRedirect {
    /// The trigger word that fired.
    trigger: String,
    /// Destination path with the society segment substituted.
    path: String,
}

/// Outputs a shortcut redirect.
pub fn output_redirect(redirect: &Redirect, query: &str, json: bool) -> ExitCode {
    if json {
        let output = JsonRedirectOutput {
            query: query.to_string(),
            redirect: JsonRedirect {
                trigger: redirect.trigger.to_string(),
                path: redirect.path.clone(),
            },
        };
        return print_json(&output);
    }

    println!("Redirecting to {}", subheader(&redirect.path));
    println!("{}", dim(&format!("(matched shortcut '{}')", redirect.trigger)));
    ExitCode::SUCCESS
}

/// Outputs ranked search results in text or JSON.
pub fn output_results(results: &[SearchResult], query: &str, json: bool, explain: bool) -> ExitCode {
    if json {
        let output = JsonSearchOutput {
            query: query.to_string(),
            total_matches: results.len(),
            results: results
                .iter()
                .map(|result| JsonResult {
                    result: result.clone(),
                    score_breakdown: explain.then(|| score_with_breakdown(query, result)),
                })
                .collect(),
        };
        return print_json(&output);
    }

    if results.is_empty() {
        println!("{}", dim("No results found."));
        return ExitCode::SUCCESS;
    }

    for (index, result) in results.iter().enumerate() {
        print_text_result(index + 1, result);
        if explain {
            print_breakdown(&score_with_breakdown(query, result));
        }
        println!();
    }

    println!("{}", dim(&format!("─── {} results ───", results.len())));
    ExitCode::SUCCESS
}

/// Prints one result in text form.
fn print_text_result(position: usize, result: &SearchResult) {
    let score = result
        .relevance_score
        .map(|s| dim(&format!("(score {s})")))
        .unwrap_or_default();
    println!(
        "{}. {} {} {}",
        position,
        subheader(&result.title),
        dim(&format!("[{}]", result.kind)),
        score
    );

    if !result.description.is_empty() {
        println!("   {}", result.description);
    }

    let mut details = vec![result.url.clone()];
    if let Some(rating) = result.rating {
        details.push(format!("★{rating}"));
    }
    if let Some(ref price) = result.price {
        details.push(price.clone());
    }
    if let Some(ref location) = result.location {
        details.push(location.clone());
    }
    if let Some(ref mobile) = result.mobile {
        details.push(mobile.clone());
    }
    println!("   {}", dim(&details.join("  ")));
}

/// Prints the scoring signals for one result.
fn print_breakdown(breakdown: &ScoreBreakdown) {
    for signal in &breakdown.signals {
        println!("   {}", dim(&format!("+{:<4} {}", signal.points, signal.rule)));
    }
}

/// Builds a table listing catalog entries for `gc catalog`.
pub fn catalog_table(results: &[SearchResult]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec!["Id", "Title", "Type", "Category", "Url"]);
    for result in results {
        table.add_row(vec![
            result.id.clone(),
            result.title.clone(),
            result.kind.to_string(),
            result.category.clone(),
            result.url.clone(),
        ]);
    }
    table
}

/// Serializes a value as pretty JSON to stdout.
fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
