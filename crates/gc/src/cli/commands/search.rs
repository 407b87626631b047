//! Implementation of `gc search`.

use std::process::ExitCode;

use gc_search::{SearchError, SearchOptions, SearchOutcome, run_search};

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{dim, output_redirect, output_results},
};

/// Searches the aggregated catalog and prints ranked results or a redirect.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    // Ranking and the --explain breakdown must see the same query.
    let query = cmd.query.join(" ");
    let query = query.trim();
    let society = ctx.society(cmd.society.as_deref());

    let options = SearchOptions {
        no_shortcuts: cmd.no_redirect || !ctx.config.settings.shortcuts,
        kind: cmd.kind,
        limit: Some(cmd.limit.unwrap_or(ctx.config.settings.default_limit)),
    };

    let (catalog, _reports) = ctx.load_catalog(&society);

    match run_search(query, &catalog, &society, &options) {
        Ok(SearchOutcome::Redirect(redirect)) => output_redirect(&redirect, query, cmd.output.json),
        Ok(SearchOutcome::Results(results)) => {
            output_results(&results, query, cmd.output.json, cmd.explain)
        }
        Err(SearchError::EmptyQuery) => {
            println!("{}", dim("Start typing to search"));
            ExitCode::SUCCESS
        }
    }
}
