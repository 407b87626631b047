//! Implementation of `gc catalog`.

use std::process::ExitCode;

use crate::cli::{
    args::CatalogCommand,
    context::CommandContext,
    output::{catalog_table, dim},
};

/// Shows the full aggregated catalog for the configured society.
pub fn run(ctx: &CommandContext, cmd: &CatalogCommand) -> ExitCode {
    let society = ctx.society(cmd.society.as_deref());
    let (mut catalog, _reports) = ctx.load_catalog(&society);

    if let Some(kind) = cmd.kind {
        catalog.retain(|entry| entry.kind == kind);
    }

    if cmd.output.json {
        match serde_json::to_string_pretty(&catalog) {
            Ok(json_str) => println!("{json_str}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if catalog.is_empty() {
        println!("{}", dim("Catalog is empty."));
        return ExitCode::SUCCESS;
    }

    println!("{}", catalog_table(&catalog));
    println!("{}", dim(&format!("{} entries", catalog.len())));
    ExitCode::SUCCESS
}
