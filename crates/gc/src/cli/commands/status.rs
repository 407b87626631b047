//! Implementation of `gc status`.

use std::process::ExitCode;

use gc_config::{ConfigWarning, discover_config_files};
use gc_store::SourceOutcome;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, catalog sources, and validation warnings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!("Run {} to create a configuration file.", subheader("gc init"));
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let config = &ctx.config;

    println!("{}", subheader("Society:"));
    match &config.society.city {
        Some(city) => println!("   {} {}", config.society.name, dim(&format!("({city})"))),
        None => println!("   {}", config.society.name),
    }
    println!();

    println!("{}", subheader("Catalog:"));
    match &config.catalog.data_dir {
        Some(data_dir) => println!("   {}", data_dir.display()),
        None => println!("   {}", dim("(no data_dir configured)")),
    }
    println!();

    if config.catalog.data_dir.is_some() {
        let (_, reports) = ctx.load_snapshot();
        println!("{}", subheader("Sources:"));
        for report in &reports {
            match &report.outcome {
                SourceOutcome::Loaded(count) => {
                    println!("   {} {}", report.source, dim(&format!("({count} records)")));
                }
                SourceOutcome::Failed(reason) => {
                    println!("   {} {}", report.source, warning(&format!("[failed: {reason}]")));
                }
            }
        }
        println!();
    }

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoDataDir => {
                println!(
                    "{}",
                    dim("Hint: add a [catalog] data_dir to .gharconnect.toml")
                );
            }
            ConfigWarning::TableFileMissing { .. } => {
                println!(
                    "{}",
                    dim("Hint: create the missing table file or fix data_dir")
                );
            }
            _ => {}
        }
    }
}
