#![deny(missing_docs)]

//! # OAS Clean CLI
//!
//! Normalizes an OpenAPI document in place:
//! - camel-cases and de-duplicates `operationId`s,
//! - hoists request-body `query`/`params`/`body` sub-schemas,
//! - turns `enum: ["true", "false"]` parameters into booleans.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod clean;
mod error;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Normalize generated OpenAPI documents")]
struct Cli {
    #[clap(flatten)]
    clean: clean::CleanArgs,

    /// Log every rewrite (same as `RUST_LOG=debug`).
    #[clap(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match clean::execute(&cli.clean) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
