#![deny(missing_docs)]

//! # Clean Command
//!
//! Loads a spec file, cleans it and writes it back.

use std::path::PathBuf;

use oasclean_core::{clean, load_document, save_document, DocumentFormat};

use crate::error::{CliError, CliResult};

/// Arguments for the clean command.
#[derive(clap::Args, Debug, Clone)]
pub struct CleanArgs {
    /// Path to the OpenAPI document. `.json` files are read as JSON, anything else as YAML.
    #[clap(long, short, env = "INPUT_FILE")]
    pub file: PathBuf,

    /// Write the cleaned document here instead of overwriting `--file`.
    /// The output format follows this path's extension.
    #[clap(long, short)]
    pub output: Option<PathBuf>,

    /// Exit with an error if the document is not already clean. Writes nothing.
    #[clap(long, conflicts_with = "output")]
    pub check: bool,
}

/// Executes the clean command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &CleanArgs) -> CliResult<()> {
    if !args.file.exists() {
        return Err(CliError::General(format!(
            "OpenAPI file not found: {:?}",
            args.file
        )));
    }

    // 1. Read + parse; a parse failure returns before anything is written
    let (document, format) = load_document(&args.file)?;
    let original = args.check.then(|| document.clone());

    // 2. Clean
    let cleaned = clean(document)?;

    if let Some(original) = original {
        if original != cleaned {
            return Err(CliError::General(format!(
                "{:?} is not clean; run without --check to fix it",
                args.file
            )));
        }
        tracing::info!(file = %args.file.display(), "document is already clean");
        return Ok(());
    }

    // 3. Write
    let (out_path, out_format) = match &args.output {
        Some(path) => (path, DocumentFormat::from_path(path)),
        None => (&args.file, format),
    };
    save_document(out_path, &cleaned, out_format)?;

    tracing::info!(output = %out_path.display(), "cleaned OpenAPI document");

    Ok(())
}
