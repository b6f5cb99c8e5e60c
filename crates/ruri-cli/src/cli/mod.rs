//! CLI for the ruri reference resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use ruri_core::batch::BatchFormat;
use ruri_core::config;
use std::path::Path;

use commands::{
    run_batch, run_classify, run_completions, run_config, run_man, run_parts, run_resolve,
};

/// Top-level CLI for ruri.
#[derive(Debug, Parser)]
#[command(name = "ruri")]
#[command(about = "ruri: resolve URLs and paths against a base", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a reference against a base.
    Resolve {
        /// URL, path, `?query` or `#hash` to resolve.
        input: String,
        /// Base to resolve against (default: `default_base` from config, else empty).
        #[arg(long, short)]
        base: Option<String>,
        /// Print a JSON object instead of the bare result.
        #[arg(long)]
        json: bool,
    },

    /// Show the components of a value (or of its resolution with --base) as JSON.
    Parts {
        /// URL or path to split.
        value: String,
        /// Resolve against this base before splitting.
        #[arg(long, short)]
        base: Option<String>,
    },

    /// Show which kind of reference the input is.
    Classify {
        /// URL, path, `?query` or `#hash`.
        input: String,
    },

    /// Resolve every line of a file (`-` for stdin).
    Batch {
        /// Path to the batch file.
        path: String,
        /// Line format: tsv (`input<TAB>base`) or jsonl (`{"input", "base"}`).
        #[arg(long, value_name = "FORMAT")]
        format: Option<BatchFormat>,
        /// Base for lines that do not carry one.
        #[arg(long, short)]
        base: Option<String>,
        /// Print JSON lines instead of bare results.
        #[arg(long)]
        json: bool,
    },

    /// Print the config file path and effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { input, base, json } => {
                run_resolve(&cfg, &input, base.as_deref(), json)?
            }
            CliCommand::Parts { value, base } => run_parts(&value, base.as_deref())?,
            CliCommand::Classify { input } => run_classify(&input)?,
            CliCommand::Batch {
                path,
                format,
                base,
                json,
            } => run_batch(&cfg, Path::new(&path), format, base.as_deref(), json)?,
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
