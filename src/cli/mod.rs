//! CLI command definitions and handlers

mod convert;
mod profile;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// textprof - POS-tag feature profiling for text
///
/// Turns tagged text into fixed-length numeric feature vectors for
/// downstream ML classification and ranking.
#[derive(Parser, Debug)]
#[command(name = "textprof")]
#[command(
    version,
    about = "Compute deterministic POS-tag feature vectors from tagged text",
    after_help = "\
Examples:
  textprof profile doc.conllu                       Print feature vector as JSON
  textprof profile *.conllu --variant count -o out  One JSON file per input
  textprof convert -l en -o parsed doc1.txt doc2.txt
                                                    Run the external parser, write CoNLL-U
"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers (1-64)
    #[arg(long, global = true, default_value = "8", value_parser = parse_workers)]
    pub workers: usize,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which profiling variant to run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantArg {
    /// Length-normalized frequency shares, full auxiliary statistics
    Frequency,
    /// Raw occurrence counts, sentence statistics only
    Count,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Profile tagged CoNLL-U documents into JSON feature vectors
    Profile {
        /// Input CoNLL-U files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Profiling variant
        #[arg(long, value_enum, default_value = "frequency")]
        variant: VariantArg,

        /// Output directory for per-input .json files (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert text files to CoNLL-U through the external parser pipeline
    Convert {
        /// Input language (validated against the installed resource catalog)
        #[arg(short, long)]
        language: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Resource catalog path (default: ~/.textprof/resources.json)
        #[arg(long, env = "TEXTPROF_RESOURCES")]
        resources: Option<PathBuf>,

        /// External parser command to invoke
        #[arg(long, env = "TEXTPROF_PARSER", default_value = "stanza-parse")]
        parser_cmd: String,

        /// Input text files, or "-" for STDIN
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Dispatch to the selected command handler.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Profile {
            files,
            variant,
            output,
        } => profile::run(&files, variant, output.as_deref(), cli.workers),
        Commands::Convert {
            language,
            output_dir,
            resources,
            parser_cmd,
            files,
        } => convert::run(&language, &output_dir, resources.as_deref(), &parser_cmd, &files),
    }
}
