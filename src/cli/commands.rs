use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::indexer::{index_directory, write_index};
use crate::splitter::{SPLIT_THRESHOLD_BYTES, SplitOptions, TARGET_CHUNK_BYTES, split_directory};
use crate::utils::tool_relative_dir;

const DEFAULT_SPLIT_SOURCE: &str = "export";
const DEFAULT_SPLIT_OUTPUT: &str = "splitter";
const DEFAULT_INDEX_SOURCE: &str = "out";

#[derive(Parser)]
#[command(name = "archive-tools")]
#[command(version = "0.1.0")]
#[command(about = "Split and index exported chat archive files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split archive files larger than the threshold into chunk files
    Split(SplitArgs),
    /// Print a JSON index of every archive file to stdout
    Index(IndexArgs),
}

#[derive(Args)]
pub struct SplitArgs {
    /// Directory of archive files to split [default: <tool dir>/export]
    #[arg(long)]
    pub source: Option<PathBuf>,
    /// Output directory, deleted and recreated on every run [default: <tool dir>/splitter]
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Files larger than this many bytes are split
    #[arg(long, default_value_t = SPLIT_THRESHOLD_BYTES)]
    pub threshold_bytes: u64,
    /// Nominal chunk size used to estimate the number of chunks
    #[arg(long, default_value_t = TARGET_CHUNK_BYTES)]
    pub chunk_bytes: u64,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Directory of archive files to index [default: <tool dir>/out]
    #[arg(long)]
    pub source: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Split(args)) => {
            run_split(args)?;
        }
        Some(Commands::Index(args)) => {
            run_index(args)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn run_split(args: SplitArgs) -> Result<()> {
    let source = resolve_dir(args.source, DEFAULT_SPLIT_SOURCE)?;
    let output = resolve_dir(args.output, DEFAULT_SPLIT_OUTPUT)?;
    let options =
        SplitOptions { threshold_bytes: args.threshold_bytes, target_chunk_bytes: args.chunk_bytes };

    split_directory(&source, &output, &options)?;
    Ok(())
}

fn run_index(args: IndexArgs) -> Result<()> {
    let source = resolve_dir(args.source, DEFAULT_INDEX_SOURCE)?;
    let index = index_directory(&source)?;
    write_index(&index, io::stdout().lock())
}

fn resolve_dir(explicit: Option<PathBuf>, default_name: &str) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => tool_relative_dir(default_name),
    }
}
