use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Word frequency index of the identifiers in a source tree", long_about = None)]
struct Cli {
    /// Increase log detail (-v: progress, -vv: every identifier). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a source tree and rewrite .lexicon/word_list.txt
    Digest {
        /// Root directory to scan
        root: PathBuf,

        /// Directory for word_list.txt (default: ./.lexicon)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Output scan statistics as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Parse one file and dump its syntax tree
    DumpAst {
        /// Source file to parse
        file: PathBuf,

        /// Where to write the dump (created or truncated)
        output: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Digest {
            root,
            out_dir,
            json,
        } => {
            commands::digest::execute(root, out_dir, json)?;
        }
        Commands::DumpAst { file, output } => {
            commands::dump_ast::execute(&file, &output)?;
        }
    }

    Ok(())
}
