//! `h` - look up a shortcut from the command line.
//!
//!   h delete word
//!   h vdw
//!   h --data my-sheet.json --output json tmux paste

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use h_search::output::{write_json, write_plain};
use h_search::{logging, rank, Dataset};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "h", version, about = "Look up editor and terminal shortcuts")]
struct Cli {
    /// Query words, joined with single spaces.
    #[arg(value_name = "QUERY", trailing_var_arg = true, allow_hyphen_values = true)]
    query: Vec<String>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "H_DATA",
        help = "Dataset file to search (default: built-in cheat sheet)"
    )]
    data: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    #[arg(short = 'n', long, value_name = "N", help = "Print at most N results")]
    limit: Option<NonZeroUsize>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let dataset = Dataset::load_or_builtin(cli.data.as_deref())
        .context("could not load the shortcut dataset")?;

    let query = cli.query.join(" ");
    tracing::debug!(query = %query, "query");
    let outcome = rank(&query, &dataset);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.output {
        OutputFormat::Plain => write_plain(&mut out, &query, &outcome, cli.limit)?,
        OutputFormat::Json => write_json(&mut out, &query, &outcome, cli.limit)?,
    }
    out.flush()?;
    Ok(())
}
