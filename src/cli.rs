use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scan_grid::application::dto::RenderMode;
use scan_grid::grid::domain::ColumnGroup;

/// Serve code-scan results to a paging grid widget
#[derive(Parser, Debug)]
#[command(name = "scan-grid")]
#[command(version)]
#[command(about = "Server-side paging, sorting and filtering for code-scan result grids", long_about = None)]
pub struct Args {
    /// Config file path (defaults to ./scan-grid.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress status messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the column definitions as JSON
    Columns {
        /// Only the columns of one group: location, copyright, license,
        /// email, url, file, package or origin
        #[arg(short, long)]
        group: Option<ColumnGroup>,
    },

    /// Print the widget initialization payload (columns and visibility presets)
    Setup,

    /// Answer one grid redraw against a scan records file
    Query(QueryArgs),
}

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// Scan records file: a JSON array of flattened file records
    #[arg(short, long, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// Widget request JSON file; replaces the request-building flags below
    #[arg(long, value_name = "FILE", conflicts_with_all = ["order_column", "search", "column_search"])]
    pub request: Option<PathBuf>,

    /// Correlation number echoed back in the response
    #[arg(long, default_value_t = 1)]
    pub draw: u64,

    /// Offset of the first row
    #[arg(long, default_value_t = 0)]
    pub start: u64,

    /// Page size; negative returns every row
    #[arg(long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Position of the sort column in the catalog
    #[arg(long, default_value_t = 0)]
    pub order_column: usize,

    /// Sort direction: asc or desc
    #[arg(long, default_value = "asc")]
    pub order_dir: String,

    /// Global search term, matched as a substring in every column
    #[arg(short, long)]
    pub search: Option<String>,

    /// Column search as NAME=TERM, matched as a prefix.
    /// Can be specified multiple times: -c path=src/ -c extension=.rs
    #[arg(short = 'c', long = "column-search", value_name = "NAME=TERM", value_parser = parse_column_search)]
    pub column_search: Vec<(String, String)>,

    /// Output rows as raw records or as rendered HTML cells
    #[arg(long)]
    pub render: Option<RenderMode>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read timeout in seconds; 0 waits indefinitely
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

fn parse_column_search(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, term)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), term.to_string()))
        }
        _ => Err(format!(
            "Invalid column search: {}. Expected NAME=TERM (e.g. path=src/)",
            s
        )),
    }
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
