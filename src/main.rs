mod cli;

use anyhow::Context;
use cli::{Args, Command, QueryArgs};
use scan_grid::adapters::outbound::console::StderrProgressReporter;
use scan_grid::adapters::outbound::filesystem::{
    FileSystemWriter, JsonFileRecordSource, StdoutPresenter,
};
use scan_grid::application::dto::{GridRequest, RenderMode, DEFAULT_PAGE_LENGTH};
use scan_grid::application::read_models::TableSetup;
use scan_grid::application::use_cases::{QueryGridUseCase, DEFAULT_READ_TIMEOUT_SECS};
use scan_grid::config::{self, ConfigFile};
use scan_grid::grid::domain::ColumnCatalog;
use scan_grid::ports::outbound::{OutputPresenter, ProgressReporter};
use scan_grid::shared::error::{ExitCode, GridError};
use scan_grid::shared::security::{inspect_input_file, MAX_INPUT_FILE_SIZE};
use scan_grid::shared::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing();

    let reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    if let Err(e) = run(args, &reporter).await {
        reporter.report_error("\n❌ An error occurred:\n");
        reporter.report_error(&e.to_string());

        // Display error chain
        for cause in e.chain().skip(1) {
            reporter.report_error(&format!("\nCaused by: {}", cause));
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(args: Args, reporter: &StderrProgressReporter) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let catalog = ColumnCatalog::global();

    match args.command {
        Command::Columns { group } => {
            let definitions = TableSetup::column_definitions(catalog, group);
            present(&definitions, None)
        }
        Command::Setup => present(&TableSetup::build(catalog), None),
        Command::Query(query) => run_query(query, &config, reporter).await,
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

async fn run_query(
    args: QueryArgs,
    config: &ConfigFile,
    reporter: &StderrProgressReporter,
) -> Result<()> {
    let records = args
        .records
        .clone()
        .or_else(|| config.records.clone())
        .ok_or_else(|| GridError::Validation {
            message: "No scan records file given.\n\n💡 Hint: Pass --records <FILE> or set `records` in scan-grid.config.yml".to_string(),
        })?;

    let request = build_request(&args, config)?;
    let render = args.render.or(config.render_mode()).unwrap_or_default();
    let read_timeout = match args
        .timeout
        .or(config.read_timeout_secs)
        .unwrap_or(DEFAULT_READ_TIMEOUT_SECS)
    {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    };

    reporter.report(&format!("📂 Reading scan records from {}", records.display()));

    let source = Arc::new(JsonFileRecordSource::new(records));
    let use_case = QueryGridUseCase::new(source).with_read_timeout(read_timeout);
    let response = use_case.execute(request).await?;

    reporter.report_completion(&format!(
        "✅ Draw {}: {} row(s), {} of {} record(s) match",
        response.draw,
        response.data.len(),
        response.records_filtered,
        response.records_total
    ));

    let output = args.output.as_deref();
    match render {
        RenderMode::Raw => present(&response, output),
        RenderMode::Html => present(&use_case.render(&response), output),
    }
}

/// Reads the widget request file, or assembles a request from the flags
fn build_request(args: &QueryArgs, config: &ConfigFile) -> Result<GridRequest> {
    if let Some(path) = &args.request {
        return read_request_file(path);
    }

    let length = args
        .length
        .or(config.page_length)
        .unwrap_or(DEFAULT_PAGE_LENGTH);
    let mut request = GridRequest::for_catalog(ColumnCatalog::global(), args.draw, args.start, length)
        .ordered_by(args.order_column, &args.order_dir);

    if let Some(term) = &args.search {
        request = request.with_search(term.clone());
    }
    for (name, term) in &args.column_search {
        request = request.with_column_search(name, term.clone());
    }
    Ok(request)
}

fn read_request_file(path: &Path) -> Result<GridRequest> {
    inspect_input_file(path, "grid request", MAX_INPUT_FILE_SIZE)?;
    let content = std::fs::read_to_string(path).map_err(|e| GridError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    let request = serde_json::from_str(&content).map_err(|e| GridError::InvalidRequest {
        details: format!("{}: {}", path.display(), e),
    })?;
    Ok(request)
}

fn present<T: Serialize>(payload: &T, output: Option<&Path>) -> Result<()> {
    let content =
        serde_json::to_string_pretty(payload).context("Failed to serialize grid payload")?;

    let presenter: Box<dyn OutputPresenter> = match output {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&content)
}
