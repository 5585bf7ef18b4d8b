//! profstore: Manage profiling session databases
//!
//! Creates session databases, classifies calls and counters for feedback
//! analysis, exports sessions to CSV and prints summaries.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use profstore::{export_to_csv, CategoryPreprocessor, ExportOptions, StoreConfig, TraceStore};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "profstore")]
#[command(about = "Manage profiling session databases")]
#[command(version)]
struct Cli {
    /// TOML file with connection settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a session database with an empty schema
    Init {
        /// Path to the session database
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
    /// Rebuild the call and counter category tables
    Preprocess {
        #[arg(short, long)]
        database: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Export every table to CSV
    Export {
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Directory receiving the CSV files
        #[arg(short, long)]
        output: PathBuf,

        /// Prefix for every file name
        #[arg(long, default_value = "")]
        prefix: String,

        /// Replace existing files
        #[arg(long)]
        overwrite: bool,
    },
    /// List frames with their CPU time range
    Frames {
        #[arg(short, long)]
        database: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Delete regions of interest and annotations
    DeleteFeedback {
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
    /// Show row counts and session metadata
    Info {
        #[arg(short, long)]
        database: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Serialize)]
struct FrameRange {
    frame: u64,
    cpu_start: u64,
    cpu_end: u64,
}

#[derive(Serialize)]
struct SessionSummary {
    tables: Vec<TableCount>,
    session: Vec<profstore::records::SessionEntry>,
}

#[derive(Serialize)]
struct TableCount {
    table: &'static str,
    rows: u64,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<StoreConfig> {
    match path {
        Some(path) => StoreConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(StoreConfig::default()),
    }
}

/// Open the session named on the command line, falling back to the config file.
fn open_store(
    config: &StoreConfig,
    database: Option<PathBuf>,
    create: bool,
) -> Result<TraceStore> {
    let Some(path) = database.or_else(|| config.path.clone()) else {
        bail!("No database given: pass --database or set `path` in the config file");
    };
    let mut config = config.clone();
    config.create_if_missing = create;
    TraceStore::open(&path, &config)
        .with_context(|| format!("Failed to open session database {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("(no results)");
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, val) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(val.len());
            }
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{h:w$}"))
        .collect();
    println!("{}", header_line.join(" | "));

    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", sep.join("-+-"));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!("{v:w$}"))
            .collect();
        println!("{}", line.join(" | "));
    }
}

fn run_preprocess(store: &mut TraceStore, format: OutputFormat) -> Result<()> {
    let counters = store.counter_index()?;
    let report = CategoryPreprocessor::new(store, &counters)
        .run()
        .context("Category preprocessing did not complete")?;
    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => print_table(
            &["call rows", "counter rows", "skipped counters"],
            &[vec![
                report.call_rows.to_string(),
                report.counter_rows.to_string(),
                report.skipped_counters.to_string(),
            ]],
        ),
    }
    Ok(())
}

fn run_frames(store: &TraceStore, format: OutputFormat) -> Result<()> {
    let mut frames = Vec::new();
    for frame in store.unique_frame_numbers()? {
        let (cpu_start, cpu_end) = store.frame_time_range(frame)?;
        frames.push(FrameRange {
            frame,
            cpu_start,
            cpu_end,
        });
    }
    match format {
        OutputFormat::Json => print_json(&frames)?,
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = frames
                .iter()
                .map(|f| {
                    vec![
                        f.frame.to_string(),
                        f.cpu_start.to_string(),
                        f.cpu_end.to_string(),
                        f.cpu_end.saturating_sub(f.cpu_start).to_string(),
                    ]
                })
                .collect();
            print_table(&["frame", "cpu start", "cpu end", "duration"], &rows);
        }
    }
    Ok(())
}

fn run_info(store: &TraceStore, format: OutputFormat) -> Result<()> {
    let summary = SessionSummary {
        tables: store
            .row_counts()?
            .into_iter()
            .map(|(table, rows)| TableCount { table, rows })
            .collect(),
        session: store.session_entries()?,
    };
    match format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = summary
                .tables
                .iter()
                .map(|t| vec![t.table.to_string(), t.rows.to_string()])
                .collect();
            print_table(&["table", "rows"], &rows);
            if !summary.session.is_empty() {
                println!();
                let rows: Vec<Vec<String>> = summary
                    .session
                    .iter()
                    .map(|e| vec![e.key.clone(), e.value.clone()])
                    .collect();
                print_table(&["key", "value"], &rows);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Init { database } => {
            let store = open_store(&config, database, true)?;
            let tables = store.row_counts()?.len();
            println!("Session database ready ({tables} tables)");
        }
        Commands::Preprocess { database, format } => {
            let mut store = open_store(&config, database, false)?;
            run_preprocess(&mut store, format)?;
        }
        Commands::Export {
            database,
            output,
            prefix,
            overwrite,
        } => {
            let store = open_store(&config, database, false)?;
            let written = export_to_csv(&store, &output, &ExportOptions { prefix, overwrite })
                .with_context(|| format!("Failed to export to {}", output.display()))?;
            let rows: usize = written.iter().map(|t| t.rows).sum();
            println!(
                "Exported {} tables ({} rows) to {}",
                written.len(),
                rows,
                output.display()
            );
        }
        Commands::Frames { database, format } => {
            let store = open_store(&config, database, false)?;
            run_frames(&store, format)?;
        }
        Commands::DeleteFeedback { database } => {
            let mut store = open_store(&config, database, false)?;
            store
                .delete_feedback_data()
                .context("Feedback data was only partially deleted")?;
            println!("Deleted feedback data ({})", profstore::store::FEEDBACK_TABLES.join(", "));
        }
        Commands::Info { database, format } => {
            let store = open_store(&config, database, false)?;
            run_info(&store, format)?;
        }
    }

    Ok(())
}
