use clap::{Args, Parser, Subcommand, ValueEnum};
use orderly::*;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Render SELECT queries with an ORDER BY clause
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set, e.g. `debug` or `orderly=trace`
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a SELECT over one table
    Render(RenderArgs),
    /// List the supported SQL dialects
    Dialects,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// SQL text
    Sql,
    /// The ORDER BY items as JSON, in the order they are emitted
    Json,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// The table to select from
    #[arg(short, long)]
    table: String,
    /// Result columns; all columns when omitted
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,
    /// SQL dialect
    #[arg(short, long, default_value = "postgres")]
    dialect: String,
    /// Put each clause on its own line
    #[arg(long)]
    indent: bool,
    #[arg(short, long, value_enum, default_value_t = Format::Sql)]
    format: Format,
    /// Ordering such as `name, created_at desc, random()`. If empty, stdin will be used.
    ordering: Option<String>,
}

fn get_stdin() -> Result<String, io::Error> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn render(args: RenderArgs) -> Result<String, Box<dyn std::error::Error>> {
    let ordering = match args.ordering {
        Some(ordering) => ordering,
        None => get_stdin()?,
    };
    let mut options = Options::for_dialect(&args.dialect)?;
    if args.indent {
        options.layout = Layout::Indented;
    }
    debug!(dialect = options.dialect.name(), "options resolved");

    let mut query = QueryBuilder::new(args.table)?;
    query.select(args.columns)?.apply_ordering(ordering.trim())?;

    let output = match args.format {
        Format::Sql => query.to_sql(&options),
        Format::Json => {
            let items = emission_order(query.order_by_clause().columns());
            serde_json::to_string_pretty(&items)?
        }
    };
    Ok(output)
}

fn dialects() -> String {
    dialect_names().join("\n")
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(&args.log_level);
    let result = match args.command {
        Command::Render(args) => render(args),
        Command::Dialects => Ok(dialects()),
    };
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!(%err, "render failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
