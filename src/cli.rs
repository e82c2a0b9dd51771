use crate::api::{self, Components};
use crate::services::log::ActivityLogger;
use crate::types::{ApiResponse, SearchFailure, SearchQuery, StrategyKind};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "patrawl", version, about = "Patent-portal search (JSON only)")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the portal for patents matching a term
    Search(SearchArgs),
    /// Show recent activity-log entries
    Log(LogArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Free-text search term (e.g. a medicine name)
    term: String,
    /// Restrict the run to a single strategy instead of the fallback list
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Transport,
    Rendering,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Transport => StrategyKind::Transport,
            StrategyArg::Rendering => StrategyKind::Rendering,
        }
    }
}

#[derive(Args)]
struct LogArgs {
    /// Only show failed operations
    #[arg(long)]
    errors_only: bool,
    /// Only show entries for this search term
    #[arg(long)]
    term: Option<String>,
}

pub fn run() {
    let cli = Cli::parse();

    match cli.cmd {
        Command::Search(args) => search_cmd(args),
        Command::Log(args) => log_cmd(args),
    }
}

fn search_cmd(args: SearchArgs) {
    let components = match Components::from_env() {
        Ok(c) => c,
        Err(e) => return print_json(&SearchFailure::from_error(&e)),
    };

    let query = match SearchQuery::new(&args.term) {
        Ok(q) => q,
        Err(e) => return print_json(&SearchFailure::from_error(&e)),
    };
    let query = match args.strategy {
        Some(s) => query.with_strategy(s.into()),
        None => query,
    };

    match crate::runtime::block_on(api::search_with_query(&query, &components)) {
        Ok(result) => print_json(&result),
        Err(e) => print_json(&SearchFailure::from_error(&e)),
    }
}

fn log_cmd(args: LogArgs) {
    let result = ActivityLogger::new()
        .and_then(|logger| logger.read_logs(args.term.as_deref(), args.errors_only));
    match result {
        Ok(lines) => print_json(&ApiResponse::ok(lines)),
        Err(e) => print_json(&ApiResponse::<()>::err(e.to_string())),
    }
}

fn print_json<T: serde::Serialize>(val: &T) {
    // pretty JSON output
    println!("{}", serde_json::to_string_pretty(val).unwrap());
}
