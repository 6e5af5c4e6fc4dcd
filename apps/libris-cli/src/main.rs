//! libris - search the Open Library catalog from a terminal
//!
//! Runs one search, prints the result cards, and optionally opens the
//! detail view of one result.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use libris_core::{
    BookCard, BookDetailView, CatalogConfig, DetailOrchestrator, OpenLibraryClient, SearchField,
    SearchOrchestrator, SearchPhase,
};
use tracing_subscriber::EnvFilter;

use render::ConsoleNotifier;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum By {
    Title,
    Author,
    Subject,
}

impl From<By> for SearchField {
    fn from(by: By) -> Self {
        match by {
            By::Title => SearchField::Title,
            By::Author => SearchField::Author,
            By::Subject => SearchField::Subject,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "libris", version, about = "Search the Open Library catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog configuration file (TOML or JSON)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search the catalog and print the matching books
    Search(SearchArgs),
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Words to search for
    #[arg(required = true)]
    query: Vec<String>,

    /// Field to match the query against
    #[arg(short, long, value_enum, default_value_t = By::Title)]
    by: By,

    /// Open the detail view of the N-th result (1-based)
    #[arg(short, long, value_name = "N")]
    open: Option<usize>,

    /// Print view models as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };

    match cli.command {
        Command::Search(args) => run_search(config, args).await,
    }
}

async fn run_search(
    config: CatalogConfig,
    args: SearchArgs,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let client = OpenLibraryClient::new(config)?;
    let config = client.config();

    let mut search = SearchOrchestrator::new(ConsoleNotifier::new(args.json));
    let query = args.query.join(" ");
    if !search.submit(&client, &query, args.by.into()).await {
        return Err("Enter a search term".into());
    }

    // The notifier has already reported the failure
    if search.phase() == SearchPhase::Failed {
        return Ok(ExitCode::from(exit_status(search.phase())));
    }

    let cards: Vec<BookCard> = search
        .items()
        .iter()
        .map(|item| BookCard::from_item(item, config))
        .collect();
    let headline = libris_core::headline(search.has_searched(), search.query());

    let detail_view = match args.open {
        Some(n) => {
            let item = n
                .checked_sub(1)
                .and_then(|i| search.item(i))
                .cloned()
                .ok_or_else(|| format!("No result #{} ({} results)", n, search.items().len()))?;
            let mut detail = DetailOrchestrator::new();
            let phase = detail.load(&client, item.clone()).await;
            Some(BookDetailView::new(&item, phase, config))
        }
        None => None,
    };

    if args.json {
        render::print_json(&headline, &cards, detail_view.as_ref())?;
    } else {
        render::print_cards(&headline, &cards);
        if let Some(view) = &detail_view {
            render::print_detail(view);
        }
    }

    Ok(ExitCode::from(exit_status(search.phase())))
}

/// Process status for a finished search: non-zero only when it failed
fn exit_status(phase: SearchPhase) -> u8 {
    match phase {
        SearchPhase::Failed => 1,
        _ => 0,
    }
}

fn init_tracing(verbose: u8) {
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
        .init();
}
