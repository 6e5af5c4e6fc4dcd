//! Terminal output for cards, the detail view and notices

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use libris_core::{BookCard, BookDetailView, EnrichmentView, Notice, Notifier, Severity};
use serde_json::json;

/// Prints notices to stderr
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    /// A quiet notifier only logs, keeping stdout/stderr clean for `--json`
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        if self.quiet {
            tracing::info!("{}: {}", notice.title(), notice.description());
            return;
        }
        let marker = match notice.severity() {
            Severity::Info => "✓",
            Severity::Destructive => "✗",
        };
        eprintln!("{} {}: {}", marker, notice.title(), notice.description());
    }
}

pub fn print_cards(headline: &str, cards: &[BookCard]) {
    println!("{}", headline);
    if cards.is_empty() {
        println!("No books found. Try adjusting your search terms or search type.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Title", "Authors", "Published", "Subjects"]);

    for (i, card) in cards.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            card.title.clone(),
            card.authors.clone(),
            card.first_publish_year.map(|y| y.to_string()).unwrap_or_default(),
            card.subjects.join(", "),
        ]);
    }

    println!("{table}");
}

pub fn print_detail(view: &BookDetailView) {
    println!();
    println!("{}", view.title);
    println!("  Authors:         {}", view.authors);
    if let Some(year) = view.first_publish_year {
        println!("  First Published: {}", year);
    }
    println!("  Publishers:      {}", view.publishers);
    if let Some(pages) = view.page_count {
        println!("  Pages:           {}", pages);
    }
    println!("  Languages:       {}", view.languages);
    if !view.isbns.is_empty() {
        println!("  ISBN:            {}", view.isbns.join(", "));
    }
    println!("  Cover:           {}", view.cover_url);
    println!("  Open Library:    {}", view.catalog_url);

    match &view.enrichment {
        EnrichmentView::Loading => println!("\n  Loading details..."),
        EnrichmentView::Unavailable => {}
        EnrichmentView::Loaded {
            description,
            first_sentence,
            excerpt,
        } => {
            if let Some(description) = description {
                println!("\nDescription\n  {}", description);
            }
            if let Some(sentence) = first_sentence {
                println!("\nFirst Sentence\n  \"{}\"", sentence);
            }
            if let Some(excerpt) = excerpt {
                println!("\nExcerpt\n  \"{}\"", excerpt);
            }
        }
    }

    if !view.subjects.is_empty() {
        println!("\nSubjects\n  {}", view.subjects.join(" · "));
    }
}

pub fn print_json(
    headline: &str,
    cards: &[BookCard],
    detail: Option<&BookDetailView>,
) -> Result<(), serde_json::Error> {
    let output = json!({
        "headline": headline,
        "results": cards,
        "detail": detail,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
