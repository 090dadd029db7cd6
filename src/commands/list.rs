//! List command implementation.
//!
//! Loads the catalog, applies search and month filter, and prints one page
//! of the transaction table.

use super::models::ListArgs;
use crate::parser::Transaction;
use crate::provider::{CatalogSource, DataProvider, LoadState};
use crate::utils::config::MAX_PAGE_SIZE;
use crate::view::{filter_listing, Page, Pagination, ViewState};
use anyhow::{Context, Result};
use log::info;

const TITLE_WIDTH: usize = 32;
const CATEGORY_WIDTH: usize = 18;

/// Execute the list command
///
/// **Public** - main entry point called from main.rs
pub fn execute_list(args: ListArgs) -> Result<()> {
    let source = CatalogSource::parse(&args.source).context("Invalid catalog source")?;
    let mut provider = DataProvider::new(source);

    if let LoadState::Failed(message) = provider.load() {
        anyhow::bail!("Failed to load catalog: {}", message);
    }

    let view = ViewState::default()
        .with_query(args.search.clone())
        .with_month(args.month)
        .with_page(args.page);

    let rows = filter_listing(provider.transactions(), &view.query, view.month);
    info!("{} transactions match the current filters", rows.len());

    let pagination = Pagination::new(args.page_size);
    let page = pagination.page(&rows, view.page);

    println!("{}", render_table(&page, pagination.page_size()));

    Ok(())
}

/// Render one page of the listing as a text table
///
/// **Public** - separated from printing so it can be tested
pub fn render_table(page: &Page<'_, &Transaction>, page_size: usize) -> String {
    let mut lines = Vec::new();
    let rule = format!(
        "  +{}+{}+{}+{}+{}+",
        "-".repeat(8),
        "-".repeat(TITLE_WIDTH + 2),
        "-".repeat(12),
        "-".repeat(CATEGORY_WIDTH + 2),
        "-".repeat(10)
    );

    lines.push(rule.clone());
    lines.push(format!(
        "  | {:>6} | {:<tw$} | {:>10} | {:<cw$} | {:<8} |",
        "ID",
        "Title",
        "Price",
        "Category",
        "Sold",
        tw = TITLE_WIDTH,
        cw = CATEGORY_WIDTH
    ));
    lines.push(rule.clone());

    if page.items.is_empty() {
        lines.push(format!("  | {:^w$} |", "No transactions found", w = rule.len() - 6));
    }

    for transaction in page.items {
        lines.push(format!(
            "  | {:>6} | {:<tw$} | {:>10} | {:<cw$} | {:<8} |",
            transaction.id,
            truncate(&transaction.title, TITLE_WIDTH),
            format!("$ {}", transaction.price),
            truncate(&transaction.category, CATEGORY_WIDTH),
            if transaction.sold { "Sold" } else { "Not Sold" },
            tw = TITLE_WIDTH,
            cw = CATEGORY_WIDTH
        ));
    }

    lines.push(rule);
    lines.push(format!(
        "  Page {} of {}  ({} matches, {} items per page)",
        page.number, page.total_pages, page.total_items, page_size
    ));

    lines.join("\n")
}

/// Shorten to `width` characters, marking the cut with "..."
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Validate list arguments
///
/// **Public** - can be called before execute_list for early validation
pub fn validate_list_args(args: &ListArgs) -> Result<()> {
    CatalogSource::parse(&args.source).context("Invalid catalog source")?;

    if args.page_size == 0 {
        anyhow::bail!("page_size must be greater than 0");
    }

    if args.page_size > MAX_PAGE_SIZE {
        anyhow::bail!("page_size is too large (max {})", MAX_PAGE_SIZE);
    }

    if args.page == 0 {
        anyhow::bail!("page numbers start at 1");
    }

    Ok(())
}
