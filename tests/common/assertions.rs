//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating swapi-navigator command output,
//! error panels, and paging controls.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the error panel
pub fn has_error_panel() -> impl Predicate<str> {
    predicates::str::contains("✕ Error:")
}

/// Creates a predicate that checks for a numbered card
pub fn has_card(index: usize, title: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{index}] {title}"))
}

/// Creates a predicate that checks for the category header with total
pub fn has_header(category: &str, total: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("{category} · {total} total"))
}

/// Creates a predicate that checks for the paging line of a page
pub fn has_page(page: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("Page {page}"))
}

/// Creates a predicate that checks for the search results header
pub fn has_search_summary(count: usize, term: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{count} result(s) for \"{term}\""))
}

/// Creates a predicate that checks for a detail field line
pub fn has_detail_field(label: &str, value: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("┃     {label}: {value}"))
}
