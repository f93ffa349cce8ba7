//! Session state of the navigator.
//!
//! [`SessionState`] is the single mutable record behind the view: which
//! category is active, which page is loaded, what is displayed, and whether a
//! search is running. It is owned by the orchestrator and only ever handed
//! out by shared reference.
//!
//! # Invariants
//! - `is_searching()` is true iff the search term is non-empty
//! - the aggregated cache is cleared whenever the category changes or a
//!   regular page load succeeds
//! - `page_number` always matches the `page` parameter of `current_page_url`
//! - while searching, `displayed_items` is the name-filtered cache

use crate::core::{category::Category, page::{Item, Page}};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub active_category: Category,
    pub displayed_items: Vec<Item>,
    pub current_page_url: String,
    pub prev_page_url: Option<String>,
    pub next_page_url: Option<String>,
    pub page_number: u32,
    pub total_count: Option<u64>,
    search_term: String,
    all_items_cache: Vec<Item>,
    /// Index into `displayed_items` of the item shown in the detail overlay
    pub open_detail: Option<usize>,
    /// Message of the fatal error panel, if it is showing
    pub failed: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            page_number: 1,
            ..Self::default()
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn all_items_cache(&self) -> &[Item] {
        &self.all_items_cache
    }

    pub fn has_prev(&self) -> bool {
        self.prev_page_url.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next_page_url.is_some()
    }

    /// Switch category, dropping all paging and search state
    pub fn reset_for(&mut self, category: Category) {
        self.active_category = category;
        self.clear_search();
        self.open_detail = None;
    }

    /// Install a freshly fetched page. Always leaves search mode.
    pub fn apply_page(&mut self, page: Page) {
        self.displayed_items = page.items;
        self.current_page_url = page.url;
        self.prev_page_url = page.previous;
        self.next_page_url = page.next;
        self.page_number = page.page_number;
        self.total_count = page.count;
        self.open_detail = None;
        self.failed = None;
        self.clear_search();
    }

    /// Replace the view with the error panel. Leaves search mode.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.clear_search();
        self.displayed_items.clear();
        self.prev_page_url = None;
        self.next_page_url = None;
        self.open_detail = None;
        self.failed = Some(message.into());
    }

    /// Enter search mode with an already normalized term
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.all_items_cache.clear();
    }

    pub fn store_cache(&mut self, items: Vec<Item>) {
        self.all_items_cache = items;
    }

    /// Show the cache entries whose name contains the search term
    pub fn apply_filter(&mut self) {
        self.displayed_items = filter_by_name(&self.all_items_cache, &self.search_term);
        self.open_detail = None;
    }

    pub fn detail_item(&self) -> Option<&Item> {
        self.open_detail.and_then(|i| self.displayed_items.get(i))
    }
}

/// Case-insensitive substring filter over the `name` field, order preserved
pub fn filter_by_name(items: &[Item], term: &str) -> Vec<Item> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.name_contains(&needle))
        .cloned()
        .collect()
}
