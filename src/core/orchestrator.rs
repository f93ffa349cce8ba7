//! Fetch orchestration: the state machine behind paging, category switching
//! and search.
//!
//! [`Orchestrator`] owns the [`SessionState`] and is the only thing that
//! mutates it. It reconciles three loading modes against that one state:
//!
//! - **Single page**: [`Orchestrator::load_page`] replaces the displayed items
//!   and always leaves search mode.
//! - **Aggregation**: [`Orchestrator::ensure_fully_loaded`] walks every page of
//!   the active category once and caches the result for search.
//! - **Filtered display**: [`Orchestrator::search`] filters the cache locally.
//!
//! # Request generations
//! Every top-level operation takes a ticket from a monotonically increasing
//! counter before it fetches. A response is applied only if its ticket is still
//! the latest one issued; anything older is discarded. The split
//! [`Orchestrator::begin_load`] / [`Orchestrator::complete_load`] pair exposes
//! this so a driver that interleaves requests still gets last-issued-wins.

use crate::core::{
    category::{Category, CategoryRegistry},
    error::{NavigatorError, Result},
    event::{Direction, Event},
    input_parser::InputParser,
    page::{Item, Page},
    projection::{project_detail, DetailView},
    source::PageSource,
    state::SessionState,
    view::ViewProjector,
};

/// Default upper bound on pages walked by one aggregation
pub const DEFAULT_MAX_AGGREGATE_PAGES: usize = 100;

/// A page request that has been issued but not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    generation: u64,
    url: String,
}

impl PendingLoad {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether a response reached the session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
}

/// Result of [`Orchestrator::ensure_fully_loaded`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateOutcome {
    /// The cache was already populated; no requests were made
    Cached,
    Loaded { pages: usize, items: usize },
    /// The walk failed part way; the cache holds the displayed items instead
    Degraded { message: String },
    Stale,
}

pub struct Orchestrator<S: PageSource, V: ViewProjector> {
    source: S,
    view: V,
    registry: CategoryRegistry,
    state: SessionState,
    generation: u64,
    max_aggregate_pages: usize,
}

impl<S: PageSource, V: ViewProjector> Orchestrator<S, V> {
    pub fn new(source: S, view: V, registry: CategoryRegistry) -> Self {
        Self {
            source,
            view,
            registry,
            state: SessionState::new(),
            generation: 0,
            max_aggregate_pages: DEFAULT_MAX_AGGREGATE_PAGES,
        }
    }

    pub fn with_max_aggregate_pages(mut self, max_pages: usize) -> Self {
        self.max_aggregate_pages = max_pages.max(1);
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Handle one user event to completion.
    ///
    /// `Help` and `Quit` belong to the shell and are ignored here.
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        match event {
            Event::CategorySelected(category) => self.select_category(category).map(|_| ()),
            Event::PageRequested(Direction::Previous) => self.go_prev().map(|_| ()),
            Event::PageRequested(Direction::Next) => self.go_next().map(|_| ()),
            Event::SearchChanged(term) => self.search(&term).map(|_| ()),
            Event::ItemOpened(index) => self.open_detail(index).map(|_| ()),
            Event::DetailClosed => {
                self.close_detail();
                Ok(())
            }
            Event::Help | Event::Quit => Ok(()),
        }
    }

    // ========================================
    // Single-page loading
    // ========================================

    /// Issue a page request and take a generation ticket for it
    pub fn begin_load(&mut self, url: impl Into<String>) -> PendingLoad {
        let generation = self.next_generation();
        let url = url.into();
        log::debug!("Load #{generation}: {url}");
        PendingLoad { generation, url }
    }

    /// Apply the response of a request issued by [`Self::begin_load`].
    ///
    /// A failed load replaces the view with the error panel and returns the
    /// error. Responses to superseded requests are dropped, failures included.
    pub fn complete_load(&mut self, pending: PendingLoad, result: Result<Page>) -> Result<Applied> {
        if !self.is_current(pending.generation) {
            log::debug!(
                "Discarding stale response #{} for {} (latest is #{})",
                pending.generation,
                pending.url,
                self.generation
            );
            return Ok(Applied::Stale);
        }

        match result {
            Ok(page) => {
                log::debug!(
                    "Loaded {} page {} ({} items)",
                    self.state.active_category,
                    page.page_number,
                    page.items.len()
                );
                self.state.apply_page(page);
                self.render_page();
                Ok(Applied::Current)
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", pending.url);
                let message = e.to_string();
                self.state.fail(message.clone());
                self.view.render_error(&message);
                Err(e)
            }
        }
    }

    pub fn load_page(&mut self, url: &str) -> Result<Applied> {
        let pending = self.begin_load(url);
        let result = self.source.fetch_page(pending.url());
        self.complete_load(pending, result)
    }

    fn render_page(&mut self) {
        self.view.render_list(
            &self.state.displayed_items,
            self.state.active_category,
            self.state.total_count,
        );
        self.view.render_pagination(
            self.state.page_number,
            self.state.has_prev(),
            self.state.has_next(),
            false,
        );
    }

    // ========================================
    // Category switching and paging
    // ========================================

    /// Switch category and load its first page. Reselecting reloads page 1.
    pub fn select_category(&mut self, category: Category) -> Result<Applied> {
        log::debug!("Selecting {category}");
        self.state.reset_for(category);
        let url = self.registry.endpoint_for(category);
        self.load_page(&url)
    }

    /// Make a category active without loading anything
    pub fn activate(&mut self, category: Category) {
        self.next_generation();
        self.state.reset_for(category);
    }

    /// Switch category and jump straight to one of its pages
    pub fn open_page(&mut self, category: Category, page: u32) -> Result<Applied> {
        self.state.reset_for(category);
        let url = self.registry.page_url(category, page);
        self.load_page(&url)
    }

    pub fn go_prev(&mut self) -> Result<Applied> {
        self.go(Direction::Previous)
    }

    pub fn go_next(&mut self) -> Result<Applied> {
        self.go(Direction::Next)
    }

    /// Follow the previous/next link. A missing link is the disabled control:
    /// nothing is fetched and the state is untouched. The controls are hidden
    /// while searching, so paging is refused then too.
    fn go(&mut self, direction: Direction) -> Result<Applied> {
        if self.state.is_searching() {
            return Err(NavigatorError::PagingWhileSearching);
        }
        let link = match direction {
            Direction::Previous => self.state.prev_page_url.clone(),
            Direction::Next => self.state.next_page_url.clone(),
        };
        let url = link.ok_or_else(|| NavigatorError::no_such_page(direction))?;
        self.load_page(&url)
    }

    // ========================================
    // Aggregation and search
    // ========================================

    /// Populate the search cache with every page of the active category.
    /// A no-op once the cache is populated.
    pub fn ensure_fully_loaded(&mut self) -> AggregateOutcome {
        let generation = self.next_generation();
        self.aggregate(generation)
    }

    fn aggregate(&mut self, generation: u64) -> AggregateOutcome {
        if !self.state.all_items_cache().is_empty() {
            log::debug!(
                "Search cache hit ({} items)",
                self.state.all_items_cache().len()
            );
            return AggregateOutcome::Cached;
        }

        let category = self.state.active_category;
        let mut url = Some(self.registry.endpoint_for(category));
        let mut accumulated: Vec<Item> = Vec::new();
        let mut pages = 0;

        log::info!("Loading all {category} for search");

        let failure = loop {
            let Some(current) = url.take() else {
                break None;
            };
            if pages == self.max_aggregate_pages {
                break Some(NavigatorError::PageLimitReached { pages });
            }
            match self.source.fetch_page(&current) {
                Ok(page) => {
                    pages += 1;
                    accumulated.extend(page.items);
                    url = page.next;
                }
                Err(e) => break Some(e),
            }
        };

        if !self.is_current(generation) {
            return AggregateOutcome::Stale;
        }

        match failure {
            None => {
                let items = accumulated.len();
                log::info!("Aggregated {items} {category} from {pages} pages");
                self.state.store_cache(accumulated);
                AggregateOutcome::Loaded { pages, items }
            }
            Some(e) => {
                let message = e.to_string();
                log::warn!(
                    "Aggregation of {category} stopped after {pages} pages: {message}; searching the displayed items instead"
                );
                self.view.render_error(&message);
                let fallback = self.state.displayed_items.clone();
                self.state.store_cache(fallback);
                AggregateOutcome::Degraded { message }
            }
        }
    }

    /// Apply one search input change.
    ///
    /// The raw text is trimmed and lowercased. An empty term leaves search
    /// mode and reloads the first page of the active category. Any other term
    /// filters the aggregated category by name; only the first term of a
    /// search session touches the network.
    pub fn search(&mut self, raw: &str) -> Result<Applied> {
        let term = raw.trim().to_lowercase();

        if term.is_empty() {
            log::debug!("Search cleared");
            self.state.clear_search();
            let url = self.registry.endpoint_for(self.state.active_category);
            return self.load_page(&url);
        }

        let generation = self.next_generation();
        self.state.set_search_term(term);
        if self.aggregate(generation) == AggregateOutcome::Stale {
            return Ok(Applied::Stale);
        }

        self.state.apply_filter();
        log::debug!(
            "Search \"{}\" matched {} of {}",
            self.state.search_term(),
            self.state.displayed_items.len(),
            self.state.all_items_cache().len()
        );

        self.view.render_list(
            &self.state.displayed_items,
            self.state.active_category,
            None,
        );
        self.view.render_search_summary(
            self.state.search_term(),
            self.state.displayed_items.len(),
        );
        self.view.render_pagination(self.state.page_number, false, false, true);
        Ok(Applied::Current)
    }

    // ========================================
    // Detail overlay
    // ========================================

    /// Open the detail overlay for a 1-based index into the displayed items
    pub fn open_detail(&mut self, index: usize) -> Result<DetailView> {
        InputParser::validate(index, self.state.displayed_items.len())?;
        self.state.open_detail = Some(index - 1);
        let item = &self.state.displayed_items[index - 1];
        let detail = project_detail(item, self.state.active_category);
        self.view.render_detail(&detail);
        Ok(detail)
    }

    pub fn close_detail(&mut self) {
        if self.state.open_detail.take().is_some() {
            self.view.render_detail_closed();
        }
    }
}
