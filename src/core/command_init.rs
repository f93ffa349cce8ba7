//! Centralized initialization shared by all commands.
//!
//! Every command needs the same setup before it can talk to the catalog:
//! load the config, apply the `--base-url` override, validate, and wire an
//! [`Orchestrator`] to the HTTP source and a view.
//!
//! # Initialization Steps
//! 1. **Config loading**: Config file, then `SWAPI_BASE_URL`, then `--base-url`
//! 2. **Validation**: Base URL must parse, limits must be positive
//! 3. **Wiring**: HTTP client, endpoint registry, aggregation page guard

use crate::core::{
    category::CategoryRegistry,
    config::NavigatorConfig,
    error::Result,
    orchestrator::Orchestrator,
    source::HttpPageSource,
    view::{TerminalView, ViewProjector},
};
use std::io::Stdout;

/// Orchestrator wired for the terminal
pub type Navigator = Orchestrator<HttpPageSource, TerminalView<Stdout>>;

pub struct CommandInit;

impl CommandInit {
    /// Load and validate the effective configuration
    pub fn load_config(base_url: Option<String>) -> Result<NavigatorConfig> {
        let config = NavigatorConfig::load()?.with_base_url(base_url);
        config.validate()?;
        log::debug!(
            "Using base URL {} (timeout {}s, max {} pages per search)",
            config.base_url,
            config.timeout_secs,
            config.max_aggregate_pages
        );
        Ok(config)
    }

    /// Build an orchestrator over HTTP for any view
    pub fn build<V: ViewProjector>(
        config: &NavigatorConfig,
        view: V,
    ) -> Result<Orchestrator<HttpPageSource, V>> {
        let source = HttpPageSource::new(config)?;
        let registry = CategoryRegistry::new(config.base_url.as_str());
        Ok(Orchestrator::new(source, view, registry)
            .with_max_aggregate_pages(config.max_aggregate_pages))
    }

    /// Everything a terminal command needs
    pub fn initialize(base_url: Option<String>) -> Result<Navigator> {
        let config = Self::load_config(base_url)?;
        Self::build(&config, TerminalView::stdout())
    }
}
