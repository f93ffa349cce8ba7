//! SWAPI Navigator - A terminal browser for the Star Wars API catalog.
//!
//! This library provides the core functionality for swapi-navigator: paging
//! through characters, planets and starships, searching a whole category by
//! name, and projecting items into detail panels. It is designed around one
//! state machine, the [`Orchestrator`], which owns the session state and
//! talks to the network and the terminal only through traits.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Catalog categories and their endpoints
//! - The remote page source and page envelope decoding
//! - Session state and the fetch orchestrator
//! - Input parsing into typed events
//! - Error handling and result types
//! - UI templates and color system

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Orchestration
    AggregateOutcome,
    Applied,
    // Catalog model
    Category,
    CategoryRegistry,
    // Command initialization
    CommandInit,
    DetailView,
    Direction,
    // Input
    Event,
    HttpPageSource,
    InputParser,
    Item,
    // Configuration
    NavigatorConfig,
    // Error handling
    NavigatorError,
    Orchestrator,
    Page,
    PageSource,
    Result,
    SessionState,

    // UI and formatting
    TemplateContext,
    Templates,
    TerminalView,
    ViewProjector,
    TEMPLATES,
};
