//! Core functionality for the swapi-navigator tool.
//!
//! This module provides the fundamental building blocks for browsing the
//! catalog: the remote page source, session state, the fetch orchestrator,
//! error handling, and UI components.

pub mod category;
pub mod colors;
pub mod command_init;
pub mod config;
pub mod dirs;
pub mod error;
pub mod event;
pub mod input_parser;
pub mod orchestrator;
pub mod output;
pub mod page;
pub mod projection;
pub mod source;
pub mod state;
pub mod templates;
pub mod view;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{NavigatorError, Result};

// === Catalog model ===
// Categories, their endpoints, and the decoded page envelope
pub use category::{Category, CategoryRegistry};
pub use page::{Item, Page, PageEnvelope};

// === Remote source ===
// Seam between the orchestrator and the network
pub use source::{HttpPageSource, PageSource};

// === State management ===
pub use state::SessionState;

// === Orchestration ===
// State machine over single-page loads, aggregation and search
pub use orchestrator::{AggregateOutcome, Applied, Orchestrator, PendingLoad};

// === Input ===
// Typed events and the parser for interactive shell input
pub use event::{Direction, Event};
pub use input_parser::InputParser;

// === Command initialization ===
pub use command_init::{CommandInit, Navigator};

// === Configuration ===
pub use config::NavigatorConfig;

// === Views ===
// Detail projection and the rendering boundary
pub use projection::{project_card, project_detail, Card, DetailView};
pub use view::{TerminalView, ViewProjector};

// === UI templates ===
// Template system for consistent output formatting with colors
pub use templates::{
    render_template, render_template_plain, strip_ansi_codes, TemplateContext, Templates, TEMPLATES,
};

// === Color system ===
pub use colors::{get_category_color_style, get_colored_title, get_control_label};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_error_with_structured_usage, print_unknown_category};
