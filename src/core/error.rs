//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`NavigatorError`] which covers every failure mode of
//! swapi-navigator. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the common failure scenarios.
//!
//! # Public API
//! - [`NavigatorError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, NavigatorError>`
//!
//! # Error Categories
//! - **Transport**: HTTP client failures, non-success status codes
//! - **Decoding**: Malformed JSON or page envelopes, invalid URLs
//! - **Navigation**: Missing previous/next page, item index out of range
//! - **Input**: Unknown categories and commands typed by the user
//! - **Configuration**: Config file I/O and parsing

use std::path::PathBuf;
use thiserror::Error;

use crate::core::event::Direction;

/// Domain-specific error types for swapi-navigator
#[derive(Error, Debug)]
pub enum NavigatorError {
    // Transport errors
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed: {status} {reason}")]
    BadStatus {
        url: String,
        status: u16,
        reason: String,
    },

    // Decoding errors
    #[error("Invalid page from {url}: {source}")]
    InvalidPage {
        url: String,
        source: serde_json::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Navigation errors
    #[error("There is no {direction} page")]
    NoSuchPage { direction: Direction },

    #[error("Paging is disabled while searching; clear the search with '/' first")]
    PagingWhileSearching,

    #[error("Item {index} is out of range (1-{max} available)")]
    ItemOutOfRange { index: usize, max: usize },

    #[error("No items are displayed")]
    NoItemsDisplayed,

    #[error("Item index must be positive (got 0)")]
    ZeroIndex,

    #[error("Aggregation stopped after {pages} pages; the source never ran out of next links")]
    PageLimitReached { pages: usize },

    // Input errors
    #[error("Unknown category: '{input}'. Use characters, planets or starships")]
    UnknownCategory { input: String },

    #[error("Unknown command: '{input}'. Type 'help' for a list of commands")]
    UnknownCommand { input: String },

    #[error("Invalid number: '{number}'")]
    InvalidNumber { number: String },

    // Configuration errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Convenience type alias for Results using NavigatorError
pub type Result<T> = std::result::Result<T, NavigatorError>;

impl NavigatorError {
    /// Create a bad status error for a response
    pub fn bad_status(url: impl Into<String>, status: u16, reason: impl Into<String>) -> Self {
        Self::BadStatus {
            url: url.into(),
            status,
            reason: reason.into(),
        }
    }

    /// Create an invalid page error
    pub fn invalid_page(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidPage {
            url: url.into(),
            source,
        }
    }

    /// Create a no such page error
    pub fn no_such_page(direction: Direction) -> Self {
        Self::NoSuchPage { direction }
    }

    /// Create an item out of range error
    pub fn item_out_of_range(index: usize, max: usize) -> Self {
        Self::ItemOutOfRange { index, max }
    }

    /// Create an unknown category error
    pub fn unknown_category(input: impl Into<String>) -> Self {
        Self::UnknownCategory {
            input: input.into(),
        }
    }

    /// Create an unknown command error
    pub fn unknown_command(input: impl Into<String>) -> Self {
        Self::UnknownCommand {
            input: input.into(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(number: impl Into<String>) -> Self {
        Self::InvalidNumber {
            number: number.into(),
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a generic configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Failures of a page fetch. These have already been shown in the
    /// error panel by the time they reach a command.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::BadStatus { .. } | Self::InvalidPage { .. }
        )
    }
}
