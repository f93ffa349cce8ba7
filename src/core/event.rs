//! Typed user events handled by the orchestrator.
//!
//! Every user interaction becomes one [`Event`] which is handled to completion
//! before the next one is read.

use crate::core::category::Category;
use std::fmt;

/// Paging direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Previous => "previous",
            Direction::Next => "next",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CategorySelected(Category),
    PageRequested(Direction),
    /// Raw search text; normalization happens in the orchestrator
    SearchChanged(String),
    /// 1-based index into the displayed items
    ItemOpened(usize),
    DetailClosed,
    Help,
    Quit,
}
