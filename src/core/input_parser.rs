//! Parsing of interactive shell input into typed events.
//!
//! This module provides [`InputParser`] which turns one line typed into the
//! `browse` shell into an [`Event`].
//!
//! # Supported Commands
//! - **Categories**: `c`, `p`, `s`, full names, or `category <name>`
//! - **Paging**: `n` / `next`, `b` / `prev` / `previous`
//! - **Search**: `/<term>` or `search <term>`; a bare `/` or `search` clears
//! - **Detail**: `o <n>` / `open <n>`, `x` / `close`
//! - **Misc**: `h` / `help` / `?`, `q` / `quit` / `exit`

use crate::core::{
    category::Category,
    error::{NavigatorError, Result},
    event::{Direction, Event},
};

pub struct InputParser;

impl InputParser {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Event>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        // Search text keeps its inner spacing
        if let Some(term) = line.strip_prefix('/') {
            return Ok(Some(Event::SearchChanged(term.to_string())));
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let event = match command.to_lowercase().as_str() {
            "n" | "next" => Event::PageRequested(Direction::Next),
            "b" | "prev" | "previous" => Event::PageRequested(Direction::Previous),
            "search" => Event::SearchChanged(rest.to_string()),
            "o" | "open" => Event::ItemOpened(Self::parse_index(rest)?),
            "x" | "close" => Event::DetailClosed,
            "h" | "help" | "?" => Event::Help,
            "q" | "quit" | "exit" => Event::Quit,
            "category" => Event::CategorySelected(rest.parse::<Category>()?),
            _ => match line.parse::<Category>() {
                Ok(category) => Event::CategorySelected(category),
                // A bare number opens that item
                Err(_) if line.chars().all(|c| c.is_ascii_digit()) => {
                    Event::ItemOpened(Self::parse_index(line)?)
                }
                Err(_) => return Err(NavigatorError::unknown_command(line)),
            },
        };

        Ok(Some(event))
    }

    /// Parse a 1-based item index
    pub fn parse_index(input: &str) -> Result<usize> {
        let input = input.trim();
        let index: usize = input
            .parse()
            .map_err(|_| NavigatorError::invalid_number(input))?;
        if index == 0 {
            return Err(NavigatorError::ZeroIndex);
        }
        Ok(index)
    }

    /// Validate a 1-based index against the number of displayed items
    pub fn validate(index: usize, max_index: usize) -> Result<()> {
        if max_index == 0 {
            return Err(NavigatorError::NoItemsDisplayed);
        }
        if index == 0 {
            return Err(NavigatorError::ZeroIndex);
        }
        if index > max_index {
            return Err(NavigatorError::item_out_of_range(index, max_index));
        }
        Ok(())
    }
}
