//! Type-safe catalog category enumeration and endpoint registry.
//!
//! This module defines [`Category`], the fixed set of SWAPI collections the
//! navigator can browse, and [`CategoryRegistry`] which maps each category to
//! its collection endpoint under a configurable base URL.
//!
//! # Public API
//! - [`Category`]: Characters, planets and starships
//! - [`CategoryRegistry`]: Total lookup from category to endpoint URL
//!
//! # Key Features
//! - **Type safety**: No string comparisons when dispatching on the active category
//! - **Lenient parsing**: Accepts display names, endpoint segments and one-letter shortcuts
//! - **Canonical URLs**: Endpoints always end with a trailing slash, as SWAPI serves them

use crate::core::error::{NavigatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default SWAPI base URL
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// People collection (`/people/`)
    #[default]
    Characters,
    /// Planets collection (`/planets/`)
    Planets,
    /// Starships collection (`/starships/`)
    Starships,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 3] = [Category::Characters, Category::Planets, Category::Starships];

    /// Display title used in headers
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Characters => "Characters",
            Category::Planets => "Planets",
            Category::Starships => "Starships",
        }
    }

    /// Path segment of the collection endpoint
    pub fn endpoint_segment(&self) -> &'static str {
        match self {
            Category::Characters => "people",
            Category::Planets => "planets",
            Category::Starships => "starships",
        }
    }

    /// Single-letter shortcut used by the interactive shell
    pub fn shortcut(&self) -> char {
        match self {
            Category::Characters => 'c',
            Category::Planets => 'p',
            Category::Starships => 's',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = NavigatorError;

    fn from_str(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| {
                normalized == category.as_str().to_lowercase()
                    || normalized == category.endpoint_segment()
                    || (normalized.len() == 1 && normalized.starts_with(category.shortcut()))
            })
            .ok_or_else(|| NavigatorError::unknown_category(input.trim()))
    }
}

/// Maps each [`Category`] to its collection endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    base_url: String,
}

impl CategoryRegistry {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint of the first page of a category
    pub fn endpoint_for(&self, category: Category) -> String {
        format!("{}/{}/", self.base_url, category.endpoint_segment())
    }

    /// URL of page `page` of a category; page 1 is the bare endpoint
    pub fn page_url(&self, category: Category, page: u32) -> String {
        match page {
            0 | 1 => self.endpoint_for(category),
            n => format!("{}?page={n}", self.endpoint_for(category)),
        }
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::Characters.as_str(), "Characters");
        assert_eq!(Category::Planets.as_str(), "Planets");
        assert_eq!(Category::Starships.as_str(), "Starships");
    }

    #[test]
    fn test_category_from_str() -> Result<()> {
        assert_eq!("characters".parse::<Category>()?, Category::Characters);
        assert_eq!("People".parse::<Category>()?, Category::Characters);
        assert_eq!("c".parse::<Category>()?, Category::Characters);
        assert_eq!(" PLANETS ".parse::<Category>()?, Category::Planets);
        assert_eq!("p".parse::<Category>()?, Category::Planets);
        assert_eq!("starships".parse::<Category>()?, Category::Starships);
        assert_eq!("S".parse::<Category>()?, Category::Starships);
        Ok(())
    }

    #[test]
    fn test_category_from_str_rejects_unknown() {
        assert!("vehicles".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
        assert!("x".parse::<Category>().is_err());
    }

    #[test]
    fn test_default_category_is_characters() {
        assert_eq!(Category::default(), Category::Characters);
    }

    #[test]
    fn test_endpoint_for_every_category() {
        let registry = CategoryRegistry::default();
        assert_eq!(
            registry.endpoint_for(Category::Characters),
            "https://swapi.dev/api/people/"
        );
        assert_eq!(
            registry.endpoint_for(Category::Planets),
            "https://swapi.dev/api/planets/"
        );
        assert_eq!(
            registry.endpoint_for(Category::Starships),
            "https://swapi.dev/api/starships/"
        );
    }

    #[test]
    fn test_registry_trims_trailing_slash() {
        let registry = CategoryRegistry::new("http://127.0.0.1:8080/api/");
        assert_eq!(registry.base_url(), "http://127.0.0.1:8080/api");
        assert_eq!(
            registry.endpoint_for(Category::Planets),
            "http://127.0.0.1:8080/api/planets/"
        );
    }

    #[test]
    fn test_page_url() {
        let registry = CategoryRegistry::default();
        assert_eq!(
            registry.page_url(Category::Characters, 1),
            "https://swapi.dev/api/people/"
        );
        assert_eq!(
            registry.page_url(Category::Characters, 3),
            "https://swapi.dev/api/people/?page=3"
        );
    }
}
