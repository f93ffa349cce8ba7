//! Unified color system for consistent catalog visualization.
//!
//! Each category has one accent color used for its header and card titles,
//! and paging controls are dimmed when disabled.
//!
//! # Color Scheme
//! - **Characters**: Yellow
//! - **Planets**: Green
//! - **Starships**: Cyan
//! - **Disabled controls**: Bright black

use crate::core::category::Category;
use colored::*;

/// Returns a closure that applies the accent color of a category
pub fn get_category_color_style(category: Category) -> Box<dyn Fn(&str) -> ColoredString> {
    match category {
        Category::Characters => Box::new(|text: &str| text.yellow()),
        Category::Planets => Box::new(|text: &str| text.green()),
        Category::Starships => Box::new(|text: &str| text.cyan()),
    }
}

/// Category-colored text
pub fn get_colored_title(category: Category, text: &str) -> ColoredString {
    let color_fn = get_category_color_style(category);
    color_fn(text).bold()
}

/// Paging control label, dimmed and struck through when disabled
pub fn get_control_label(label: &str, enabled: bool) -> ColoredString {
    if enabled {
        label.blue()
    } else {
        label.bright_black().strikethrough()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::templates::strip_ansi_codes;

    #[test]
    fn test_colors_keep_text() {
        for category in Category::ALL {
            let colored = get_colored_title(category, category.as_str()).to_string();
            assert_eq!(strip_ansi_codes(&colored), category.as_str());
        }
    }

    #[test]
    fn test_control_label_keeps_text() {
        assert_eq!(strip_ansi_codes(&get_control_label("[b] prev", true).to_string()), "[b] prev");
        assert_eq!(strip_ansi_codes(&get_control_label("[b] prev", false).to_string()), "[b] prev");
    }
}
