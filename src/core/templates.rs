//! Template system for consistent output formatting.
//!
//! This module provides the single-pass template renderer used by the terminal
//! view for list cards, paging controls, the search header and detail panels.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output sections
//! - [`TemplateContext`]: Context data for template rendering
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Main rendering function with colors
//! - [`render_template_plain`]: Plain text rendering for testing
//! - [`strip_ansi_codes`]: Utility for removing color codes
//!
//! # Template Categories
//! - **Headers**: Category title with total count, search results header
//! - **Cards**: Numbered item title and its summary lines
//! - **Controls**: Previous/next paging line with the page number
//! - **Detail**: Item title, section headings and labelled fields

use crate::core::{
    category::Category,
    colors::{get_colored_title, get_control_label},
};
use colored::*;

/// Template definitions for all output formatting
pub struct Templates {
    // Header templates
    pub header_category: &'static str,
    pub header_category_total: &'static str,
    pub header_search: &'static str,
    pub empty_list: &'static str,

    // Card templates
    pub card_title: &'static str,
    pub card_line: &'static str,

    // Paging controls
    pub pagination: &'static str,

    // Detail templates
    pub detail_title: &'static str,
    pub detail_section: &'static str,
    pub detail_field: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    header_category: "{title}",
    header_category_total: "{title} · {count} total",
    header_search: "{count} result(s) for \"{term}\"",
    empty_list: "   No results",
    card_title: "[{n}] {title}",
    card_line: "     {label}: {value}",
    pagination: "{prev}   Page {page}   {next}",
    detail_title: "┃ {title}",
    detail_section: "┃ ➤ {title}",
    detail_field: "┃     {label}: {value}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub title: Option<&'a str>,
    pub label: Option<&'a str>,
    pub value: Option<&'a str>,
    pub term: Option<&'a str>,
    pub n: Option<usize>,
    pub count: Option<u64>,
    pub page: Option<u32>,
    pub has_prev: Option<bool>,
    pub has_next: Option<bool>,
    pub category: Option<Category>, // for accent colors
}

const PREV_LABEL: &str = "[b] prev";
const NEXT_LABEL: &str = "[n] next";

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let estimated_capacity = template.len()
        + context.title.map_or(0, |s| s.len())
        + context.label.map_or(0, |s| s.len())
        + context.value.map_or(0, |s| s.len())
        + context.term.map_or(0, |s| s.len())
        + 64; // numbers and control labels

    let mut result = String::with_capacity(estimated_capacity);
    render_template_single_pass(template, context, &mut result);
    apply_colors(&result, template, context)
}

/// Single-pass placeholder substitution
fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    use std::fmt::Write;

    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            // No closing brace found, treat as literal
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        match placeholder.as_str() {
            "title" => output.push_str(context.title.unwrap_or_default()),
            "label" => output.push_str(context.label.unwrap_or_default()),
            "value" => output.push_str(context.value.unwrap_or_default()),
            "term" => output.push_str(context.term.unwrap_or_default()),
            "n" => {
                if let Some(n) = context.n {
                    let _ = write!(output, "{n}");
                }
            }
            "count" => {
                if let Some(count) = context.count {
                    let _ = write!(output, "{count}");
                }
            }
            "page" => {
                if let Some(page) = context.page {
                    let _ = write!(output, "{page}");
                }
            }
            "prev" => output.push_str(PREV_LABEL),
            "next" => output.push_str(NEXT_LABEL),
            _ => {
                // Unknown placeholder, keep as-is
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
        }
    }
}

/// Color the rendered text according to the template it came from
fn apply_colors(text: &str, template: &str, context: &TemplateContext) -> String {
    use std::fmt::Write;

    let mut result = String::with_capacity(text.len() + 64);
    let category = context.category.unwrap_or_default();

    match template {
        t if t == TEMPLATES.header_category || t == TEMPLATES.header_category_total => {
            let title = context.title.unwrap_or_default();
            let _ = write!(result, "{}", get_colored_title(category, title));
            result.push_str(&text[title.len().min(text.len())..].bright_black().to_string());
        }

        t if t == TEMPLATES.header_search => {
            let _ = write!(
                result,
                "{} {} \"{}\"",
                context.count.unwrap_or(0).to_string().white().bold(),
                "result(s) for".white(),
                context.term.unwrap_or_default().yellow()
            );
        }

        t if t == TEMPLATES.empty_list => {
            let _ = write!(result, "{}", text.bright_black());
        }

        t if t == TEMPLATES.card_title => {
            if let Some(n) = context.n {
                let _ = write!(
                    result,
                    "{}{}{} ",
                    "[".bright_black(),
                    n.to_string().white(),
                    "]".bright_black()
                );
            }
            let _ = write!(
                result,
                "{}",
                get_colored_title(category, context.title.unwrap_or_default())
            );
        }

        t if t == TEMPLATES.card_line || t == TEMPLATES.detail_field => {
            let prefix = if t == TEMPLATES.card_line { "     " } else { "┃     " };
            let _ = write!(
                result,
                "{}{}{} {}",
                prefix.bright_black(),
                context.label.unwrap_or_default().bright_black(),
                ":".bright_black(),
                context.value.unwrap_or_default().white()
            );
        }

        t if t == TEMPLATES.pagination => {
            let _ = write!(
                result,
                "{}   {} {}   {}",
                get_control_label(PREV_LABEL, context.has_prev.unwrap_or(false)),
                "Page".white(),
                context.page.unwrap_or(1).to_string().white().bold(),
                get_control_label(NEXT_LABEL, context.has_next.unwrap_or(false))
            );
        }

        t if t == TEMPLATES.detail_title => {
            let _ = write!(
                result,
                "{} {}",
                "┃".bright_black(),
                get_colored_title(category, context.title.unwrap_or_default())
            );
        }

        t if t == TEMPLATES.detail_section => {
            let _ = write!(
                result,
                "{} {} {}",
                "┃".bright_black(),
                "➤".blue(),
                context.title.unwrap_or_default().blue()
            );
        }

        // Default: return as-is
        _ => result.push_str(text),
    }

    result
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break; // End of escape sequence
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}
