//! Rendering boundary between the orchestrator and the terminal.
//!
//! The orchestrator never reads anything back from the view; it only calls
//! the [`ViewProjector`] methods after each state transition.
//! [`TerminalView`] renders through the template system into any writer.

use crate::core::{
    category::Category,
    page::Item,
    projection::{project_card, DetailView},
    templates::{render_template, TemplateContext, TEMPLATES},
};
use colored::*;
use std::io::Write;

pub trait ViewProjector {
    fn render_list(&mut self, items: &[Item], category: Category, total: Option<u64>);

    /// Paging controls. Hidden while a search is active.
    fn render_pagination(&mut self, page_number: u32, has_prev: bool, has_next: bool, search_active: bool);

    /// Search results header, shown instead of the paging controls
    fn render_search_summary(&mut self, term: &str, match_count: usize);

    fn render_detail(&mut self, detail: &DetailView);

    fn render_detail_closed(&mut self);

    /// Fatal error panel
    fn render_error(&mut self, message: &str);
}

pub struct TerminalView<W: Write> {
    out: W,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            log::warn!("Failed to write to terminal: {e}");
        }
    }

    pub fn render_help(&mut self) {
        self.emit("");
        self.emit(&format!("{}", "Commands:".blue()));
        for (keys, description) in HELP {
            let keys = format!("{keys:<22}");
            self.emit(&format!("  {} {}", keys.white(), description.bright_black()));
        }
        self.emit("");
    }

    /// Non-fatal message, such as a rejected command
    pub fn render_notice(&mut self, message: &str) {
        self.emit(&format!("{} {}", "!".yellow(), message.white()));
    }

    pub fn render_prompt(&mut self, category: Category, search_term: &str) {
        let prompt = if search_term.is_empty() {
            format!("{}> ", category.as_str().to_lowercase())
        } else {
            format!("{}/{}> ", category.as_str().to_lowercase(), search_term)
        };
        if let Err(e) = write!(self.out, "{}", prompt.blue()).and_then(|_| self.out.flush()) {
            log::warn!("Failed to write prompt: {e}");
        }
    }
}

const HELP: &[(&str, &str)] = &[
    ("c | p | s", "Show characters, planets or starships"),
    ("n | next", "Next page"),
    ("b | prev", "Previous page"),
    ("/<term>", "Search the whole category by name"),
    ("/", "Clear the search"),
    ("o <n> | <n>", "Open details of item n"),
    ("x | close", "Close the details"),
    ("h | help", "Show this help"),
    ("q | quit", "Quit"),
];

impl<W: Write> ViewProjector for TerminalView<W> {
    fn render_list(&mut self, items: &[Item], category: Category, total: Option<u64>) {
        let header = TemplateContext {
            title: Some(category.as_str()),
            count: total,
            category: Some(category),
            ..Default::default()
        };
        let template = if total.is_some() {
            TEMPLATES.header_category_total
        } else {
            TEMPLATES.header_category
        };
        self.emit("");
        self.emit(&render_template(template, &header));
        self.emit("");

        if items.is_empty() {
            self.emit(&render_template(TEMPLATES.empty_list, &TemplateContext::default()));
            return;
        }

        for (i, item) in items.iter().enumerate() {
            let card = project_card(item, category);
            let title = TemplateContext {
                title: Some(&card.title),
                n: Some(i + 1),
                category: Some(category),
                ..Default::default()
            };
            self.emit(&render_template(TEMPLATES.card_title, &title));
            for line in &card.lines {
                let context = TemplateContext {
                    label: Some(&line.label),
                    value: Some(&line.value),
                    ..Default::default()
                };
                self.emit(&render_template(TEMPLATES.card_line, &context));
            }
        }
    }

    fn render_pagination(&mut self, page_number: u32, has_prev: bool, has_next: bool, search_active: bool) {
        if search_active {
            return;
        }
        let context = TemplateContext {
            page: Some(page_number),
            has_prev: Some(has_prev),
            has_next: Some(has_next),
            ..Default::default()
        };
        self.emit("");
        self.emit(&render_template(TEMPLATES.pagination, &context));
        self.emit("");
    }

    fn render_search_summary(&mut self, term: &str, match_count: usize) {
        let context = TemplateContext {
            term: Some(term),
            count: Some(match_count as u64),
            ..Default::default()
        };
        self.emit("");
        self.emit(&render_template(TEMPLATES.header_search, &context));
        self.emit("");
    }

    fn render_detail(&mut self, detail: &DetailView) {
        let title = TemplateContext {
            title: Some(&detail.title),
            category: Some(detail.category),
            ..Default::default()
        };
        self.emit("");
        self.emit(&render_template(TEMPLATES.detail_title, &title));
        for section in &detail.sections {
            let heading = TemplateContext {
                title: Some(&section.heading),
                ..Default::default()
            };
            self.emit(&render_template(TEMPLATES.detail_section, &heading));
            for field in &section.fields {
                let context = TemplateContext {
                    label: Some(&field.label),
                    value: Some(&field.value),
                    ..Default::default()
                };
                self.emit(&render_template(TEMPLATES.detail_field, &context));
            }
        }
        self.emit("");
    }

    fn render_detail_closed(&mut self) {
        self.emit(&format!("{}", "Details closed".bright_black()));
    }

    fn render_error(&mut self, message: &str) {
        // Same shape as print_error
        self.emit(&format!("\n{} {}\n", "✕ Error:".red(), message.white()));
    }
}
