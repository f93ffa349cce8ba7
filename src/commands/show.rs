use crate::core::{
    category::Category,
    command_init::CommandInit,
    error::Result,
    page::Item,
    projection::DetailView,
    view::{TerminalView, ViewProjector},
};

pub fn execute_show(
    base_url: Option<String>,
    category: &str,
    index: usize,
    page: u32,
) -> Result<()> {
    let category: Category = category.parse()?;
    let config = CommandInit::load_config(base_url)?;
    let mut navigator = CommandInit::build(&config, DetailOnly(TerminalView::stdout()))?;

    log::debug!("Showing {category} #{index} of page {page}");
    navigator.open_page(category, page)?;
    navigator.open_detail(index)?;
    Ok(())
}

/// Passes through only the detail panel and errors
struct DetailOnly<V: ViewProjector>(V);

impl<V: ViewProjector> ViewProjector for DetailOnly<V> {
    fn render_list(&mut self, _items: &[Item], _category: Category, _total: Option<u64>) {}

    fn render_pagination(&mut self, _page: u32, _has_prev: bool, _has_next: bool, _search: bool) {}

    fn render_search_summary(&mut self, _term: &str, _match_count: usize) {}

    fn render_detail(&mut self, detail: &DetailView) {
        self.0.render_detail(detail);
    }

    fn render_detail_closed(&mut self) {}

    fn render_error(&mut self, message: &str) {
        self.0.render_error(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{projection::project_detail, templates::strip_ansi_codes};
    use serde_json::json;

    #[test]
    fn test_detail_only_drops_list() {
        let mut view = DetailOnly(TerminalView::new(Vec::new()));
        let item = Item::from(json!({"name": "Hoth", "climate": "frozen"}));

        view.render_list(std::slice::from_ref(&item), Category::Planets, Some(1));
        view.render_pagination(1, false, false, false);
        view.render_detail(&project_detail(&item, Category::Planets));

        let output = strip_ansi_codes(&String::from_utf8_lossy(&view.0.into_inner()));
        assert!(!output.contains("[1] Hoth"));
        assert!(!output.contains("Page 1"));
        assert!(output.contains("┃ Hoth"));
        assert!(output.contains("Climate: frozen"));
    }
}
