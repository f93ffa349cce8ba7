use crate::core::{
    category::Category,
    command_init::CommandInit,
    error::{NavigatorError, Result},
    event::Event,
    input_parser::InputParser,
    orchestrator::Orchestrator,
    source::PageSource,
    view::TerminalView,
};
use std::io::{self, BufRead, Write};

pub fn execute_browse(base_url: Option<String>) -> Result<()> {
    let mut navigator = CommandInit::initialize(base_url)?;
    let stdin = io::stdin();
    run_shell(&mut navigator, stdin.lock())
}

/// Interactive loop: one line of input is one event.
///
/// Rejected input and failed fetches are reported and the shell keeps going;
/// only an I/O error on the input ends it early.
pub fn run_shell<S, W, R>(
    navigator: &mut Orchestrator<S, TerminalView<W>>,
    input: R,
) -> Result<()>
where
    S: PageSource,
    W: Write,
    R: BufRead,
{
    navigator.view_mut().render_help();
    // A failed first page is already on screen
    if let Err(e) = navigator.select_category(Category::default()) {
        log::debug!("Initial load failed: {e}");
    }
    prompt(navigator);

    for line in input.lines() {
        let line = line?;
        log::debug!("Input: {line:?}");

        match InputParser::parse(&line) {
            Ok(None) => {}
            Ok(Some(Event::Quit)) => break,
            Ok(Some(Event::Help)) => navigator.view_mut().render_help(),
            Ok(Some(event)) => {
                if let Err(e) = navigator.dispatch(event) {
                    report(navigator, &e);
                }
            }
            Err(e) => report(navigator, &e),
        }

        prompt(navigator);
    }

    log::debug!("Shell closed");
    Ok(())
}

fn prompt<S: PageSource, W: Write>(navigator: &mut Orchestrator<S, TerminalView<W>>) {
    let category = navigator.state().active_category;
    let term = navigator.state().search_term().to_string();
    navigator.view_mut().render_prompt(category, &term);
}

fn report<S: PageSource, W: Write>(
    navigator: &mut Orchestrator<S, TerminalView<W>>,
    error: &NavigatorError,
) {
    if error.is_fetch_failure() {
        return;
    }
    log::debug!("Rejected: {error}");
    navigator.view_mut().render_notice(&error.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        category::CategoryRegistry,
        page::{Page, PageEnvelope},
        templates::strip_ansi_codes,
    };
    use serde_json::json;

    /// Every category has a single page with the same two items
    struct SinglePage;

    impl PageSource for SinglePage {
        fn fetch_page(&self, url: &str) -> Result<Page> {
            let envelope: PageEnvelope = serde_json::from_value(json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [{"name": "Luke Skywalker"}, {"name": "Leia Organa"}]
            }))?;
            Ok(Page::from_envelope(url, envelope))
        }
    }

    /// Characters split over two pages, Luke on the first
    struct TwoPages;

    impl PageSource for TwoPages {
        fn fetch_page(&self, url: &str) -> Result<Page> {
            let body = if url.ends_with("?page=2") {
                json!({
                    "count": 2,
                    "next": null,
                    "previous": "https://swapi.dev/api/people/",
                    "results": [{"name": "Darth Vader"}]
                })
            } else {
                json!({
                    "count": 2,
                    "next": "https://swapi.dev/api/people/?page=2",
                    "previous": null,
                    "results": [{"name": "Luke Skywalker"}]
                })
            };
            let envelope: PageEnvelope = serde_json::from_value(body)?;
            Ok(Page::from_envelope(url, envelope))
        }
    }

    fn run_with<S: PageSource>(source: S, input: &str) -> Result<String> {
        let mut navigator = Orchestrator::new(
            source,
            TerminalView::new(Vec::new()),
            CategoryRegistry::default(),
        );
        run_shell(&mut navigator, input.as_bytes())?;
        let view = std::mem::replace(navigator.view_mut(), TerminalView::new(Vec::new()));
        Ok(strip_ansi_codes(&String::from_utf8_lossy(&view.into_inner())))
    }

    fn run(input: &str) -> Result<String> {
        run_with(SinglePage, input)
    }

    #[test]
    fn test_shell_loads_characters_first() -> Result<()> {
        let output = run("q\n")?;
        assert!(output.contains("Commands:"));
        assert!(output.contains("Characters · 2 total"));
        assert!(output.contains("[1] Luke Skywalker"));
        assert!(output.contains("characters> "));
        Ok(())
    }

    #[test]
    fn test_shell_reports_rejected_input_and_continues() -> Result<()> {
        let output = run("n\nwarp\n9\n/leia\n1\nq\n")?;
        assert!(output.contains("! There is no next page"));
        assert!(output.contains("! Unknown command: 'warp'"));
        assert!(output.contains("! Item 9 is out of range (1-2 available)"));
        assert!(output.contains("1 result(s) for \"leia\""));
        assert!(output.contains("characters/leia> "));
        assert!(output.contains("┃ Leia Organa"));
        Ok(())
    }

    #[test]
    fn test_shell_refuses_paging_during_search() -> Result<()> {
        let output = run_with(TwoPages, "/luke\nn\nb\nq\n")?;
        let after_search = output
            .split("1 result(s) for \"luke\"")
            .nth(1)
            .unwrap_or_default();
        assert!(after_search.contains("! Paging is disabled while searching"));
        assert!(!after_search.contains("Darth Vader"));
        assert!(!after_search.contains("Page 2"));
        // Still searching after the refused keys
        assert!(after_search.trim_end().ends_with("characters/luke>"));
        Ok(())
    }

    #[test]
    fn test_shell_stops_at_quit() -> Result<()> {
        let output = run("q\np\n")?;
        assert!(!output.contains("Planets"));
        Ok(())
    }
}
