//! Remote paged data source.
//!
//! [`PageSource`] is the seam between the orchestrator and the network.
//! [`HttpPageSource`] is the production implementation, a thin wrapper over a
//! blocking `reqwest` client that turns one URL into one decoded [`Page`].
//!
//! A fetch fails on transport errors, on any non-2xx status and on bodies
//! that are not a page envelope.

use crate::core::{
    config::NavigatorConfig,
    error::{NavigatorError, Result},
    page::{Page, PageEnvelope},
};
use reqwest::blocking::Client;
use std::time::Duration;

pub trait PageSource {
    fn fetch_page(&self, url: &str) -> Result<Page>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    fn fetch_page(&self, url: &str) -> Result<Page> {
        (**self).fetch_page(url)
    }
}

pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(config: &NavigatorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(HttpPageSource { client })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, url: &str) -> Result<Page> {
        log::debug!("GET {url}");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            log::debug!("GET {url} returned {status}");
            return Err(NavigatorError::bad_status(
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown status"),
            ));
        }

        let body = response.text()?;
        let envelope = PageEnvelope::from_json(url, &body)?;
        let page = Page::from_envelope(url, envelope);

        log::debug!(
            "GET {url}: {} items, page {}, next={:?}",
            page.items.len(),
            page.page_number,
            page.next
        );
        Ok(page)
    }
}
