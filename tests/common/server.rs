//! Local SWAPI fixture server
//!
//! Serves a [`Catalog`] under `/api/<segment>/?page=<n>` with SWAPI-shaped
//! envelopes. `next`/`previous` links point back at the server itself, so the
//! binary can follow them like it follows the real API.

#![allow(dead_code)]

use rouille::{Request, Response, Server};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Pages of items per endpoint segment, plus pages that answer 500
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pages: HashMap<String, Vec<Vec<Value>>>,
    failing: HashSet<(String, usize)>,
}

impl Catalog {
    pub fn with_pages(mut self, segment: &str, pages: Vec<Vec<Value>>) -> Self {
        self.pages.insert(segment.to_string(), pages);
        self
    }

    /// Make page `page` (1-based) of a segment answer with a server error
    pub fn with_failure(mut self, segment: &str, page: usize) -> Self {
        self.failing.insert((segment.to_string(), page));
        self
    }

    fn respond(&self, request: &Request) -> Response {
        let path = request.url();
        let Some(segment) = path
            .strip_prefix("/api/")
            .map(|rest| rest.trim_end_matches('/').to_string())
        else {
            return Response::json(&json!({"detail": "Not found"})).with_status_code(404);
        };
        let page: usize = request
            .get_param("page")
            .and_then(|p| p.parse().ok())
            .unwrap_or(1);

        if self.failing.contains(&(segment.clone(), page)) {
            return Response::json(&json!({"detail": "Internal server error"})).with_status_code(500);
        }

        let Some(pages) = self.pages.get(&segment) else {
            return Response::json(&json!({"detail": "Not found"})).with_status_code(404);
        };
        let Some(results) = page.checked_sub(1).and_then(|i| pages.get(i)) else {
            return Response::json(&json!({"detail": "Not found"})).with_status_code(404);
        };

        let host = request.header("Host").unwrap_or("127.0.0.1");
        let link = |n: usize| Value::String(format!("http://{host}/api/{segment}/?page={n}"));
        let count: usize = pages.iter().map(Vec::len).sum();

        Response::json(&json!({
            "count": count,
            "next": if page < pages.len() { link(page + 1) } else { Value::Null },
            "previous": if page > 1 { link(page - 1) } else { Value::Null },
            "results": results,
        }))
    }
}

/// Running fixture server, stopped on drop
pub struct FixtureServer {
    base_url: String,
    hits: Arc<AtomicUsize>,
    stop: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl FixtureServer {
    pub fn start(catalog: Catalog) -> anyhow::Result<Self> {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let server = Server::new("127.0.0.1:0", move |request| {
            counter.fetch_add(1, Ordering::SeqCst);
            catalog.respond(request)
        })
        .map_err(|e| anyhow::anyhow!("failed to start fixture server: {e}"))?;

        let base_url = format!("http://{}/api", server.server_addr());
        let (handle, stop) = server.stoppable();

        Ok(Self {
            base_url,
            hits,
            stop,
            handle: Some(handle),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests served so far
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        let _ = self.stop.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
