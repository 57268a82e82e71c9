// src/catalog/mod.rs
//! Event catalog boundary: who supplies the candidate list.
//!
//! The recommender itself is pure; catalogs are the only I/O edge. A fetch
//! failure is the caller's "no candidates" case, never a crash.

pub mod http;

use anyhow::{Context, Result};
use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;
use std::path::Path;

use crate::event::Event;

pub use http::HttpCatalog;

/// One-time metrics registration (so series show up on /metrics).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("catalog_events_total", "Total events fetched from the catalog.");
        describe_counter!("catalog_fetch_errors_total", "Catalog fetch/parse errors.");
        describe_histogram!("catalog_fetch_ms", "Catalog fetch time in milliseconds.");
    });
}

/// Supplies the candidate events for one recommendation call.
#[async_trait::async_trait]
pub trait EventCatalog: Send + Sync {
    async fn fetch_events(&self) -> Result<Vec<Event>>;
    fn name(&self) -> &'static str;
}

/// Fixed in-memory catalog (tests, fixtures, local demos).
pub struct StaticCatalog {
    events: Vec<Event>,
}

impl StaticCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Load a JSON array of events from disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog from {}", path.display()))?;
        let events: Vec<Event> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing catalog at {}", path.display()))?;
        Ok(Self::new(events))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[async_trait::async_trait]
impl EventCatalog for StaticCatalog {
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
