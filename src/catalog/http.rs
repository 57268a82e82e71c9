// src/catalog/http.rs
//! JSON-over-HTTP event catalog (the hosted Meetzy backend).

use anyhow::{Context, Result};
use async_trait::async_trait;
use metrics::{counter, histogram};

use crate::catalog::{ensure_metrics_described, EventCatalog};
use crate::event::Event;

/// Fetches a JSON array of events from a configured URL.
pub struct HttpCatalog {
    url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EventCatalog for HttpCatalog {
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        ensure_metrics_described();
        let t0 = std::time::Instant::now();

        let resp = match self.client.get(&self.url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = ?e, catalog = self.name(), "catalog http error");
                counter!("catalog_fetch_errors_total").increment(1);
                return Err(e).context("catalog http get()");
            }
        };

        let events = resp
            .error_for_status()
            .context("catalog http status")?
            .json::<Vec<Event>>()
            .await
            .context("catalog json body")?;

        let ms = t0.elapsed().as_secs_f64() * 1_000.0;
        histogram!("catalog_fetch_ms").record(ms);
        counter!("catalog_events_total").increment(events.len() as u64);
        Ok(events)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
