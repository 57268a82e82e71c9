// src/api.rs
//! HTTP packaging of the pure recommender: routes, shared state, CORS.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDateTime};
use metrics::counter;
use tower_http::cors::CorsLayer;

use crate::catalog::EventCatalog;
use crate::event::Event;
use crate::lexicon;
use crate::preferences::{Energy, Environment, Plan, Preferences};
use crate::recommend::{rank, RankedEvent};

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn EventCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn EventCatalog>) -> Self {
        Self { catalog }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/recommend",
            get(recommend_from_catalog).post(recommend_inline),
        )
        .route("/debug/lexicon", get(debug_lexicon))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct RecommendReq {
    events: Vec<Event>,
    energy: Energy,
    environment: Environment,
    plan: Plan,
    #[serde(default)]
    now: Option<NaiveDateTime>, // pokud chybí, použijeme "teď"
}

#[derive(serde::Deserialize)]
struct RecommendQuery {
    energy: Energy,
    environment: Environment,
    plan: Plan,
    #[serde(default)]
    now: Option<NaiveDateTime>,
}

#[derive(serde::Serialize)]
struct RecommendResp {
    /// The chosen event, or null when no candidates were supplied.
    recommendation: Option<Event>,
    score: Option<i32>,
    matched: Vec<String>,
    /// True when nothing scored and the soonest-event fallback decided.
    fallback: bool,
    now: NaiveDateTime,
    candidates: usize,
}

#[derive(serde::Serialize)]
struct ErrorResp {
    error: String,
}

async fn recommend_inline(
    State(_state): State<AppState>,
    Json(body): Json<RecommendReq>,
) -> Json<RecommendResp> {
    let prefs = Preferences::new(body.energy, body.environment, body.plan);
    let now = body.now.unwrap_or_else(|| Local::now().naive_local());
    Json(decide(&body.events, &prefs, now))
}

async fn recommend_from_catalog(
    State(state): State<AppState>,
    Query(q): Query<RecommendQuery>,
) -> Result<Json<RecommendResp>, (StatusCode, Json<ErrorResp>)> {
    let events = match state.catalog.fetch_events().await {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = ?e, catalog = state.catalog.name(), "catalog fetch failed");
            return Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResp {
                    error: "catalog unavailable".into(),
                }),
            ));
        }
    };

    let prefs = Preferences::new(q.energy, q.environment, q.plan);
    let now = q.now.unwrap_or_else(|| Local::now().naive_local());
    Ok(Json(decide(&events, &prefs, now)))
}

/// One recommendation decision + telemetry. The core stays pure; counters
/// and logs live here.
fn decide(events: &[Event], prefs: &Preferences, now: NaiveDateTime) -> RecommendResp {
    counter!("recommend_requests_total").increment(1);

    let ranked = rank(events, prefs, now);
    if ranked.is_empty() {
        counter!("recommend_empty_total").increment(1);
        return RecommendResp {
            recommendation: None,
            score: None,
            matched: Vec::new(),
            fallback: false,
            now,
            candidates: 0,
        };
    }

    let fallback = ranked.iter().all(|r| r.score == 0);
    if fallback {
        counter!("recommend_fallback_total").increment(1);
    }

    let top = &ranked[0];
    log_decision(top, fallback, now);

    RecommendResp {
        recommendation: Some(top.event.clone()),
        score: Some(top.score),
        matched: top.matched.clone(),
        fallback,
        now,
        candidates: ranked.len(),
    }
}

/// Short anonymized id for decision logs.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Never log raw event text. Only the hashed id + a short keyword list.
fn log_decision(top: &RankedEvent<'_>, fallback: bool, now: NaiveDateTime) {
    let id = anon_hash(&top.event.combined_text());
    let matched_short: Vec<&str> = top.matched.iter().take(5).map(String::as_str).collect();
    tracing::info!(
        target: "recommend",
        %id,
        score = top.score,
        fallback,
        %now,
        matched = ?matched_short,
        "decision"
    );
}

#[derive(serde::Serialize)]
struct LexiconInfo {
    axis: &'static str,
    value: &'static str,
    keywords: usize,
}

async fn debug_lexicon() -> Json<Vec<LexiconInfo>> {
    let mut out = Vec::with_capacity(9);
    for e in Energy::ALL {
        out.push(LexiconInfo {
            axis: "energy",
            value: e.as_str(),
            keywords: lexicon::energy_keywords(e).len(),
        });
    }
    for e in Environment::ALL {
        out.push(LexiconInfo {
            axis: "environment",
            value: e.as_str(),
            keywords: lexicon::environment_keywords(e).len(),
        });
    }
    for p in Plan::ALL {
        out.push(LexiconInfo {
            axis: "plan",
            value: p.as_str(),
            keywords: lexicon::plan_keywords(p).len(),
        });
    }
    Json(out)
}
