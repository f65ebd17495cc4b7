//! Web dashboard: server-rendered page plus JSON API endpoints

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;
use beacon_core::{Catalog, Dashboard, FilterOutcome, MemoryContainer, RenderedCard};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::config::PageConfig;
use crate::page;

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub catalog: Arc<Catalog>,
    pub page: Arc<PageConfig>,
}

/// Query string of the search endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Response of /api/search
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub term: String,
    pub visible: usize,
    pub no_results: bool,
    pub cards: Vec<SearchHit>,
}

/// One visible card in a search response
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    pub color: String,
}

impl From<&RenderedCard> for SearchHit {
    fn from(card: &RenderedCard) -> Self {
        Self {
            name: card.name.clone(),
            description: card.description.clone(),
            url: card.href.clone(),
            icon: card.icon.clone(),
            color: card.color.clone(),
        }
    }
}

/// Build the dashboard axum router.
///
/// When `app_dir` is given, the built front end is served from it under
/// `/app`, on the same origin as the API it fetches the catalog from.
pub fn build_router(catalog: Arc<Catalog>, page: PageConfig, app_dir: Option<&Path>) -> Router {
    let dashboard_state = DashboardState {
        catalog,
        page: Arc::new(page),
    };

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/go", get(go_handler))
        .route("/api/services", get(services_handler))
        .route("/api/search", get(search_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state);

    match app_dir {
        Some(dir) => router.nest_service("/app", ServeDir::new(dir)),
        None => router,
    }
}

/// Each request gets its own grid, built once from the shared catalog
fn filtered(catalog: &Catalog, query: &str) -> (Dashboard<MemoryContainer>, FilterOutcome) {
    let mut dashboard = Dashboard::new(catalog, MemoryContainer::new());
    let outcome = dashboard.filter(query);
    (dashboard, outcome)
}

async fn index_handler(
    State(state): State<DashboardState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let (dashboard, _) = filtered(&state.catalog, &params.q);
    Html(page::render_index(&state.page, &dashboard, &params.q))
}

async fn go_handler(
    State(state): State<DashboardState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let (dashboard, outcome) = filtered(&state.catalog, &params.q);

    match dashboard.first_visible() {
        Some(card) if HeaderValue::from_str(&card.href).is_ok() => {
            tracing::debug!("Redirecting '{}' to {}", outcome.term, card.href);
            Redirect::to(&card.href)
        }
        Some(card) => {
            tracing::warn!("Service '{}' has an unusable url {:?}", card.name, card.href);
            back_to_page(&params.q)
        }
        None => {
            tracing::debug!("No service matches '{}'", outcome.term);
            back_to_page(&params.q)
        }
    }
}

fn back_to_page(query: &str) -> Redirect {
    Redirect::to(&format!("/?q={}", urlencoding::encode(query)))
}

async fn services_handler(State(state): State<DashboardState>) -> impl IntoResponse {
    axum::Json(state.catalog.as_slice().to_vec())
}

async fn search_handler(
    State(state): State<DashboardState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let (dashboard, outcome) = filtered(&state.catalog, &params.q);

    let cards = dashboard
        .container()
        .cards()
        .filter(|(_, hidden)| !hidden)
        .map(|(card, _)| SearchHit::from(card))
        .collect();

    axum::Json(SearchResponse {
        term: outcome.term,
        visible: outcome.visible,
        no_results: outcome.no_results,
        cards,
    })
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
