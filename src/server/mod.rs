//! HTTP surface
//!
//! Every catalog request runs a fresh aggregation pass; the server keeps no
//! registry data between requests.

mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

pub use error::ApiError;

use crate::chat::{ChatReply, ChatRequest, ChatService};
use crate::core::category::group_by_category;
use crate::error::{HubError, Result};
use crate::registry::{Catalog, Registry};
use crate::search::{BrowseFilter, browse, filter_by_tier};

pub const HEALTH_PATH: &str = "/health";
pub const SKILLS_PATH: &str = "/api/skills";
pub const BROWSE_PATH: &str = "/api/skills/browse";
pub const CATEGORIES_PATH: &str = "/api/categories";
pub const CHAT_PATH: &str = "/api/chat";

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub chat: Arc<ChatService>,
}

impl AppState {
    pub fn new(registry: Registry, chat: ChatService) -> Self {
        Self {
            registry: Arc::new(registry),
            chat: Arc::new(chat),
        }
    }
}

/// Catalog and chat routes, state not yet attached.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(SKILLS_PATH, get(list_skills))
        .route(BROWSE_PATH, get(browse_skills))
        .route(CATEGORIES_PATH, get(list_categories))
        .route(CHAT_PATH, post(chat))
}

pub fn router(state: AppState) -> Router {
    routes().with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Serving skill registry");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_skills(State(state): State<AppState>) -> std::result::Result<Json<Catalog>, ApiError> {
    Ok(Json(load_catalog(&state.registry).await?))
}

#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
}

async fn browse_skills(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> std::result::Result<Json<Value>, ApiError> {
    let filter: BrowseFilter = params.filter.as_deref().unwrap_or_default().parse()?;
    let catalog = load_catalog(&state.registry).await?;

    let scoped = match params.tier.as_deref() {
        Some(tier) => filter_by_tier(&catalog, tier),
        None => catalog.iter().collect(),
    };
    let view = browse(scoped, filter, params.q.as_deref().unwrap_or_default());
    Ok(Json(to_json(&view)?))
}

async fn list_categories(State(state): State<AppState>) -> std::result::Result<Json<Value>, ApiError> {
    let catalog = load_catalog(&state.registry).await?;
    let groups = group_by_category(&catalog);
    let body: Vec<_> = groups.iter().collect();
    Ok(Json(to_json(&body)?))
}

/// Body is parsed by hand so malformed input gets the chat envelope.
async fn chat(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<ChatReply>) {
    let outcome = match ChatRequest::from_slice(&body) {
        Ok(request) => state.chat.reply(&request).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(reply) => (StatusCode::OK, Json(ChatReply::new(reply))),
        Err(err) => {
            warn!(error = %err, "Chat request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatReply::error(&err)))
        }
    }
}

/// One aggregation pass on the blocking pool; source reads are synchronous.
async fn load_catalog(registry: &Arc<Registry>) -> std::result::Result<Catalog, ApiError> {
    let registry = Arc::clone(registry);
    tokio::task::spawn_blocking(move || registry.load())
        .await
        .map_err(|err| ApiError::Internal(format!("catalog load task failed: {err}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> std::result::Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|err| ApiError::from(HubError::from(err)))
}
