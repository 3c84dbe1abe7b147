use std::sync::Arc;
use std::time::Instant;
use axum::{routing::get, Router, Json};
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode};
use tower_http::cors::{CorsLayer, Any};
use serde::Serialize;
use tracing::{info, warn};
use crate::error::{Result, StlError};
use crate::loader::ContentLoader;

#[derive(Serialize)]
pub struct ContentResponse {
    pub status: String,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

type Reply = (StatusCode, Json<ContentResponse>);

pub fn router(loader: Arc<ContentLoader>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);
    Router::new()
        .route("/v1/documents/:name", get(document))
        .route("/v1/pages/:name", get(page))
        .route("/v1/nav", get(nav))
        .route("/v1/tools", get(tools))
        .route("/v1/docs-nav", get(docs_nav))
        .route("/v1/aso", get(aso))
        .layer(cors)
        .with_state(loader)
}

async fn document(State(loader): State<Arc<ContentLoader>>, Path(name): Path<String>) -> Reply {
    respond(loader, "document", move |l| Ok(serde_json::to_value(&*l.document(&name)?)?)).await
}
async fn page(State(loader): State<Arc<ContentLoader>>, Path(name): Path<String>) -> Reply {
    respond(loader, "page", move |l| Ok(serde_json::to_value(l.page(&name)?)?)).await
}
async fn nav(State(loader): State<Arc<ContentLoader>>) -> Reply {
    respond(loader, "nav", |l| Ok(serde_json::to_value(l.nav()?)?)).await
}
async fn tools(State(loader): State<Arc<ContentLoader>>) -> Reply {
    respond(loader, "tools", |l| Ok(serde_json::to_value(l.tools()?)?)).await
}
async fn docs_nav(State(loader): State<Arc<ContentLoader>>) -> Reply {
    respond(loader, "docs-nav", |l| Ok(serde_json::to_value(l.docs_nav()?)?)).await
}
async fn aso(State(loader): State<Arc<ContentLoader>>) -> Reply {
    respond(loader, "aso", |l| Ok(serde_json::to_value(l.aso()?)?)).await
}

pub fn status_of(e: &StlError) -> StatusCode {
    match e {
        _ if e.is_not_found() => StatusCode::NOT_FOUND,
        StlError::InvalidSourceName(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn respond<F>(loader: Arc<ContentLoader>, what: &'static str, load: F) -> Reply
where
    F: FnOnce(&ContentLoader) -> Result<serde_json::Value> + Send + 'static,
{
    // Loading reads files and parses synchronously, so keep it off the async workers.
    let started = Instant::now();
    let joined = tokio::task::spawn_blocking(move || load(&*loader)).await;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    let outcome = match joined {
        Ok(result) => result,
        Err(e) => {
            warn!(error=%e, "Join error");
            let body = ContentResponse { status: "error".into(), elapsed_ms, data: None, error: Some("Join error".into()) };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body));
        }
    };
    match outcome {
        Ok(data) => {
            info!(ms=elapsed_ms, what, "content served");
            let body = ContentResponse { status: "ok".into(), elapsed_ms, data: Some(data), error: None };
            (StatusCode::OK, Json(body))
        }
        Err(e) => {
            let status = status_of(&e);
            let msg = format!("{e}");
            warn!(%msg, code=%status.as_u16(), what, "content error");
            let body = ContentResponse { status: "error".into(), elapsed_ms, data: None, error: Some(msg) };
            (status, Json(body))
        }
    }
}
