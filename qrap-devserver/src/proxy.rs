use crate::config::DevServerConfig;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: Arc<str>,
}

impl ProxyState {
    pub fn new(upstream: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: upstream.trim_end_matches('/').into(),
        }
    }
}

/// Static bundle with an `index.html` fallback so client-side routes survive
/// a reload, plus `/api/v1/*` forwarded to the QRAP API.
pub fn dashboard_router(config: &DevServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let assets = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(health))
        .route("/api/v1/*rest", any(forward))
        .with_state(ProxyState::new(&config.api_url))
        .fallback_service(assets)
}

pub fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    format!("{upstream}{path_and_query}")
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn forward(
    State(state): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.upstream, &uri);

    let mut request = state.client.request(method.clone(), &url).body(body);
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        request = request.header(header::CONTENT_TYPE, content_type.clone());
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(%method, path = uri.path(), error = %err, "upstream unreachable");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(%method, path = uri.path(), error = %err, "upstream body read failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    tracing::info!(%method, path = uri.path(), status = status.as_u16(), "proxied");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    response
}
