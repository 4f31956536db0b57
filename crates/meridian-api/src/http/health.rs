#![allow(clippy::unused_async)]

//! Health and diagnostics endpoints.

use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use meridian_catalog::Locale;
use meridian_content::loader;
use meridian_telemetry::{MetricsSnapshot, build_sha};
use serde::Serialize;
use tracing::error;

use crate::http::errors::ApiError;
use crate::state::ApiState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) status: &'static str,
    pub(crate) build: &'static str,
    pub(crate) locales: usize,
    pub(crate) metrics: MetricsSnapshot,
}

pub(crate) async fn health(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    // The process must never serve without the default bundle.
    if let Err(err) = loader::try_load(Locale::DEFAULT) {
        error!(error = %err, "default dictionary unavailable");
        return Err(ApiError::service_unavailable(
            "default content bundle is unavailable",
        ));
    }
    Ok(Json(HealthResponse {
        status: "ok",
        build: build_sha(),
        locales: Locale::ALL.len(),
        metrics: state.telemetry.snapshot(),
    }))
}

pub(crate) async fn metrics(State(state): State<Arc<ApiState>>) -> Result<Response, ApiError> {
    let rendered = state.telemetry.render().map_err(|err| {
        error!(error = %err, "failed to render metrics");
        ApiError::internal("metrics rendering failed")
    })?;
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "text/plain; version=0.0.4")
        .body(Body::from(rendered))
        .map_err(|err| ApiError::internal(format!("failed to build metrics response: {err}")))
}

#[cfg(test)]
mod tests {
    use meridian_catalog::CatalogGraph;
    use meridian_content::ContentResolver;
    use meridian_telemetry::Metrics;

    use crate::http::contact::LoggingSink;

    use super::*;

    fn state() -> Arc<ApiState> {
        let resolver = ContentResolver::new(Arc::new(CatalogGraph::new().expect("catalog")));
        Arc::new(ApiState::new(
            resolver,
            Metrics::new().expect("metrics"),
            Arc::new(LoggingSink),
        ))
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(response) = health(State(state())).await.expect("healthy");
        assert_eq!(response.status, "ok");
        assert_eq!(response.locales, Locale::ALL.len());
    }

    #[tokio::test]
    async fn metrics_render_in_text_format() {
        let state = state();
        state.telemetry.inc_http_request("/health", 200);
        let response = metrics(State(state)).await.expect("rendered");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/plain"));
    }
}
