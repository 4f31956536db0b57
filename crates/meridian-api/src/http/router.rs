//! Router construction and server host for the API.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    Router,
    http::Request,
    middleware,
    routing::{get, post},
};
use meridian_content::ContentResolver;
use meridian_telemetry::{
    Metrics, build_sha, cors_layer, propagate_request_id_layer, set_request_id_layer,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::http::constants::HEADER_REQUEST_ID;
use crate::http::contact::{SubmissionSink, project_roi, submit_contact};
use crate::http::errors::ApiError;
use crate::http::health::{health, metrics};
use crate::http::locale::localize_path;
use crate::http::pages::{
    contact_page, home, industries_index, industry_detail, markets_index, page_detail,
    solution_detail, solutions_index,
};
use crate::http::telemetry::HttpMetricsLayer;
use crate::state::ApiState;

/// Axum router wrapper that hosts the Meridian content API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Construct the server with shared dependencies wired through state.
    #[must_use]
    pub fn new(
        resolver: ContentResolver,
        telemetry: Metrics,
        sink: Arc<dyn SubmissionSink>,
    ) -> Self {
        let state = Arc::new(ApiState::new(resolver, telemetry.clone(), sink));

        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let method = request.method().clone();
                let uri_path = request.uri().path();
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();

                tracing::info_span!(
                    "http.request",
                    method = %method,
                    route = %uri_path,
                    request_id = %request_id,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    let status = response.status().as_u16();
                    span.record("status_code", status);
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new()
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
            .layer(trace_layer)
            .layer(HttpMetricsLayer::new(telemetry));

        let router = Self::build_router()
            .fallback(not_found_fallback)
            .layer(layered)
            .layer(cors_layer())
            .layer(middleware::from_fn(localize_path))
            .with_state(state);

        Self { router }
    }

    fn build_router() -> Router<Arc<ApiState>> {
        Router::new()
            .route("/health", get(health))
            .route("/metrics", get(metrics))
            .route("/api/contact", post(submit_contact))
            .route("/api/roi", post(project_roi))
            .route("/{locale}", get(home))
            .route("/{locale}/solutions", get(solutions_index))
            .route("/{locale}/solutions/{solution}", get(solution_detail))
            .route(
                "/{locale}/solutions/{solution}/{industry}/{market}",
                get(page_detail),
            )
            .route("/{locale}/industries", get(industries_index))
            .route("/{locale}/industries/{industry}", get(industry_detail))
            .route("/{locale}/markets", get(markets_index))
            .route("/{locale}/contact", get(contact_page))
    }

    /// Serve the API using the configured router on the supplied address.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates
    /// unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        tracing::info!("Starting API on {}", addr);
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router.into_make_service()).await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn router(&self) -> Router {
        self.router.clone()
    }
}

#[allow(clippy::unused_async)]
async fn not_found_fallback() -> ApiError {
    ApiError::not_found("no content at this path")
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header::LOCATION};
    use meridian_catalog::CatalogGraph;
    use tower::ServiceExt;

    use crate::http::contact::LoggingSink;

    use super::*;

    fn server() -> ApiServer {
        let resolver = ContentResolver::new(Arc::new(CatalogGraph::new().expect("catalog")));
        ApiServer::new(
            resolver,
            Metrics::new().expect("metrics"),
            Arc::new(LoggingSink),
        )
    }

    async fn send(request: Request<Body>) -> axum::response::Response {
        server()
            .router()
            .oneshot(request)
            .await
            .expect("infallible")
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn root_redirects_to_the_default_locale() {
        let response = send(Request::get("/").body(Body::empty()).expect("request")).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/en-US");
    }

    #[tokio::test]
    async fn unprefixed_pages_redirect_with_the_path_preserved() {
        let response = send(
            Request::get("/industries")
                .body(Body::empty())
                .expect("request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/en-US/industries");
    }

    #[tokio::test]
    async fn unrecognized_locale_segment_redirects_then_misses() {
        let response = send(
            Request::get("/xx/solutions/orderlyai")
                .body(Body::empty())
                .expect("request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/en-US/xx/solutions/orderlyai");

        // Following the redirect lands on a 404: "xx" is ordinary content.
        let response = send(
            Request::get("/en-US/xx/solutions/orderlyai")
                .body(Body::empty())
                .expect("request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn asset_paths_bypass_the_locale_router() {
        let response = send(
            Request::get("/favicon.ico")
                .body(Body::empty())
                .expect("request"),
        )
        .await;
        // No redirect: the request fell through to the 404 fallback.
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn localized_pages_resolve() {
        let response = send(
            Request::get("/fr/solutions/orderlyai")
                .body(Body::empty())
                .expect("request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let view: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(view["solution"]["id"], "orderlyai");
        assert_eq!(view["locale"], "fr");
    }

    #[tokio::test]
    async fn incompatible_combination_is_404() {
        let response = send(
            Request::get("/en-US/solutions/orderlyai/hospitality/canada")
                .body(Body::empty())
                .expect("request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let problem: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(problem["status"], 404);
        // No internal identifiers leak through the problem body.
        assert!(!problem["detail"].as_str().unwrap_or("").contains("orderlyai"));
    }

    #[tokio::test]
    async fn contact_submission_is_accepted() {
        let body = serde_json::json!({
            "name": "Avery",
            "email": "avery@example.com",
            "message": "Tell me more.",
            "interests": ["demo"]
        });
        let response = send(
            Request::post("/api/contact")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[tokio::test]
    async fn invalid_contact_submission_is_rejected_with_pointers() {
        let body = serde_json::json!({
            "name": "",
            "email": "nope",
            "message": ""
        });
        let response = send(
            Request::post("/api/contact")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let problem: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(problem["invalid_params"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn roi_projection_round_trips() {
        let body = serde_json::json!({ "industry": "restaurants" });
        let response = send(
            Request::post("/api/roi")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let projection: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert!(projection["roi_percent"].as_f64().unwrap_or_default() > 0.0);
    }

    #[tokio::test]
    async fn health_and_metrics_bypass_localization() {
        let response = send(Request::get("/health").body(Body::empty()).expect("request")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(
            Request::get("/metrics")
                .body(Body::empty())
                .expect("request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
