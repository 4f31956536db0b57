//! HTTP surface modules (router, handlers, middleware).

/// Shared constants and problem URIs.
pub mod constants;
/// Contact form and ROI estimator endpoints.
pub mod contact;
/// Problem response helpers and error types.
pub mod errors;
/// Health and diagnostics endpoints.
pub mod health;
/// Locale-normalising middleware.
pub mod locale;
/// Localized page views.
pub mod pages;
/// Router construction and server host.
pub mod router;
/// Metrics middleware for HTTP requests.
pub mod telemetry;
