//! Prometheus-backed metrics registry and snapshot helpers.
//!
//! # Design
//! - Encapsulates collector registration to keep the public API small.
//! - Exposes a minimal set of counters relevant to the content pipeline.

use std::sync::Arc;

use anyhow::{Context, Result};
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use serde::Serialize;

/// Prometheus-backed metrics registry shared across services.
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    http_requests_total: IntCounterVec,
    dictionary_fallback_total: IntCounterVec,
    content_not_found_total: IntCounter,
    contact_submissions_total: IntCounter,
}

/// Snapshot of selected counters for health reporting.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsSnapshot {
    /// Total requests that resolved to no content.
    pub content_not_found_total: u64,
    /// Total contact form submissions accepted.
    pub contact_submissions_total: u64,
}

impl Metrics {
    /// Construct a new metrics registry with the standard collectors registered.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the Prometheus collectors cannot be
    /// registered.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests received"),
            &["route", "code"],
        )?;
        let dictionary_fallback_total = IntCounterVec::new(
            Opts::new(
                "dictionary_fallback_total",
                "Content views served from the default locale's bundle",
            ),
            &["locale"],
        )?;
        let content_not_found_total = IntCounter::with_opts(Opts::new(
            "content_not_found_total",
            "Requests that resolved to no content",
        ))?;
        let contact_submissions_total = IntCounter::with_opts(Opts::new(
            "contact_submissions_total",
            "Contact form submissions accepted",
        ))?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(dictionary_fallback_total.clone()))?;
        registry.register(Box::new(content_not_found_total.clone()))?;
        registry.register(Box::new(contact_submissions_total.clone()))?;

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                http_requests_total,
                dictionary_fallback_total,
                content_not_found_total,
                contact_submissions_total,
            }),
        })
    }

    /// Increment the HTTP request counter for the given route and status code.
    pub fn inc_http_request(&self, route: &str, status: u16) {
        self.inner
            .http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Increment the fallback counter for the locale whose bundle was skipped.
    pub fn inc_dictionary_fallback(&self, locale: &str) {
        self.inner
            .dictionary_fallback_total
            .with_label_values(&[locale])
            .inc();
    }

    /// Increment the counter of requests that resolved to no content.
    pub fn inc_content_not_found(&self) {
        self.inner.content_not_found_total.inc();
    }

    /// Increment the accepted contact submission counter.
    pub fn inc_contact_submission(&self) {
        self.inner.contact_submissions_total.inc();
    }

    /// Render the metrics registry using the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if the metrics cannot be encoded or if the encoded
    /// buffer is not valid UTF-8.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.inner.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .context("failed to encode Prometheus metrics")?;
        String::from_utf8(buffer).context("metrics output was not valid UTF-8")
    }

    /// Take a point-in-time snapshot of the most relevant counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            content_not_found_total: self.inner.content_not_found_total.get(),
            contact_submissions_total: self.inner.contact_submissions_total.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_snapshot_reflects_updates() -> Result<()> {
        let metrics = Metrics::new()?;
        metrics.inc_http_request("/health", 200);
        metrics.inc_dictionary_fallback("fr");
        metrics.inc_content_not_found();
        metrics.inc_contact_submission();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.content_not_found_total, 1);
        assert_eq!(snapshot.contact_submissions_total, 1);

        let rendered = metrics.render()?;
        assert!(rendered.contains("http_requests_total"));
        assert!(rendered.contains("dictionary_fallback_total"));
        assert!(rendered.contains("content_not_found_total"));
        Ok(())
    }
}
