//! API application state and resolution helpers.

use std::sync::Arc;

use meridian_catalog::Locale;
use meridian_content::{ContentResolver, DimensionSelection, ResolvedView};
use meridian_telemetry::Metrics;
use tracing::{error, warn};

use crate::http::contact::SubmissionSink;
use crate::http::errors::ApiError;

/// Shared state handed to every handler.
pub struct ApiState {
    pub(crate) resolver: ContentResolver,
    pub(crate) telemetry: Metrics,
    pub(crate) sink: Arc<dyn SubmissionSink>,
}

impl ApiState {
    /// Wire the resolver, telemetry, and submission sink together.
    #[must_use]
    pub fn new(
        resolver: ContentResolver,
        telemetry: Metrics,
        sink: Arc<dyn SubmissionSink>,
    ) -> Self {
        Self {
            resolver,
            telemetry,
            sink,
        }
    }

    /// Resolve a view for a handler, mapping resolver failures onto problem
    /// responses and recording the fallback/not-found counters.
    pub(crate) fn resolve_view(
        &self,
        locale: Locale,
        dims: &DimensionSelection<'_>,
    ) -> Result<ResolvedView, ApiError> {
        match self.resolver.resolve(locale, dims) {
            Ok(view) => {
                if view.fallback {
                    self.telemetry.inc_dictionary_fallback(locale.as_str());
                }
                Ok(view)
            }
            Err(err) if err.is_not_found() => {
                self.telemetry.inc_content_not_found();
                warn!(error = %err, locale = %locale, "content resolution missed");
                Err(ApiError::not_found("no content at this path"))
            }
            Err(err) => {
                error!(error = %err, locale = %locale, "content resolution failed");
                Err(ApiError::internal("content is currently unavailable"))
            }
        }
    }
}
