//! Application boot sequence.
//!
//! # Design
//!
//! - Startup is a validation gate: the catalog must be consistent, every
//!   bundle must load (the default one fatally so), and every bundle's
//!   cross-reference lists must match the catalog. A process that fails any
//!   check does not serve.
//! - All checks run before the listener binds, so a bad deploy fails fast
//!   instead of serving partial content.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

use meridian_api::{ApiServer, LoggingSink};
use meridian_catalog::{CatalogGraph, Locale};
use meridian_content::{ContentResolver, loader};
use meridian_telemetry::{LoggingConfig, Metrics, init_logging};

use crate::error::{AppError, AppResult};

const BIND_ADDR_ENV: &str = "MERIDIAN_HTTP_ADDR";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Entry point for the application boot sequence.
///
/// # Errors
///
/// Returns an error if any startup validation fails or the server cannot
/// bind.
pub async fn run_app() -> AppResult<()> {
    init_logging(&LoggingConfig::default()).map_err(|source| AppError::Telemetry { source })?;
    info!("Meridian application bootstrap starting");

    let resolver = build_resolver()?;
    let fallbacks = preload_dictionaries()?;
    if fallbacks > 0 {
        warn!(fallbacks, "some locales will serve default-locale content");
    }
    verify_content(&resolver)?;

    let addr = bind_addr(std::env::var(BIND_ADDR_ENV).ok())?;
    let telemetry = Metrics::new().map_err(|source| AppError::Telemetry { source })?;
    let server = ApiServer::new(resolver, telemetry, Arc::new(LoggingSink));
    info!(%addr, "startup validation passed");
    server
        .serve(addr)
        .await
        .map_err(|source| AppError::Api { source })
}

/// Build and validate the catalog graph.
pub(crate) fn build_resolver() -> AppResult<ContentResolver> {
    let catalog = CatalogGraph::new().map_err(|source| AppError::Catalog { source })?;
    Ok(ContentResolver::new(Arc::new(catalog)))
}

/// Load every registered locale's bundle once. Returns how many locales will
/// serve fallback content; fails only when the default bundle is unusable.
pub(crate) fn preload_dictionaries() -> AppResult<usize> {
    let mut fallbacks = 0;
    for locale in Locale::ALL {
        let loaded = loader::load(*locale).map_err(|source| AppError::Content { source })?;
        if loaded.fallback {
            warn!(locale = %locale, "bundle unavailable; locale will serve default content");
            fallbacks += 1;
        }
    }
    Ok(fallbacks)
}

/// Cross-check every dictionary's industry `solutions` lists against the
/// catalog graph.
pub(crate) fn verify_content(resolver: &ContentResolver) -> AppResult<()> {
    let catalog = resolver.catalog();
    for locale in Locale::ALL {
        let loaded = loader::load(*locale).map_err(|source| AppError::Content { source })?;
        for (industry, content) in &loaded.dictionary.industries {
            let expected = catalog.solutions_for_industry(industry);
            let agrees = content
                .solutions
                .iter()
                .map(String::as_str)
                .eq(expected.iter().copied());
            if !agrees {
                return Err(AppError::ContentDrift {
                    locale: locale.as_str(),
                    industry: industry.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Resolve the bind address from the environment value, if any.
pub(crate) fn bind_addr(configured: Option<String>) -> AppResult<SocketAddr> {
    let value = configured.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    value
        .parse()
        .map_err(|source| AppError::InvalidBindAddr { value, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_defaults_to_loopback() {
        let addr = bind_addr(None).expect("default parses");
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn bind_addr_rejects_garbage() {
        let err = bind_addr(Some("not-an-addr".to_string())).expect_err("must fail");
        assert!(matches!(err, AppError::InvalidBindAddr { .. }));
    }

    #[test]
    fn startup_validation_passes_on_shipped_content() {
        let resolver = build_resolver().expect("catalog is consistent");
        let fallbacks = preload_dictionaries().expect("all bundles load");
        assert_eq!(fallbacks, 0);
        verify_content(&resolver).expect("dictionaries agree with the catalog");
    }
}
