//! Locale-normalising middleware.
//!
//! # Design
//!
//! - Runs before routing, so every page route downstream can assume a locale
//!   prefix.
//! - Asset-like paths (anything with a file extension) and the service
//!   surfaces (`/api`, `/assets`, `/images`, `/health`, `/metrics`) pass
//!   through untouched.
//! - Everything else without a registered locale prefix gets a 307 to the
//!   default-locale form of the same path. A segment that merely looks like a
//!   locale (`/xx/...`) is ordinary content: it redirects to `/en-US/xx/...`
//!   and resolves to a 404 there.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use meridian_catalog::Locale;

const BYPASS_PREFIXES: &[&str] = &["/api", "/assets", "/images", "/health", "/metrics"];

/// What the middleware decided for one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RouteDecision {
    /// Service or asset path, pass through untouched.
    Bypass,
    /// Already locale-prefixed, pass through.
    Forward,
    /// Redirect (307) to the given location.
    Redirect(String),
}

/// Pure routing decision for one request path.
pub(crate) fn route_decision(path: &str) -> RouteDecision {
    if path.contains('.') {
        return RouteDecision::Bypass;
    }
    if BYPASS_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
    {
        return RouteDecision::Bypass;
    }
    if path == "/" {
        return RouteDecision::Redirect(format!("/{}", Locale::DEFAULT));
    }
    let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    if Locale::from_tag(first_segment).is_some() {
        return RouteDecision::Forward;
    }
    RouteDecision::Redirect(format!("/{}{path}", Locale::DEFAULT))
}

/// Middleware wrapper around [`route_decision`].
pub(crate) async fn localize_path(req: Request, next: Next) -> Response {
    match route_decision(req.uri().path()) {
        RouteDecision::Bypass | RouteDecision::Forward => next.run(req).await,
        RouteDecision::Redirect(mut target) => {
            if let Some(query) = req.uri().query() {
                target = format!("{target}?{query}");
            }
            Redirect::temporary(&target).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_the_default_locale() {
        assert_eq!(
            route_decision("/"),
            RouteDecision::Redirect("/en-US".to_string())
        );
    }

    #[test]
    fn unprefixed_paths_gain_the_default_locale() {
        assert_eq!(
            route_decision("/industries"),
            RouteDecision::Redirect("/en-US/industries".to_string())
        );
        assert_eq!(
            route_decision("/solutions/orderlyai"),
            RouteDecision::Redirect("/en-US/solutions/orderlyai".to_string())
        );
    }

    #[test]
    fn registered_locale_prefixes_pass_through() {
        assert_eq!(route_decision("/fr/solutions"), RouteDecision::Forward);
        assert_eq!(route_decision("/en-US"), RouteDecision::Forward);
        assert_eq!(
            route_decision("/ja/solutions/orderlyai/restaurants/japan"),
            RouteDecision::Forward
        );
    }

    #[test]
    fn locale_matching_is_exact_and_case_sensitive() {
        assert_eq!(
            route_decision("/en-us/solutions"),
            RouteDecision::Redirect("/en-US/en-us/solutions".to_string())
        );
        assert_eq!(
            route_decision("/xx/solutions/orderlyai"),
            RouteDecision::Redirect("/en-US/xx/solutions/orderlyai".to_string())
        );
    }

    #[test]
    fn assets_and_service_paths_bypass() {
        assert_eq!(route_decision("/favicon.ico"), RouteDecision::Bypass);
        assert_eq!(route_decision("/assets/site.css"), RouteDecision::Bypass);
        assert_eq!(route_decision("/images/logo"), RouteDecision::Bypass);
        assert_eq!(route_decision("/api/contact"), RouteDecision::Bypass);
        assert_eq!(route_decision("/health"), RouteDecision::Bypass);
        assert_eq!(route_decision("/metrics"), RouteDecision::Bypass);
    }

    #[test]
    fn bypass_requires_a_full_segment_match() {
        assert_eq!(
            route_decision("/apiary"),
            RouteDecision::Redirect("/en-US/apiary".to_string())
        );
    }
}
