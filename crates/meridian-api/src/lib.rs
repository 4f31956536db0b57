#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! HTTP delivery surface for the localized marketing content.
//!
//! # Design
//!
//! - A locale-normalising middleware runs before routing; every page route is
//!   locale-prefixed by the time it matches.
//! - Page handlers are thin adapters over the content resolver. A resolver
//!   not-found is a JSON 404 problem with no internal detail.
//! - Form endpoints (`/api/contact`, `/api/roi`) live outside the locale
//!   prefix and never redirect.
//!
//! Layout: `http/` (routes, handlers, middleware), `models.rs` (wire types),
//! `state.rs` (shared application state).

pub mod http;
pub mod models;
pub mod state;

pub use http::contact::{LoggingSink, SubmissionSink};
pub use http::router::ApiServer;
pub use models::ContactSubmission;
pub use state::ApiState;
