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

//! Telemetry primitives shared across the Meridian workspace.
//!
//! Centralises logging, metrics, and HTTP middleware helpers so the delivery
//! surfaces adopt a consistent observability story.
//!
//! Layout: `init.rs` (tracing subscriber setup), `layers.rs` (request-id and
//! CORS layers), `metrics.rs` (the Prometheus registry).

pub mod init;
pub mod layers;
pub mod metrics;

pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
pub use layers::{cors_layer, propagate_request_id_layer, set_request_id_layer};
pub use metrics::{Metrics, MetricsSnapshot};
