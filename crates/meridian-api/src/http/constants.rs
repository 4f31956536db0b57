//! Shared HTTP constants (headers, problem URIs).

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

pub(crate) const PROBLEM_INTERNAL: &str = "https://meridian.ai/problems/internal";
pub(crate) const PROBLEM_BAD_REQUEST: &str = "https://meridian.ai/problems/bad-request";
pub(crate) const PROBLEM_NOT_FOUND: &str = "https://meridian.ai/problems/not-found";
pub(crate) const PROBLEM_SERVICE_UNAVAILABLE: &str =
    "https://meridian.ai/problems/service-unavailable";
