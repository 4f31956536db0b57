//! Wire types shared across the HTTP surface.

use serde::{Deserialize, Serialize};

/// RFC9457 problem-details payload returned for every API error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Problem type URI.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short human-readable summary.
    pub title: String,
    /// HTTP status code mirrored into the body.
    pub status: u16,
    /// Optional detail string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Optional per-field validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_params: Option<Vec<ProblemInvalidParam>>,
}

/// Invalid parameter pointer surfaced alongside a [`ProblemDetails`] payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemInvalidParam {
    /// JSON pointer to the offending field.
    pub pointer: String,
    /// Human-readable validation message.
    pub message: String,
}

/// A contact form submission as posted by the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    /// Submitter's name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Company name, when given.
    #[serde(default)]
    pub company: Option<String>,
    /// Phone number, when given.
    #[serde(default)]
    pub phone: Option<String>,
    /// Industry identifier the submitter picked, when given.
    #[serde(default)]
    pub industry: Option<String>,
    /// Free-form message body.
    pub message: String,
    /// Solution identifier carried over from the page the form was on.
    #[serde(default)]
    pub solution: Option<String>,
    /// Market identifier carried over from the page the form was on.
    #[serde(default)]
    pub market: Option<String>,
    /// Topics the submitter ticked.
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Acknowledgement returned for an accepted contact submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactAck {
    /// Always `accepted`.
    pub status: &'static str,
}

/// Inputs to the ROI estimator. Every parameter is optional; omitted fields
/// take industry-specific defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoiRequest {
    /// Industry identifier used to seed the defaults.
    #[serde(default)]
    pub industry: Option<String>,
    /// Hourly cost per employee, in dollars.
    #[serde(default)]
    pub employee_hourly_cost: Option<f64>,
    /// Monthly hours per employee.
    #[serde(default)]
    pub monthly_employee_hours: Option<f64>,
    /// Monthly customer interactions.
    #[serde(default)]
    pub monthly_customer_volume: Option<f64>,
    /// Average order value, in dollars.
    #[serde(default)]
    pub average_order_value: Option<f64>,
    /// Conversion rate as a fraction in `(0, 1]`.
    #[serde(default)]
    pub conversion_rate: Option<f64>,
    /// Error rate as a fraction in `(0, 1]`.
    #[serde(default)]
    pub error_rate: Option<f64>,
    /// Customer satisfaction on a 1 to 5 scale.
    #[serde(default)]
    pub customer_satisfaction: Option<f64>,
    /// Average response time in minutes.
    #[serde(default)]
    pub response_time_minutes: Option<f64>,
}

/// The projected return for one set of business parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoiProjection {
    /// Monthly staff cost saved, rounded dollars.
    pub monthly_staff_savings: f64,
    /// Monthly revenue gained from the conversion lift, rounded dollars.
    pub monthly_revenue_increase: f64,
    /// Monthly savings from fewer errors, rounded dollars.
    pub error_reduction_savings: f64,
    /// Monthly revenue attributed to higher satisfaction, rounded dollars.
    pub satisfaction_revenue: f64,
    /// Monthly labor saved by faster responses, rounded dollars.
    pub response_time_savings: f64,
    /// Sum of the monthly benefit lines, rounded dollars.
    pub total_monthly_benefit: f64,
    /// Monthly solution cost, dollars.
    pub monthly_cost: f64,
    /// Twelve months of benefit, rounded dollars.
    pub annual_benefit: f64,
    /// Twelve months of cost, dollars.
    pub annual_cost: f64,
    /// Annual return on investment, rounded percent.
    pub roi_percent: f64,
    /// Months until the cost is recovered, rounded.
    pub payback_months: f64,
    /// Satisfaction after the projected lift, capped at 5.
    pub projected_satisfaction: f64,
    /// Response time after the projected speedup, minutes.
    pub projected_response_time_minutes: f64,
    /// Error rate after the projected reduction, fraction.
    pub projected_error_rate: f64,
}
