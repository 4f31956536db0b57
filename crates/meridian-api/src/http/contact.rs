//! Contact form and ROI estimator endpoints.
//!
//! # Design
//!
//! - Delivery goes through the [`SubmissionSink`] trait; the default sink
//!   logs and acknowledges. No mail or CRM integration here.
//! - The ROI estimator is a pure function over a business profile; the
//!   handler only fills industry defaults and validates ranges.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{Json, extract::State, http::StatusCode};
use tracing::{error, info};

use crate::http::errors::ApiError;
use crate::models::{ContactAck, ContactSubmission, ProblemInvalidParam, RoiProjection, RoiRequest};
use crate::state::ApiState;

/// Destination for accepted contact submissions.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver one submission.
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<()>;
}

/// Default sink: structured log line, no external delivery.
pub struct LoggingSink;

#[async_trait]
impl SubmissionSink for LoggingSink {
    async fn deliver(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        info!(
            name = %submission.name,
            email = %submission.email,
            solution = submission.solution.as_deref().unwrap_or("-"),
            industry = submission.industry.as_deref().unwrap_or("-"),
            market = submission.market.as_deref().unwrap_or("-"),
            interests = submission.interests.len(),
            "contact submission received"
        );
        Ok(())
    }
}

fn validate_submission(submission: &ContactSubmission) -> Vec<ProblemInvalidParam> {
    let mut invalid = Vec::new();
    if submission.name.trim().is_empty() {
        invalid.push(ProblemInvalidParam {
            pointer: "/name".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if submission.email.trim().is_empty() || !submission.email.contains('@') {
        invalid.push(ProblemInvalidParam {
            pointer: "/email".to_string(),
            message: "must be a valid email address".to_string(),
        });
    }
    if submission.message.trim().is_empty() {
        invalid.push(ProblemInvalidParam {
            pointer: "/message".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    invalid
}

pub(crate) async fn submit_contact(
    State(state): State<Arc<ApiState>>,
    Json(submission): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<ContactAck>), ApiError> {
    let invalid = validate_submission(&submission);
    if !invalid.is_empty() {
        return Err(ApiError::bad_request("submission failed validation")
            .with_invalid_params(invalid));
    }
    if let Err(err) = state.sink.deliver(&submission).await {
        error!(error = %err, "submission sink rejected a contact submission");
        return Err(ApiError::internal("submission could not be delivered"));
    }
    state.telemetry.inc_contact_submission();
    Ok((StatusCode::ACCEPTED, Json(ContactAck { status: "accepted" })))
}

/// Business parameters feeding the ROI arithmetic, fully defaulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BusinessProfile {
    pub(crate) employee_hourly_cost: f64,
    pub(crate) monthly_employee_hours: f64,
    pub(crate) monthly_customer_volume: f64,
    pub(crate) average_order_value: f64,
    pub(crate) conversion_rate: f64,
    pub(crate) error_rate: f64,
    pub(crate) customer_satisfaction: f64,
    pub(crate) response_time_minutes: f64,
}

impl BusinessProfile {
    /// Baseline defaults, adjusted per industry where field data exists.
    pub(crate) fn for_industry(industry: Option<&str>) -> Self {
        let base = Self {
            employee_hourly_cost: 25.0,
            monthly_employee_hours: 160.0,
            monthly_customer_volume: 1000.0,
            average_order_value: 50.0,
            conversion_rate: 0.2,
            error_rate: 0.05,
            customer_satisfaction: 3.5,
            response_time_minutes: 3.0,
        };
        match industry {
            Some("restaurants") => Self {
                employee_hourly_cost: 18.0,
                monthly_customer_volume: 2000.0,
                average_order_value: 30.0,
                error_rate: 0.08,
                response_time_minutes: 5.0,
                customer_satisfaction: 3.8,
                ..base
            },
            Some("hospitality") => Self {
                employee_hourly_cost: 22.0,
                monthly_customer_volume: 1500.0,
                average_order_value: 120.0,
                error_rate: 0.04,
                response_time_minutes: 2.0,
                customer_satisfaction: 4.0,
                ..base
            },
            Some("healthcare") => Self {
                employee_hourly_cost: 35.0,
                monthly_customer_volume: 800.0,
                average_order_value: 200.0,
                error_rate: 0.02,
                response_time_minutes: 1.0,
                customer_satisfaction: 3.7,
                ..base
            },
            Some("retail") => Self {
                employee_hourly_cost: 20.0,
                monthly_customer_volume: 3000.0,
                average_order_value: 45.0,
                error_rate: 0.06,
                response_time_minutes: 4.0,
                customer_satisfaction: 3.6,
                ..base
            },
            Some("call-centers") => Self {
                employee_hourly_cost: 22.0,
                monthly_customer_volume: 5000.0,
                average_order_value: 40.0,
                error_rate: 0.07,
                response_time_minutes: 6.0,
                customer_satisfaction: 3.2,
                ..base
            },
            _ => base,
        }
    }

    fn apply(mut self, request: &RoiRequest) -> Self {
        if let Some(value) = request.employee_hourly_cost {
            self.employee_hourly_cost = value;
        }
        if let Some(value) = request.monthly_employee_hours {
            self.monthly_employee_hours = value;
        }
        if let Some(value) = request.monthly_customer_volume {
            self.monthly_customer_volume = value;
        }
        if let Some(value) = request.average_order_value {
            self.average_order_value = value;
        }
        if let Some(value) = request.conversion_rate {
            self.conversion_rate = value;
        }
        if let Some(value) = request.error_rate {
            self.error_rate = value;
        }
        if let Some(value) = request.customer_satisfaction {
            self.customer_satisfaction = value;
        }
        if let Some(value) = request.response_time_minutes {
            self.response_time_minutes = value;
        }
        self
    }

    fn validate(&self) -> Vec<ProblemInvalidParam> {
        let mut invalid = Vec::new();
        let positive: [(&str, f64); 4] = [
            ("/employee_hourly_cost", self.employee_hourly_cost),
            ("/monthly_employee_hours", self.monthly_employee_hours),
            ("/monthly_customer_volume", self.monthly_customer_volume),
            ("/average_order_value", self.average_order_value),
        ];
        for (pointer, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                invalid.push(ProblemInvalidParam {
                    pointer: pointer.to_string(),
                    message: "must be a positive number".to_string(),
                });
            }
        }
        for (pointer, value) in [
            ("/conversion_rate", self.conversion_rate),
            ("/error_rate", self.error_rate),
        ] {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                invalid.push(ProblemInvalidParam {
                    pointer: pointer.to_string(),
                    message: "must be a fraction in (0, 1]".to_string(),
                });
            }
        }
        if !self.customer_satisfaction.is_finite()
            || !(1.0..=5.0).contains(&self.customer_satisfaction)
        {
            invalid.push(ProblemInvalidParam {
                pointer: "/customer_satisfaction".to_string(),
                message: "must be between 1 and 5".to_string(),
            });
        }
        if !self.response_time_minutes.is_finite() || self.response_time_minutes <= 0.0 {
            invalid.push(ProblemInvalidParam {
                pointer: "/response_time_minutes".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        invalid
    }

    /// Monthly solution cost: base per industry, scaled by volume.
    fn monthly_cost(&self, industry: Option<&str>) -> f64 {
        let base: f64 = match industry {
            Some("healthcare") => 1500.0,
            Some("hospitality") => 1200.0,
            Some("call-centers") => 2000.0,
            _ => 1000.0,
        };
        let scaled = if self.monthly_customer_volume > 5000.0 {
            base * 1.5
        } else if self.monthly_customer_volume > 2000.0 {
            base * 1.2
        } else {
            base
        };
        scaled.round()
    }

    /// Project the return: 40% staff-time reduction, 30% conversion lift,
    /// 60% error reduction (half an order value per error, half the errors
    /// costed), satisfaction lifted 20% capped at 5 (each full point worth
    /// 10% of revenue), and 30% faster responses.
    pub(crate) fn project(&self, industry: Option<&str>) -> RoiProjection {
        let staff_savings = self.employee_hourly_cost * self.monthly_employee_hours * 0.4;

        let current_revenue =
            self.monthly_customer_volume * self.average_order_value * self.conversion_rate;
        let lifted_revenue =
            self.monthly_customer_volume * self.average_order_value * self.conversion_rate * 1.3;
        let revenue_increase = lifted_revenue - current_revenue;

        let current_error_cost =
            self.monthly_customer_volume * self.average_order_value * self.error_rate * 0.5;
        let projected_error_rate = self.error_rate * 0.4;
        let projected_error_cost =
            self.monthly_customer_volume * self.average_order_value * projected_error_rate * 0.5;
        let error_reduction_savings = current_error_cost - projected_error_cost;

        let projected_satisfaction = (self.customer_satisfaction * 1.2).min(5.0);
        let satisfaction_gain = projected_satisfaction - self.customer_satisfaction;
        let satisfaction_revenue = (satisfaction_gain / 5.0)
            * self.monthly_customer_volume
            * self.average_order_value
            * 0.1;

        let projected_response_time = self.response_time_minutes * 0.7;
        let response_time_savings = (self.response_time_minutes - projected_response_time)
            * (self.monthly_customer_volume / 60.0)
            * (self.employee_hourly_cost / 60.0);

        let total_monthly_benefit = staff_savings
            + revenue_increase
            + error_reduction_savings
            + satisfaction_revenue
            + response_time_savings;

        let monthly_cost = self.monthly_cost(industry);
        let annual_benefit = total_monthly_benefit * 12.0;
        let annual_cost = monthly_cost * 12.0;
        let roi_percent = (annual_benefit - annual_cost) / annual_cost * 100.0;
        let payback_months = annual_cost / annual_benefit * 12.0;

        RoiProjection {
            monthly_staff_savings: staff_savings.round(),
            monthly_revenue_increase: revenue_increase.round(),
            error_reduction_savings: error_reduction_savings.round(),
            satisfaction_revenue: satisfaction_revenue.round(),
            response_time_savings: response_time_savings.round(),
            total_monthly_benefit: total_monthly_benefit.round(),
            monthly_cost,
            annual_benefit: annual_benefit.round(),
            annual_cost,
            roi_percent: roi_percent.round(),
            payback_months: payback_months.round(),
            projected_satisfaction,
            projected_response_time_minutes: projected_response_time,
            projected_error_rate,
        }
    }
}

#[allow(clippy::unused_async)]
pub(crate) async fn project_roi(
    Json(request): Json<RoiRequest>,
) -> Result<Json<RoiProjection>, ApiError> {
    let industry = request.industry.as_deref();
    let profile = BusinessProfile::for_industry(industry).apply(&request);
    let invalid = profile.validate();
    if !invalid.is_empty() {
        return Err(
            ApiError::bad_request("parameters failed validation").with_invalid_params(invalid)
        );
    }
    Ok(Json(profile.project(industry)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_projects_positive_roi() {
        let profile = BusinessProfile::for_industry(None);
        let projection = profile.project(None);
        // 25 * 160 * 0.4
        assert!((projection.monthly_staff_savings - 1600.0).abs() < f64::EPSILON);
        // 1000 * 50 * 0.2 * 0.3
        assert!((projection.monthly_revenue_increase - 3000.0).abs() < f64::EPSILON);
        assert!(projection.roi_percent > 0.0);
        assert!((projection.monthly_cost - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn satisfaction_lift_is_capped_at_five() {
        let profile = BusinessProfile {
            customer_satisfaction: 4.8,
            ..BusinessProfile::for_industry(None)
        };
        let projection = profile.project(None);
        assert!((projection.projected_satisfaction - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn industry_defaults_shift_the_cost_base() {
        let healthcare = BusinessProfile::for_industry(Some("healthcare"));
        let projection = healthcare.project(Some("healthcare"));
        assert!((projection.monthly_cost - 1500.0).abs() < f64::EPSILON);

        let call_centers = BusinessProfile::for_industry(Some("call-centers"));
        let projection = call_centers.project(Some("call-centers"));
        // Base 2000 scaled by 1.2 for volumes over 2000.
        assert!((projection.monthly_cost - 2400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn overrides_replace_industry_defaults() {
        let request = RoiRequest {
            industry: Some("restaurants".to_string()),
            monthly_customer_volume: Some(6000.0),
            ..RoiRequest::default()
        };
        let profile = BusinessProfile::for_industry(Some("restaurants")).apply(&request);
        assert!((profile.monthly_customer_volume - 6000.0).abs() < f64::EPSILON);
        assert!((profile.employee_hourly_cost - 18.0).abs() < f64::EPSILON);
        let projection = profile.project(Some("restaurants"));
        // Base 1000 scaled by 1.5 for volumes over 5000.
        assert!((projection.monthly_cost - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_rates_fail_validation() {
        let profile = BusinessProfile {
            conversion_rate: 1.5,
            error_rate: 0.0,
            ..BusinessProfile::for_industry(None)
        };
        let invalid = profile.validate();
        let pointers: Vec<&str> = invalid.iter().map(|p| p.pointer.as_str()).collect();
        assert!(pointers.contains(&"/conversion_rate"));
        assert!(pointers.contains(&"/error_rate"));
    }

    #[test]
    fn submission_validation_flags_missing_fields() {
        let submission = ContactSubmission {
            name: String::new(),
            email: "not-an-email".to_string(),
            company: None,
            phone: None,
            industry: None,
            message: "hello".to_string(),
            solution: None,
            market: None,
            interests: Vec::new(),
        };
        let invalid = validate_submission(&submission);
        let pointers: Vec<&str> = invalid.iter().map(|p| p.pointer.as_str()).collect();
        assert_eq!(pointers, vec!["/name", "/email"]);
    }

    #[tokio::test]
    async fn logging_sink_accepts_submissions() {
        let submission = ContactSubmission {
            name: "Avery".to_string(),
            email: "avery@example.com".to_string(),
            company: Some("Example Co".to_string()),
            phone: None,
            industry: Some("retail".to_string()),
            message: "Tell me more.".to_string(),
            solution: Some("insightai".to_string()),
            market: Some("canada".to_string()),
            interests: vec!["demo".to_string()],
        };
        LoggingSink
            .deliver(&submission)
            .await
            .expect("logging sink never fails");
    }
}
