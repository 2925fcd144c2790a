#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the premium prediction server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the applicant domain types to allow independent
//! evolution of the API contract. Field names are the wire contract
//! and stay snake_case.

use premium_api_applicant_models::ApplicantInput;
use premium_api_features::ValidationError;
use serde::{Deserialize, Serialize};

/// Request body for the predict endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// Age in whole years.
    pub age: i64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Height in centimeters.
    pub height: f64,
    /// Annual income in lakhs per annum.
    pub income_lpa: f64,
    /// Whether the applicant smokes.
    pub smoker: bool,
    /// City of residence.
    pub city: String,
    /// Occupation category name.
    pub occupation: String,
}

impl From<PredictRequest> for ApplicantInput {
    fn from(req: PredictRequest) -> Self {
        Self {
            age: req.age,
            weight: req.weight,
            height: req.height,
            income_lpa: req.income_lpa,
            smoker: req.smoker,
            city: req.city,
            occupation: req.occupation,
        }
    }
}

/// Successful prediction response.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    /// Predicted premium category label.
    pub predicted_category: String,
}

/// Welcome message returned by the root endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiWelcome {
    /// Human-readable welcome text.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiHealth {
    /// Human-readable service status.
    pub status: String,
    /// Semantic version of the loaded model.
    pub version: String,
}

/// A single violated field constraint in a validation error response.
#[derive(Debug, Clone, Serialize)]
pub struct ApiFieldError {
    /// Name of the offending field.
    pub field: String,
    /// Description of the violated constraint.
    pub message: String,
}

/// Validation error response body, enumerating every violated
/// constraint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorBody {
    /// One entry per violated constraint.
    pub errors: Vec<ApiFieldError>,
}

impl From<ValidationError> for ValidationErrorBody {
    fn from(err: ValidationError) -> Self {
        Self {
            errors: err
                .errors
                .into_iter()
                .map(|e| ApiFieldError {
                    field: e.field.to_string(),
                    message: e.message,
                })
                .collect(),
        }
    }
}
