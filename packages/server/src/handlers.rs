//! HTTP handler functions for the premium prediction API.

use actix_web::{HttpResponse, web};
use premium_api_applicant_models::ApplicantInput;
use premium_api_features::{derive, validate};
use premium_api_server_models::{
    ApiHealth, ApiWelcome, PredictRequest, PredictResponse, ValidationErrorBody,
};

use crate::AppState;

/// `GET /`
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(ApiWelcome {
        message: "Welcome to the Insurance Premium Prediction API. Use the /predict endpoint to \
                  get predictions."
            .to_string(),
    })
}

/// `GET /health`
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        status: "API is healthy and running.".to_string(),
        version: state.model.version().to_string(),
    })
}

/// `POST /predict`
///
/// Validates the applicant, derives the engineered features, and runs
/// model inference. Validation failures come back as 422 with every
/// violated constraint; inference failures as 500 without crashing the
/// process.
pub async fn predict(state: web::Data<AppState>, body: web::Json<PredictRequest>) -> HttpResponse {
    let input = ApplicantInput::from(body.into_inner());

    let applicant = match validate::validate(&input) {
        Ok(applicant) => applicant,
        Err(err) => {
            return HttpResponse::UnprocessableEntity().json(ValidationErrorBody::from(err));
        }
    };

    let features = derive::derive(&applicant);

    match state.model.predict(&features) {
        Ok(label) => HttpResponse::Ok().json(PredictResponse {
            predicted_category: label,
        }),
        Err(e) => {
            log::error!("Prediction failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}
