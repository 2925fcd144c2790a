#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for insurance premium prediction.
//!
//! Serves a single-model inference API: raw applicant attributes are
//! validated, mapped to engineered features, and fed to the premium
//! model loaded once at startup. The model handle is shared read-only
//! across all request handlers.

mod handlers;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use premium_api_model::PremiumModel;
use premium_api_server_models::{ApiFieldError, ValidationErrorBody};

/// Shared application state.
pub struct AppState {
    /// Loaded premium model, immutable for the process lifetime.
    pub model: Arc<PremiumModel>,
}

/// JSON body configuration mapping deserialization failures (malformed
/// JSON, missing fields, wrong types) onto the same error shape the
/// validator produces.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ValidationErrorBody {
            errors: vec![ApiFieldError {
                field: "body".to_string(),
                message: err.to_string(),
            }],
        };
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(body),
        )
        .into()
    })
}

/// Starts the premium prediction API server.
///
/// Loads the model artifact (path from `MODEL_PATH`, default
/// `data/model.json`), then binds and serves the HTTP API on
/// `BIND_ADDR`/`PORT`. This is a regular async function — the caller
/// is responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an error if the model artifact is missing or malformed, or
/// if the HTTP server fails to bind or encounters a runtime error. A
/// model load failure is fatal: the process never starts serving.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let model_path = std::env::var("MODEL_PATH").unwrap_or_else(|_| "data/model.json".to_string());

    log::info!("Loading model artifact from {model_path}...");
    let model = PremiumModel::load(Path::new(&model_path)).map_err(std::io::Error::other)?;
    log::info!("Loaded premium model version {}", model.version());

    let state = web::Data::new(AppState {
        model: Arc::new(model),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(json_config())
            .route("/", web::get().to(handlers::home))
            .route("/health", web::get().to(handlers::health))
            .route("/predict", web::post().to(handlers::predict))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
