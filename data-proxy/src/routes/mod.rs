use axum::{http::StatusCode, routing::get, Json, Router};
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::models::ErrorBody;
use crate::state::AppState;

pub mod contributions;
pub mod frontend;
pub mod health;

/// Build the application router.
///
/// Everything under `/api` is JSON. With a `static_dir` the built web
/// frontend is served for all other paths.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    // Any origin may call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health::health_check))
        .route("/hello", get(health::hello))
        .route("/get-data", get(contributions::get_data))
        .fallback(api_not_found)
        .with_state(state);

    let app = Router::new().nest("/api", api);

    let app = match static_dir {
        Some(dir) => app.fallback_service(frontend::serve_frontend(dir)),
        None => app,
    };

    app.layer(cors).layer(TraceLayer::new_for_http())
}

/// Unknown `/api` paths stay JSON 404s even when the frontend is served.
async fn api_not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not found")))
}
