pub mod config;
pub mod error;
pub mod features;
pub mod openapi;
pub mod state;

use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use openapi::ApiDoc;
use state::AppState;

/// Builds the application router over the given stores
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::atletas::routes())
        .merge(features::categorias::routes())
        .merge(features::centros_treinamento::routes())
        .layer(cors)
        .with_state(state)
}
