use axum::{Router, routing::get};

use super::handlers::{create_centro_treinamento, list_centros_treinamento};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let centros = get(list_centros_treinamento).post(create_centro_treinamento);

    Router::new()
        .route("/centros_treinamento", centros.clone())
        .route("/centros_treinamento/", centros)
}
