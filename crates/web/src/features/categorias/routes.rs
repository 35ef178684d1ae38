use axum::{Router, routing::get};

use super::handlers::{create_categoria, list_categorias};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let categorias = get(list_categorias).post(create_categoria);

    Router::new()
        .route("/categorias", categorias.clone())
        .route("/categorias/", categorias)
}
