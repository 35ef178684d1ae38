use axum::{Router, routing::get};

use super::handlers::{create_atleta, query_atletas};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let atletas = get(query_atletas).post(create_atleta);

    Router::new()
        .route("/atletas", atletas.clone())
        .route("/atletas/", atletas)
}
