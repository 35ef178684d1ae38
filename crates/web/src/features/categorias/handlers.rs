use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;
use workout_storage::{dto::categoria::CreateCategoriaRequest, models::Categoria};

use crate::{error::WebResult, state::AppState};

#[utoipa::path(
    get,
    path = "/categorias/",
    responses(
        (status = 200, description = "List all categories", body = Vec<Categoria>)
    ),
    tag = "categorias"
)]
pub async fn list_categorias(State(state): State<AppState>) -> WebResult<Response> {
    let categorias = state.categorias.list().await?;

    Ok(Json(categorias).into_response())
}

#[utoipa::path(
    post,
    path = "/categorias/",
    request_body = CreateCategoriaRequest,
    responses(
        (status = 201, description = "Category created successfully", body = Categoria),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A category with this name already exists")
    ),
    tag = "categorias"
)]
pub async fn create_categoria(
    State(state): State<AppState>,
    payload: Result<Json<CreateCategoriaRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let categoria = state.categorias.insert(&req).await?;

    Ok((StatusCode::CREATED, Json(categoria)).into_response())
}
