use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;
use workout_storage::{
    dto::centro_treinamento::CreateCentroTreinamentoRequest, models::CentroTreinamento,
};

use crate::{error::WebResult, state::AppState};

#[utoipa::path(
    get,
    path = "/centros_treinamento/",
    responses(
        (status = 200, description = "List all training centers", body = Vec<CentroTreinamento>)
    ),
    tag = "centros_treinamento"
)]
pub async fn list_centros_treinamento(
    State(state): State<AppState>,
) -> WebResult<Response> {
    let centros = state.centros_treinamento.list().await?;

    Ok(Json(centros).into_response())
}

#[utoipa::path(
    post,
    path = "/centros_treinamento/",
    request_body = CreateCentroTreinamentoRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = CentroTreinamento),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A training center with this name already exists")
    ),
    tag = "centros_treinamento"
)]
pub async fn create_centro_treinamento(
    State(state): State<AppState>,
    payload: Result<Json<CreateCentroTreinamentoRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    let centro = state.centros_treinamento.insert(&req).await?;

    Ok((StatusCode::CREATED, Json(centro)).into_response())
}
