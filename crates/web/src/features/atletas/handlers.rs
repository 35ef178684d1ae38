use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;
use workout_storage::{
    dto::atleta::{AtletaFilter, AtletaResponse, AtletaResumo, CreateAtletaRequest},
    services::atletas::{self, CreateOutcome},
};

use crate::{
    error::{WebError, WebResult},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/atletas/",
    params(AtletaFilter),
    responses(
        (status = 200, description = "Athletes matching the optional filters", body = Vec<AtletaResumo>)
    ),
    tag = "atletas"
)]
pub async fn query_atletas(
    State(state): State<AppState>,
    Query(filter): Query<AtletaFilter>,
) -> WebResult<Response> {
    let resumo = atletas::query_atletas(state.atletas.as_ref(), &filter).await?;

    Ok(Json(resumo).into_response())
}

#[utoipa::path(
    post,
    path = "/atletas/",
    request_body = CreateAtletaRequest,
    responses(
        (status = 201, description = "Athlete created successfully", body = AtletaResponse),
        (status = 303, description = "An athlete with this CPF already exists"),
        (status = 400, description = "Validation error or rejected insert")
    ),
    tag = "atletas"
)]
pub async fn create_atleta(
    State(state): State<AppState>,
    payload: Result<Json<CreateAtletaRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(req) = payload?;
    req.validate()?;

    match atletas::create_atleta(state.atletas.as_ref(), &req).await? {
        CreateOutcome::Committed(atleta) => {
            tracing::info!("Created athlete {}", atleta.id);
            Ok((StatusCode::CREATED, Json(AtletaResponse::from(atleta))).into_response())
        }
        CreateOutcome::Conflict { message, .. } => Err(WebError::SeeOther(message)),
        CreateOutcome::Invalid { message } => Err(WebError::BadRequest(message)),
    }
}
