use utoipa::OpenApi;

use crate::features::{atletas, categorias, centros_treinamento};

#[derive(OpenApi)]
#[openapi(
    info(title = "WorkoutApi"),
    paths(
        atletas::handlers::query_atletas,
        atletas::handlers::create_atleta,
        categorias::handlers::list_categorias,
        categorias::handlers::create_categoria,
        centros_treinamento::handlers::list_centros_treinamento,
        centros_treinamento::handlers::create_centro_treinamento,
    ),
    components(
        schemas(
            workout_storage::dto::atleta::AtletaResumo,
            workout_storage::dto::atleta::AtletaResponse,
            workout_storage::dto::atleta::CreateAtletaRequest,
            workout_storage::dto::atleta::CategoriaRef,
            workout_storage::dto::atleta::CentroTreinamentoRef,
            workout_storage::dto::categoria::CreateCategoriaRequest,
            workout_storage::dto::centro_treinamento::CreateCentroTreinamentoRequest,
            workout_storage::models::Categoria,
            workout_storage::models::CentroTreinamento,
        )
    ),
    tags(
        (name = "atletas", description = "Athlete endpoints"),
        (name = "categorias", description = "Category endpoints"),
        (name = "centros_treinamento", description = "Training center endpoints"),
    )
)]
pub struct ApiDoc;
