use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CentroTreinamento {
    pub id: Uuid,
    pub nome: String,
    pub endereco: String,
    pub proprietario: String,
}
