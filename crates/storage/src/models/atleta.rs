use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An athlete row with its category and training center resolved to names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Atleta {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: Decimal,
    pub altura: Decimal,
    pub sexo: String,
    pub created_at: chrono::NaiveDateTime,
    pub categoria: String,
    pub centro_treinamento: String,
}
