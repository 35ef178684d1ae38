use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCentroTreinamentoRequest {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Training center name must be between 1 and 20 characters"
    ))]
    pub nome: String,

    #[validate(length(min = 1, max = 60, message = "Address is required"))]
    pub endereco: String,

    #[validate(length(min = 1, max = 30, message = "Owner is required"))]
    pub proprietario: String,
}
