use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoriaRequest {
    #[validate(length(
        min = 1,
        max = 10,
        message = "Category name must be between 1 and 10 characters"
    ))]
    pub nome: String,
}
