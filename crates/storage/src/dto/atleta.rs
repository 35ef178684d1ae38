use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::query::Predicate;

/// Optional filters accepted by the athlete listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct AtletaFilter {
    /// Case-insensitive substring of the athlete name
    pub nome: Option<String>,
    /// Exact CPF
    pub cpf: Option<String>,
}

impl AtletaFilter {
    /// Builds the predicate list for this filter. Empty values are ignored.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(nome) = non_empty(&self.nome) {
            predicates.push(Predicate::nome_contains(nome));
        }

        if let Some(cpf) = non_empty(&self.cpf) {
            predicates.push(Predicate::cpf_equals(cpf));
        }

        predicates
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Summary view returned by the athlete listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AtletaResumo {
    pub nome: String,
    pub centro_treinamento: String,
    pub categoria: String,
}

impl From<crate::models::Atleta> for AtletaResumo {
    fn from(atleta: crate::models::Atleta) -> Self {
        Self {
            nome: atleta.nome,
            centro_treinamento: atleta.centro_treinamento,
            categoria: atleta.categoria,
        }
    }
}

/// Reference to a category by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoriaRef {
    #[validate(length(min = 1, max = 10, message = "Category name must be between 1 and 10 characters"))]
    pub nome: String,
}

/// Reference to a training center by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CentroTreinamentoRef {
    #[validate(length(min = 1, max = 20, message = "Training center name must be between 1 and 20 characters"))]
    pub nome: String,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAtletaRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub nome: String,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub idade: i32,

    #[validate(custom(function = "validate_peso"))]
    pub peso: Decimal,

    #[validate(custom(function = "validate_altura"))]
    pub altura: Decimal,

    #[validate(custom(function = "validate_sexo"))]
    pub sexo: String,

    #[validate(nested)]
    pub categoria: CategoriaRef,

    #[validate(nested)]
    pub centro_treinamento: CentroTreinamentoRef,
}

/// Full athlete record returned after creation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AtletaResponse {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: Decimal,
    pub altura: Decimal,
    pub sexo: String,
    pub created_at: NaiveDateTime,
    pub categoria: CategoriaRef,
    pub centro_treinamento: CentroTreinamentoRef,
}

impl From<crate::models::Atleta> for AtletaResponse {
    fn from(atleta: crate::models::Atleta) -> Self {
        Self {
            id: atleta.id,
            nome: atleta.nome,
            cpf: atleta.cpf,
            idade: atleta.idade,
            peso: atleta.peso,
            altura: atleta.altura,
            sexo: atleta.sexo,
            created_at: atleta.created_at,
            categoria: CategoriaRef {
                nome: atleta.categoria,
            },
            centro_treinamento: CentroTreinamentoRef {
                nome: atleta.centro_treinamento,
            },
        }
    }
}

// Validation helpers
fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    if cpf.len() == 11 && cpf.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_cpf");
        error.message = Some("CPF must contain exactly 11 digits".into());
        Err(error)
    }
}

fn validate_sexo(sexo: &str) -> Result<(), validator::ValidationError> {
    const VALID_SEXOS: &[&str] = &["M", "F"];

    if VALID_SEXOS.contains(&sexo) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_sexo"))
    }
}

// Measures are stored as NUMERIC(6, 2) and NUMERIC(4, 2)
const MEASURE_SCALE: u32 = 2;
const MAX_PESO: Decimal = Decimal::from_parts(999_999, 0, 0, false, 2);
const MAX_ALTURA: Decimal = Decimal::from_parts(9_999, 0, 0, false, 2);

fn validate_peso(peso: &Decimal) -> Result<(), validator::ValidationError> {
    validate_measure(peso, MAX_PESO)
}

fn validate_altura(altura: &Decimal) -> Result<(), validator::ValidationError> {
    validate_measure(altura, MAX_ALTURA)
}

fn validate_measure(value: &Decimal, max: Decimal) -> Result<(), validator::ValidationError> {
    if !value.is_sign_positive() || value.is_zero() {
        return Err(validator::ValidationError::new("not_positive"));
    }

    if *value > max {
        let mut error = validator::ValidationError::new("out_of_range");
        error.message = Some(format!("Must not exceed {}", max).into());
        return Err(error);
    }

    if value.normalize().scale() > MEASURE_SCALE {
        let mut error = validator::ValidationError::new("too_precise");
        error.message = Some("At most 2 decimal places are allowed".into());
        return Err(error);
    }

    Ok(())
}
