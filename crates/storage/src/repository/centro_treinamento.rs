use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::centro_treinamento::CreateCentroTreinamentoRequest;
use crate::error::{Result, StorageError};
use crate::models::CentroTreinamento;
use crate::store::CentroTreinamentoStore;

#[derive(Clone)]
pub struct CentroTreinamentoRepository {
    pool: PgPool,
}

impl CentroTreinamentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CentroTreinamentoStore for CentroTreinamentoRepository {
    /// List all training centers
    async fn list(&self) -> Result<Vec<CentroTreinamento>> {
        let centros = sqlx::query_as::<_, CentroTreinamento>(
            r#"
            SELECT id, nome, endereco, proprietario
            FROM centros_treinamento
            ORDER BY nome
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(centros)
    }

    /// Create a new training center
    async fn insert(&self, req: &CreateCentroTreinamentoRequest) -> Result<CentroTreinamento> {
        let centro = sqlx::query_as::<_, CentroTreinamento>(
            r#"
            INSERT INTO centros_treinamento (id, nome, endereco, proprietario)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, endereco, proprietario
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .bind(&req.endereco)
        .bind(&req.proprietario)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).unique_as_conflict(|| {
                format!(
                    "Já existe um centro de treinamento cadastrado com o nome: {}",
                    req.nome
                )
            })
        })?;

        Ok(centro)
    }
}
