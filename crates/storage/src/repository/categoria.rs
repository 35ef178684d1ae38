use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::categoria::CreateCategoriaRequest;
use crate::error::{Result, StorageError};
use crate::models::Categoria;
use crate::store::CategoriaStore;

#[derive(Clone)]
pub struct CategoriaRepository {
    pool: PgPool,
}

impl CategoriaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoriaStore for CategoriaRepository {
    /// List all categories
    async fn list(&self) -> Result<Vec<Categoria>> {
        let categorias =
            sqlx::query_as::<_, Categoria>("SELECT id, nome FROM categorias ORDER BY nome")
                .fetch_all(&self.pool)
                .await?;

        Ok(categorias)
    }

    /// Create a new category
    async fn insert(&self, req: &CreateCategoriaRequest) -> Result<Categoria> {
        let categoria = sqlx::query_as::<_, Categoria>(
            r#"
            INSERT INTO categorias (id, nome)
            VALUES ($1, $2)
            RETURNING id, nome
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).unique_as_conflict(|| {
                format!("Já existe uma categoria cadastrada com o nome: {}", req.nome)
            })
        })?;

        Ok(categoria)
    }
}
