use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::atleta::CreateAtletaRequest;
use crate::error::{Result, StorageError};
use crate::models::Atleta;
use crate::query::Predicate;
use crate::store::AtletaStore;

const SELECT_ATLETAS: &str = r#"
    SELECT a.id, a.nome, a.cpf, a.idade, a.peso, a.altura, a.sexo, a.created_at,
           c.nome AS categoria, ct.nome AS centro_treinamento
    FROM atletas a
    INNER JOIN categorias c ON c.id = a.categoria_id
    INNER JOIN centros_treinamento ct ON ct.id = a.centro_treinamento_id
    WHERE 1=1
"#;

#[derive(Clone)]
pub struct AtletaRepository {
    pool: PgPool,
}

impl AtletaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AtletaStore for AtletaRepository {
    async fn select(&self, predicates: &[Predicate]) -> Result<Vec<Atleta>> {
        let mut query = QueryBuilder::new(SELECT_ATLETAS);

        for predicate in predicates {
            predicate.push_sql(&mut query);
        }

        let atletas = query.build_query_as::<Atleta>().fetch_all(&self.pool).await?;

        Ok(atletas)
    }

    async fn insert(&self, req: &CreateAtletaRequest) -> Result<Atleta> {
        let mut tx = self.pool.begin().await?;

        // Unknown category or training center names resolve to NULL and are
        // rejected by the NOT NULL constraints.
        let inserted = sqlx::query_as::<_, Atleta>(
            r#"
            WITH inserted AS (
                INSERT INTO atletas (id, nome, cpf, idade, peso, altura, sexo, created_at,
                                     categoria_id, centro_treinamento_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(),
                        (SELECT id FROM categorias WHERE nome = $8),
                        (SELECT id FROM centros_treinamento WHERE nome = $9))
                RETURNING id, nome, cpf, idade, peso, altura, sexo, created_at,
                          categoria_id, centro_treinamento_id
            )
            SELECT i.id, i.nome, i.cpf, i.idade, i.peso, i.altura, i.sexo, i.created_at,
                   c.nome AS categoria, ct.nome AS centro_treinamento
            FROM inserted i
            INNER JOIN categorias c ON c.id = i.categoria_id
            INNER JOIN centros_treinamento ct ON ct.id = i.centro_treinamento_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .bind(&req.cpf)
        .bind(req.idade)
        .bind(req.peso)
        .bind(req.altura)
        .bind(&req.sexo)
        .bind(&req.categoria.nome)
        .bind(&req.centro_treinamento.nome)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(atleta) => {
                tx.commit().await?;
                Ok(atleta)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!("Rollback after failed athlete insert failed: {}", rollback_err);
                }
                Err(StorageError::from_write(e))
            }
        }
    }
}
