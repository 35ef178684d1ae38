//! Process-local store with the same constraint behaviour as the PostgreSQL
//! schema. Used by the test suites and by embedders that need no database.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dto::atleta::CreateAtletaRequest;
use crate::dto::categoria::CreateCategoriaRequest;
use crate::dto::centro_treinamento::CreateCentroTreinamentoRequest;
use crate::error::{IntegrityViolation, Result, StorageError};
use crate::models::{Atleta, Categoria, CentroTreinamento};
use crate::query::{self, Predicate};
use crate::store::{AtletaStore, CategoriaStore, CentroTreinamentoStore};

#[derive(Default)]
struct Tables {
    categorias: Vec<Categoria>,
    centros_treinamento: Vec<CentroTreinamento>,
    atletas: Vec<Atleta>,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_null_violation(column: &str) -> StorageError {
    StorageError::Integrity(IntegrityViolation::new(
        format!(
            r#"null value in column "{}" of relation "atletas" violates not-null constraint"#,
            column
        ),
        None,
    ))
}

fn unique_violation(constraint: &str) -> IntegrityViolation {
    IntegrityViolation::new(
        format!(
            r#"duplicate key value violates unique constraint "{}""#,
            constraint
        ),
        Some(constraint),
    )
}

#[async_trait]
impl AtletaStore for InMemoryStore {
    async fn select(&self, predicates: &[Predicate]) -> Result<Vec<Atleta>> {
        let tables = self.tables.read().await;

        let atletas = tables
            .atletas
            .iter()
            .filter(|atleta| query::matches_all(predicates, atleta))
            .cloned()
            .collect();

        Ok(atletas)
    }

    async fn insert(&self, req: &CreateAtletaRequest) -> Result<Atleta> {
        let mut tables = self.tables.write().await;

        // Every check runs before the row is pushed, so a rejected insert
        // leaves the tables untouched.
        let categoria = tables
            .categorias
            .iter()
            .find(|c| c.nome == req.categoria.nome)
            .cloned()
            .ok_or_else(|| not_null_violation("categoria_id"))?;

        let centro = tables
            .centros_treinamento
            .iter()
            .find(|c| c.nome == req.centro_treinamento.nome)
            .cloned()
            .ok_or_else(|| not_null_violation("centro_treinamento_id"))?;

        if tables.atletas.iter().any(|a| a.cpf == req.cpf) {
            return Err(StorageError::Integrity(unique_violation("atletas_cpf_key")));
        }

        let atleta = Atleta {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
            cpf: req.cpf.clone(),
            idade: req.idade,
            peso: req.peso,
            altura: req.altura,
            sexo: req.sexo.clone(),
            created_at: chrono::Utc::now().naive_utc(),
            categoria: categoria.nome,
            centro_treinamento: centro.nome,
        };

        tables.atletas.push(atleta.clone());

        Ok(atleta)
    }
}

#[async_trait]
impl CategoriaStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Categoria>> {
        let tables = self.tables.read().await;
        let mut categorias = tables.categorias.clone();
        categorias.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(categorias)
    }

    async fn insert(&self, req: &CreateCategoriaRequest) -> Result<Categoria> {
        let mut tables = self.tables.write().await;

        if tables.categorias.iter().any(|c| c.nome == req.nome) {
            return Err(StorageError::ConstraintViolation(format!(
                "Já existe uma categoria cadastrada com o nome: {}",
                req.nome
            )));
        }

        let categoria = Categoria {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
        };
        tables.categorias.push(categoria.clone());

        Ok(categoria)
    }
}

#[async_trait]
impl CentroTreinamentoStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<CentroTreinamento>> {
        let tables = self.tables.read().await;
        let mut centros = tables.centros_treinamento.clone();
        centros.sort_by(|a, b| a.nome.cmp(&b.nome));
        Ok(centros)
    }

    async fn insert(&self, req: &CreateCentroTreinamentoRequest) -> Result<CentroTreinamento> {
        let mut tables = self.tables.write().await;

        if tables.centros_treinamento.iter().any(|c| c.nome == req.nome) {
            return Err(StorageError::ConstraintViolation(format!(
                "Já existe um centro de treinamento cadastrado com o nome: {}",
                req.nome
            )));
        }

        let centro = CentroTreinamento {
            id: Uuid::new_v4(),
            nome: req.nome.clone(),
            endereco: req.endereco.clone(),
            proprietario: req.proprietario.clone(),
        };
        tables.centros_treinamento.push(centro.clone());

        Ok(centro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_categoria_is_constraint_violation() {
        let store = InMemoryStore::new();
        let req = CreateCategoriaRequest {
            nome: "Scale".to_string(),
        };

        CategoriaStore::insert(&store, &req).await.unwrap();
        let err = CategoriaStore::insert(&store, &req).await.unwrap_err();

        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        assert_eq!(CategoriaStore::list(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_centros_are_listed_by_name() {
        let store = InMemoryStore::new();
        for nome in ["CT Sul", "CT Norte"] {
            let req = CreateCentroTreinamentoRequest {
                nome: nome.to_string(),
                endereco: "Rua A, 10".to_string(),
                proprietario: "Marcos".to_string(),
            };
            CentroTreinamentoStore::insert(&store, &req).await.unwrap();
        }

        let nomes: Vec<String> = CentroTreinamentoStore::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.nome)
            .collect();

        assert_eq!(nomes, vec!["CT Norte", "CT Sul"]);
    }
}
