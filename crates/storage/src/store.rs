//! Persistence seams used by the services and the web layer.
//!
//! [`crate::repository`] implements them over PostgreSQL and
//! [`crate::memory::InMemoryStore`] keeps everything in process.

use async_trait::async_trait;

use crate::dto::atleta::CreateAtletaRequest;
use crate::dto::categoria::CreateCategoriaRequest;
use crate::dto::centro_treinamento::CreateCentroTreinamentoRequest;
use crate::error::Result;
use crate::models::{Atleta, Categoria, CentroTreinamento};
use crate::query::Predicate;

#[async_trait]
pub trait AtletaStore: Send + Sync {
    /// Athletes satisfying every predicate, in storage order.
    async fn select(&self, predicates: &[Predicate]) -> Result<Vec<Atleta>>;

    /// Persists a new athlete in a single unit of work.
    ///
    /// A rejected write leaves nothing behind and surfaces as
    /// [`crate::error::StorageError::Integrity`].
    async fn insert(&self, request: &CreateAtletaRequest) -> Result<Atleta>;
}

#[async_trait]
pub trait CategoriaStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Categoria>>;
    async fn insert(&self, request: &CreateCategoriaRequest) -> Result<Categoria>;
}

#[async_trait]
pub trait CentroTreinamentoStore: Send + Sync {
    async fn list(&self) -> Result<Vec<CentroTreinamento>>;
    async fn insert(&self, request: &CreateCentroTreinamentoRequest) -> Result<CentroTreinamento>;
}
