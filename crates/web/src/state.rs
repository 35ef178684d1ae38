use std::sync::Arc;

use workout_storage::{
    Database,
    memory::InMemoryStore,
    repository::{AtletaRepository, CategoriaRepository, CentroTreinamentoRepository},
    store::{AtletaStore, CategoriaStore, CentroTreinamentoStore},
};

/// Stores shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub atletas: Arc<dyn AtletaStore>,
    pub categorias: Arc<dyn CategoriaStore>,
    pub centros_treinamento: Arc<dyn CentroTreinamentoStore>,
}

impl AppState {
    pub fn from_database(db: &Database) -> Self {
        Self {
            atletas: Arc::new(AtletaRepository::new(db.pool().clone())),
            categorias: Arc::new(CategoriaRepository::new(db.pool().clone())),
            centros_treinamento: Arc::new(CentroTreinamentoRepository::new(db.pool().clone())),
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());

        Self {
            atletas: store.clone(),
            categorias: store.clone(),
            centros_treinamento: store,
        }
    }
}
