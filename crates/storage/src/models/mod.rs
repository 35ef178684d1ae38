mod atleta;
mod categoria;
mod centro_treinamento;

pub use atleta::Atleta;
pub use categoria::Categoria;
pub use centro_treinamento::CentroTreinamento;
