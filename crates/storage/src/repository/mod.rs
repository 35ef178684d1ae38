pub mod atleta;
pub mod categoria;
pub mod centro_treinamento;

pub use atleta::AtletaRepository;
pub use categoria::CategoriaRepository;
pub use centro_treinamento::CentroTreinamentoRepository;
