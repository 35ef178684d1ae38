pub mod atletas;
