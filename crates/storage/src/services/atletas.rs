//! Athlete query and creation, independent of any particular store.

use crate::dto::atleta::{AtletaFilter, AtletaResumo, CreateAtletaRequest};
use crate::error::{IntegrityViolation, Result, StorageError};
use crate::models::Atleta;
use crate::store::AtletaStore;

pub const INVALID_INPUT_MESSAGE: &str = "Ocorreu um erro ao inserir os dados no banco";

/// Result of a create attempt that reached the store.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Committed(Atleta),
    /// The CPF is already registered; nothing was written.
    Conflict { cpf: String, message: String },
    /// Some other constraint rejected the write; nothing was written.
    Invalid { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    DuplicateCpf,
    Other,
}

/// Decides whether a rejected insert was caused by the CPF constraint.
pub fn classify_violation(violation: &IntegrityViolation) -> ViolationKind {
    if violation.mentions("cpf") {
        ViolationKind::DuplicateCpf
    } else {
        ViolationKind::Other
    }
}

/// List athletes matching `filter`, projected to their summary
pub async fn query_atletas(
    store: &dyn AtletaStore,
    filter: &AtletaFilter,
) -> Result<Vec<AtletaResumo>> {
    let atletas = store.select(&filter.predicates()).await?;

    Ok(atletas.into_iter().map(AtletaResumo::from).collect())
}

/// Create a new athlete
///
/// Integrity failures become [`CreateOutcome::Conflict`] or
/// [`CreateOutcome::Invalid`]; any other storage error is returned as is.
pub async fn create_atleta(
    store: &dyn AtletaStore,
    request: &CreateAtletaRequest,
) -> Result<CreateOutcome> {
    match store.insert(request).await {
        Ok(atleta) => Ok(CreateOutcome::Committed(atleta)),
        Err(StorageError::Integrity(violation)) => match classify_violation(&violation) {
            ViolationKind::DuplicateCpf => {
                tracing::warn!("Rejected athlete with duplicate CPF: {}", violation);
                Ok(CreateOutcome::Conflict {
                    cpf: request.cpf.clone(),
                    message: format!(
                        "Já existe um atleta cadastrado com o cpf: {}",
                        request.cpf
                    ),
                })
            }
            ViolationKind::Other => {
                tracing::warn!("Rejected athlete insert: {}", violation);
                Ok(CreateOutcome::Invalid {
                    message: INVALID_INPUT_MESSAGE.to_string(),
                })
            }
        },
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::atleta::{CategoriaRef, CentroTreinamentoRef};
    use crate::dto::categoria::CreateCategoriaRequest;
    use crate::dto::centro_treinamento::CreateCentroTreinamentoRequest;
    use crate::memory::InMemoryStore;
    use crate::store::{CategoriaStore, CentroTreinamentoStore};
    use rust_decimal::Decimal;

    async fn seeded_store() -> InMemoryStore {
        let store = InMemoryStore::new();

        for nome in ["Scale", "RX"] {
            CategoriaStore::insert(
                &store,
                &CreateCategoriaRequest {
                    nome: nome.to_string(),
                },
            )
            .await
            .unwrap();
        }

        CentroTreinamentoStore::insert(
            &store,
            &CreateCentroTreinamentoRequest {
                nome: "CT King".to_string(),
                endereco: "Rua X, 100".to_string(),
                proprietario: "Marcos".to_string(),
            },
        )
        .await
        .unwrap();

        store
    }

    fn request(nome: &str, cpf: &str, categoria: &str) -> CreateAtletaRequest {
        CreateAtletaRequest {
            nome: nome.to_string(),
            cpf: cpf.to_string(),
            idade: 27,
            peso: Decimal::new(7230, 2),
            altura: Decimal::new(175, 2),
            sexo: "F".to_string(),
            categoria: CategoriaRef {
                nome: categoria.to_string(),
            },
            centro_treinamento: CentroTreinamentoRef {
                nome: "CT King".to_string(),
            },
        }
    }

    async fn committed(store: &InMemoryStore, req: CreateAtletaRequest) -> Atleta {
        match create_atleta(store, &req).await.unwrap() {
            CreateOutcome::Committed(atleta) => atleta,
            other => panic!("expected commit, got {:?}", other),
        }
    }

    async fn count(store: &InMemoryStore) -> usize {
        query_atletas(store, &AtletaFilter::default())
            .await
            .unwrap()
            .len()
    }

    #[test]
    fn test_classify_cpf_constraint() {
        let violation = IntegrityViolation::new(
            r#"duplicate key value violates unique constraint "atletas_cpf_key""#,
            Some("atletas_cpf_key"),
        );
        assert_eq!(classify_violation(&violation), ViolationKind::DuplicateCpf);
    }

    #[test]
    fn test_classify_other_constraint() {
        let violation = IntegrityViolation::new(
            r#"null value in column "categoria_id" of relation "atletas" violates not-null constraint"#,
            None,
        );
        assert_eq!(classify_violation(&violation), ViolationKind::Other);
    }

    #[tokio::test]
    async fn test_create_returns_input_with_generated_id() {
        let store = seeded_store().await;
        let req = request("Beatriz Souza", "11122233344", "RX");

        let atleta = committed(&store, req.clone()).await;

        assert!(!atleta.id.is_nil());
        assert_eq!(atleta.nome, req.nome);
        assert_eq!(atleta.cpf, req.cpf);
        assert_eq!(atleta.idade, req.idade);
        assert_eq!(atleta.peso, req.peso);
        assert_eq!(atleta.altura, req.altura);
        assert_eq!(atleta.sexo, req.sexo);
        assert_eq!(atleta.categoria, "RX");
        assert_eq!(atleta.centro_treinamento, "CT King");
    }

    #[tokio::test]
    async fn test_duplicate_cpf_is_conflict_and_not_persisted() {
        let store = seeded_store().await;
        committed(&store, request("Beatriz Souza", "11122233344", "RX")).await;

        let outcome = create_atleta(&store, &request("Outra Pessoa", "11122233344", "Scale"))
            .await
            .unwrap();

        match outcome {
            CreateOutcome::Conflict { cpf, message } => {
                assert_eq!(cpf, "11122233344");
                assert!(message.contains("11122233344"));
            }
            other => panic!("expected conflict, got {:?}", other),
        }
        assert_eq!(count(&store).await, 1);
    }

    #[tokio::test]
    async fn test_unknown_reference_is_invalid_and_not_persisted() {
        let store = seeded_store().await;

        let outcome = create_atleta(&store, &request("Beatriz Souza", "11122233344", "Elite"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            CreateOutcome::Invalid {
                message: INVALID_INPUT_MESSAGE.to_string()
            }
        );
        assert_eq!(count(&store).await, 0);

        let mut req = request("Beatriz Souza", "11122233344", "RX");
        req.centro_treinamento.nome = "CT Nenhum".to_string();
        let outcome = create_atleta(&store, &req).await.unwrap();
        assert!(matches!(outcome, CreateOutcome::Invalid { .. }));
        assert_eq!(count(&store).await, 0);
    }

    #[tokio::test]
    async fn test_query_without_filters_projects_everything() {
        let store = seeded_store().await;
        committed(&store, request("Beatriz Souza", "11122233344", "RX")).await;
        committed(&store, request("Carlos Lima", "55566677788", "Scale")).await;

        let mut resumo = query_atletas(&store, &AtletaFilter::default())
            .await
            .unwrap();
        resumo.sort_by(|a, b| a.nome.cmp(&b.nome));

        assert_eq!(
            resumo,
            vec![
                AtletaResumo {
                    nome: "Beatriz Souza".to_string(),
                    centro_treinamento: "CT King".to_string(),
                    categoria: "RX".to_string(),
                },
                AtletaResumo {
                    nome: "Carlos Lima".to_string(),
                    centro_treinamento: "CT King".to_string(),
                    categoria: "Scale".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_query_by_case_varied_name_substring() {
        let store = seeded_store().await;
        committed(&store, request("Beatriz Souza", "11122233344", "RX")).await;
        committed(&store, request("Carlos Lima", "55566677788", "Scale")).await;

        let filter = AtletaFilter {
            nome: Some("sOUz".to_string()),
            cpf: None,
        };
        let resumo = query_atletas(&store, &filter).await.unwrap();

        assert_eq!(resumo.len(), 1);
        assert_eq!(resumo[0].nome, "Beatriz Souza");
    }

    #[tokio::test]
    async fn test_query_by_cpf_and_combined_filters() {
        let store = seeded_store().await;
        committed(&store, request("Beatriz Souza", "11122233344", "RX")).await;
        committed(&store, request("Carlos Lima", "55566677788", "Scale")).await;

        let by_cpf = AtletaFilter {
            nome: None,
            cpf: Some("55566677788".to_string()),
        };
        let resumo = query_atletas(&store, &by_cpf).await.unwrap();
        assert_eq!(resumo.len(), 1);
        assert_eq!(resumo[0].nome, "Carlos Lima");

        let disjoint = AtletaFilter {
            nome: Some("beatriz".to_string()),
            cpf: Some("55566677788".to_string()),
        };
        assert!(query_atletas(&store, &disjoint).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_percent_in_name_is_literal() {
        let store = seeded_store().await;
        committed(&store, request("Beatriz Souza", "11122233344", "RX")).await;

        let filter = AtletaFilter {
            nome: Some("%".to_string()),
            cpf: None,
        };
        assert!(query_atletas(&store, &filter).await.unwrap().is_empty());
    }
}
