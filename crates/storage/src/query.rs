//! Explicit filter predicates over the athlete collection.
//!
//! A predicate list is the single description of a lookup: the PostgreSQL
//! repository renders it into SQL and the in-memory store evaluates it
//! directly, so both agree on what a filter means.

use sqlx::{Postgres, QueryBuilder};

use crate::models::Atleta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Nome,
    Cpf,
}

impl Field {
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Nome => "a.nome",
            Self::Cpf => "a.cpf",
        }
    }

    fn value_of<'a>(&self, atleta: &'a Atleta) -> &'a str {
        match self {
            Self::Nome => &atleta.nome,
            Self::Cpf => &atleta.cpf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Case-insensitive substring
    ContainsIgnoreCase,
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: Field,
    pub kind: MatchKind,
    pub value: String,
}

impl Predicate {
    pub fn new(field: Field, kind: MatchKind, value: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            value: value.into(),
        }
    }

    pub fn nome_contains(value: impl Into<String>) -> Self {
        Self::new(Field::Nome, MatchKind::ContainsIgnoreCase, value)
    }

    pub fn cpf_equals(value: impl Into<String>) -> Self {
        Self::new(Field::Cpf, MatchKind::Exact, value)
    }

    pub fn matches(&self, atleta: &Atleta) -> bool {
        let candidate = self.field.value_of(atleta);
        match self.kind {
            MatchKind::ContainsIgnoreCase => candidate
                .to_lowercase()
                .contains(&self.value.to_lowercase()),
            MatchKind::Exact => candidate == self.value,
        }
    }

    /// Appends ` AND <condition>` with the value bound as a parameter.
    pub fn push_sql(&self, query: &mut QueryBuilder<'_, Postgres>) {
        query.push(" AND ");
        query.push(self.field.as_column());
        match self.kind {
            MatchKind::ContainsIgnoreCase => {
                query.push(" ILIKE ");
                query.push_bind(format!("%{}%", escape_like(&self.value)));
                query.push(r" ESCAPE '\'");
            }
            MatchKind::Exact => {
                query.push(" = ");
                query.push_bind(self.value.clone());
            }
        }
    }
}

/// True when every predicate holds (an empty list matches everything).
pub fn matches_all(predicates: &[Predicate], atleta: &Atleta) -> bool {
    predicates.iter().all(|p| p.matches(atleta))
}

/// Escapes LIKE wildcards so user input is matched literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
