use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Integrity violation: {0}")]
    Integrity(IntegrityViolation),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A write rejected by a table constraint (unique, foreign key, not-null or check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityViolation {
    /// Primary message reported by the driver.
    pub message: String,
    /// Constraint name, when the driver reports one.
    pub constraint: Option<String>,
}

impl IntegrityViolation {
    pub fn new(message: impl Into<String>, constraint: Option<&str>) -> Self {
        Self {
            message: message.into(),
            constraint: constraint.map(String::from),
        }
    }

    /// Whether the violated constraint concerns `column`.
    ///
    /// The constraint name wins when present. Otherwise the lowercased driver
    /// message is searched for the column name.
    pub fn mentions(&self, column: &str) -> bool {
        let column = column.to_lowercase();
        match &self.constraint {
            Some(constraint) => constraint.to_lowercase().contains(&column),
            None => self.message.to_lowercase().contains(&column),
        }
    }
}

impl std::fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{} ({})", self.message, constraint),
            None => write!(f, "{}", self.message),
        }
    }
}

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StorageError::Database(sqlx::Error::Database(e)) => {
                matches!(e.kind(), ErrorKind::UniqueViolation)
            }
            _ => false,
        }
    }

    /// Turns a failed write into [`StorageError::Integrity`] when a table
    /// constraint rejected it; other failures stay [`StorageError::Database`].
    pub fn from_write(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &error {
            match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return StorageError::Integrity(IntegrityViolation::new(
                        db.message(),
                        db.constraint(),
                    ));
                }
                _ => {}
            }
        }

        StorageError::Database(error)
    }

    /// Maps a unique violation to [`StorageError::ConstraintViolation`] with a
    /// readable message, leaving other errors untouched.
    pub fn unique_as_conflict(self, message: impl FnOnce() -> String) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(message())
        } else {
            self
        }
    }
}
