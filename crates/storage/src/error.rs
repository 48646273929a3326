use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Rewrites unique/foreign key violations into a `ConstraintViolation`
    /// carrying a client-facing message.
    pub fn with_constraint_messages(self, unique: &str, foreign_key: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(unique.to_string())
        } else if self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(foreign_key.to_string())
        } else {
            self
        }
    }
}

/// Failure to read one of the league's text-backed enums
#[derive(Debug, Error)]
#[error("Unknown {kind} value: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_messages_leave_other_errors_untouched() {
        let error = StorageError::NotFound.with_constraint_messages("dup", "fk");
        assert!(matches!(error, StorageError::NotFound));
    }

    #[test]
    fn test_parse_enum_error_message() {
        let error = ParseEnumError::new("division", "Division 9");
        assert_eq!(error.to_string(), "Unknown division value: 'Division 9'");
    }
}
