// ==========================================
// Guild Assign - API layer error types
// ==========================================
// Role: fold repository/importer/engine errors into messages a caller
// can show directly. Every variant carries an explicit reason.
// ==========================================

use crate::engine::error::EngineError;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API-layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Business rule errors =====
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("capacity rule violated: {0}")]
    CapacityViolation(String),

    // ===== Data access errors =====
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    // ===== Import errors =====
    #[error("file import failed: {0}")]
    ImportError(String),

    // ===== Configuration errors =====
    #[error("configuration error: {0}")]
    ConfigError(String),

    // ===== Generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={}) does not exist", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("database lock failed: {}", msg))
            }
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::InvalidInput(format!("unique constraint violated: {}", msg))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::InvalidInput(format!("foreign key constraint violated: {}", msg))
            }
            RepositoryError::ValidationError(msg) => ApiError::InvalidInput(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

// Engine errors reaching the API are the non-recoverable kind
// (recoverable ones are already folded into diagnostics).
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match &err {
            EngineError::CapacityExceeded { .. } => ApiError::CapacityViolation(err.to_string()),
            _ => ApiError::InternalError(err.to_string()),
        }
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_conversion() {
        let repo_err = RepositoryError::NotFound {
            entity: "Roster".to_string(),
            id: "42".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("Roster"));
                assert!(msg.contains("42"));
            }
            _ => panic!("expected NotFound"),
        }
    }

    #[test]
    fn test_engine_capacity_error_conversion() {
        let engine_err = EngineError::CapacityExceeded {
            member: "alice".to_string(),
            mission: 3,
        };
        let api_err: ApiError = engine_err.into();
        assert!(matches!(api_err, ApiError::CapacityViolation(_)));
    }
}
