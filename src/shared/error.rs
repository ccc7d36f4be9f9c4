use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),
    /// The container a listing is scoped to (a community, a post) does not exist.
    #[error("Container not found: {0}")]
    ContainerNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::ContainerNotFound(_) => "CONTAINER_NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Message safe to hand back to API callers.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ContainerNotFound(_) => "container not found".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Database(_) => "internal server error".to_string(),
            AppError::Configuration(_) | AppError::Serialization(_) => self.to_string(),
        }
    }

    pub fn is_container_not_found(&self) -> bool {
        matches!(self, AppError::ContainerNotFound(_))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
