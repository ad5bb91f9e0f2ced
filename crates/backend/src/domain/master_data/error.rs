use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MasterDataError {
    #[error("{entity} with id {id} was not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("invalid record payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown master-data collection '{0}'")]
    UnknownCollection(String),

    #[error("database connection has not been initialized")]
    NotInitialized,
}

impl MasterDataError {
    /// Failures caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MasterDataError::NotFound { .. }
                | MasterDataError::Validation(_)
                | MasterDataError::UnknownCollection(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MasterDataError>;
