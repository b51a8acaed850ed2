use async_trait::async_trait;

use crate::matching::application::domain::card::StartupDetails;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetStartupDetailsError {
    #[error("Invalid startup id '{0}'")]
    InvalidArgument(String),

    #[error("Startup not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait GetStartupDetailsUseCase: Send + Sync {
    /// `id` is taken verbatim from the path and parsed here.
    async fn execute(&self, id: &str) -> Result<StartupDetails, GetStartupDetailsError>;
}
