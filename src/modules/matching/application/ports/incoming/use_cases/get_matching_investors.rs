use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::card::Card;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetMatchingInvestorsError {
    #[error("User not found")]
    NotFound,

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait GetMatchingInvestorsUseCase: Send + Sync {
    async fn execute(&self, startup_id: UserId) -> Result<Vec<Card>, GetMatchingInvestorsError>;
}
