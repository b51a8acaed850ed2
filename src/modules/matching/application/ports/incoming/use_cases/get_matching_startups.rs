use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::card::Card;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetMatchingStartupsError {
    #[error("Investor profile not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait GetMatchingStartupsUseCase: Send + Sync {
    async fn execute(&self, investor_id: UserId) -> Result<Vec<Card>, GetMatchingStartupsError>;
}
