use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserView;
use crate::profile::application::domain::investor_profile::CriteriaUpdate;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateInvestmentCriteriaError {
    #[error("Investor not found")]
    NotFound,

    #[error("{0}")]
    ValidationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateInvestmentCriteriaUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        update: CriteriaUpdate,
    ) -> Result<UserView, UpdateInvestmentCriteriaError>;
}
