use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserView;
use crate::profile::application::domain::investor_profile::InvestorProfilePatch;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateInvestorProfileError {
    #[error("Investor not found")]
    NotFound,

    #[error("{0}")]
    ValidationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateInvestorProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        patch: InvestorProfilePatch,
    ) -> Result<UserView, UpdateInvestorProfileError>;
}
