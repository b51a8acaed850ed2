use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserView;
use crate::profile::application::domain::investor_profile::InvestorProfilePatch;
use crate::profile::application::ports::incoming::use_cases::{
    UpdateInvestorProfileError, UpdateInvestorProfileUseCase,
};
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

pub struct UpdateInvestorProfileService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpdateInvestorProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn investor(&self, user_id: UserId) -> Result<UserView, UpdateInvestorProfileError> {
        self.repository
            .find_by_id(user_id)
            .await
            .map_err(map_repo_err)?
            .filter(UserView::is_investor)
            .ok_or(UpdateInvestorProfileError::NotFound)
    }
}

fn map_repo_err(e: ProfileRepositoryError) -> UpdateInvestorProfileError {
    match e {
        ProfileRepositoryError::NotFound => UpdateInvestorProfileError::NotFound,
        other => UpdateInvestorProfileError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> UpdateInvestorProfileUseCase for UpdateInvestorProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        patch: InvestorProfilePatch,
    ) -> Result<UserView, UpdateInvestorProfileError> {
        let problems = patch.validate();
        if !problems.is_empty() {
            return Err(UpdateInvestorProfileError::ValidationFailed(
                problems.join("; "),
            ));
        }

        let user = self.investor(user_id).await?;
        if patch.is_empty() {
            return Ok(user);
        }

        let section = patch.apply_to(user.investor);
        self.repository
            .save_investor_section(user_id, section)
            .await
            .map_err(map_repo_err)?;

        self.investor(user_id).await
    }
}
