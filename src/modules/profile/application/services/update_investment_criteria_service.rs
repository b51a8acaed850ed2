use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::criteria::InvestmentCriteria;
use crate::profile::application::domain::entities::UserView;
use crate::profile::application::domain::investor_profile::{with_criteria, CriteriaUpdate};
use crate::profile::application::ports::incoming::use_cases::{
    UpdateInvestmentCriteriaError, UpdateInvestmentCriteriaUseCase,
};
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

pub struct UpdateInvestmentCriteriaService<R>
where
    R: ProfileRepository,
{
    repository: R,
}

impl<R> UpdateInvestmentCriteriaService<R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn investor(&self, user_id: UserId) -> Result<UserView, UpdateInvestmentCriteriaError> {
        self.repository
            .find_by_id(user_id)
            .await
            .map_err(map_repo_err)?
            .filter(UserView::is_investor)
            .ok_or(UpdateInvestmentCriteriaError::NotFound)
    }
}

fn map_repo_err(e: ProfileRepositoryError) -> UpdateInvestmentCriteriaError {
    match e {
        ProfileRepositoryError::NotFound => UpdateInvestmentCriteriaError::NotFound,
        other => UpdateInvestmentCriteriaError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> UpdateInvestmentCriteriaUseCase for UpdateInvestmentCriteriaService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        update: CriteriaUpdate,
    ) -> Result<UserView, UpdateInvestmentCriteriaError> {
        let problems = update.validate();
        if !problems.is_empty() {
            return Err(UpdateInvestmentCriteriaError::ValidationFailed(
                problems.join("; "),
            ));
        }

        let user = self.investor(user_id).await?;
        let section = user.investor;

        let existing = match section.as_ref() {
            Some(section) => InvestmentCriteria::from_investor_section(section).unwrap_or_else(|e| {
                warn!("Replacing unreadable criteria of investor {}: {}", user_id, e);
                InvestmentCriteria::default()
            }),
            None => InvestmentCriteria::default(),
        };

        let criteria = update.apply_to(existing);
        let section: Value = with_criteria(section, &criteria)
            .map_err(|e| UpdateInvestmentCriteriaError::RepositoryError(e.to_string()))?;

        self.repository
            .save_investor_section(user_id, section)
            .await
            .map_err(map_repo_err)?;

        self.investor(user_id).await
    }
}
