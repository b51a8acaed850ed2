use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::card::{project_card, Card, CardPerspective};
use crate::matching::application::domain::document::{has_section, lookup};
use crate::matching::application::domain::relaxed_match::{build_relaxed_match, startup_subject};
use crate::matching::application::ports::incoming::use_cases::{
    GetMatchingInvestorsError, GetMatchingInvestorsUseCase,
};
use crate::matching::application::ports::outgoing::ProfileQuery;
use crate::profile::application::domain::entities::Role;

pub struct GetMatchingInvestorsService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetMatchingInvestorsService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMatchingInvestorsUseCase for GetMatchingInvestorsService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, startup_id: UserId) -> Result<Vec<Card>, GetMatchingInvestorsError> {
        let own = self
            .query
            .find_by_id(startup_id.value())
            .await
            .map_err(|e| GetMatchingInvestorsError::Internal(e.to_string()))?
            .ok_or(GetMatchingInvestorsError::NotFound)?;

        let section = lookup(&own, "startup")
            .filter(|_| has_section(&own, "startup"))
            .ok_or_else(|| {
                GetMatchingInvestorsError::InvalidArgument(
                    "Startup profile has not been set up".to_string(),
                )
            })?;

        let filter = build_relaxed_match(&startup_subject(section), Role::Investor);
        debug!(startup = %startup_id, filter = %filter.to_json(), "matching investors");

        let candidates = self
            .query
            .find_matching(Role::Investor, &filter)
            .await
            .map_err(|e| GetMatchingInvestorsError::Internal(e.to_string()))?;

        Ok(candidates
            .iter()
            .filter_map(|doc| project_card(doc, CardPerspective::MatchingInvestors))
            .collect())
    }
}
