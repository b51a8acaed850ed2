use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::card::{project_card, Card, CardPerspective};
use crate::matching::application::domain::criteria::InvestmentCriteria;
use crate::matching::application::domain::document::{has_section, lookup};
use crate::matching::application::domain::relaxed_match::{build_relaxed_match, MatchSubject};
use crate::matching::application::ports::incoming::use_cases::{
    GetMatchingStartupsError, GetMatchingStartupsUseCase,
};
use crate::matching::application::ports::outgoing::ProfileQuery;
use crate::profile::application::domain::entities::Role;

pub struct GetMatchingStartupsService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetMatchingStartupsService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMatchingStartupsUseCase for GetMatchingStartupsService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, investor_id: UserId) -> Result<Vec<Card>, GetMatchingStartupsError> {
        let own = self
            .query
            .find_by_id(investor_id.value())
            .await
            .map_err(|e| GetMatchingStartupsError::Internal(e.to_string()))?
            .ok_or(GetMatchingStartupsError::NotFound)?;

        let section = lookup(&own, "investor")
            .filter(|_| has_section(&own, "investor"))
            .ok_or(GetMatchingStartupsError::NotFound)?;

        let criteria = InvestmentCriteria::from_investor_section(section).map_err(|e| {
            GetMatchingStartupsError::Internal(format!("unreadable investment criteria: {e}"))
        })?;

        let unreachable = criteria.stages_outside_startup_lifecycle();
        if !unreachable.is_empty() {
            debug!(
                investor = %investor_id,
                stages = ?unreachable,
                "criteria stages never carried by a startup"
            );
        }

        let filter = build_relaxed_match(&MatchSubject::Investor(criteria), Role::Startup);
        debug!(investor = %investor_id, filter = %filter.to_json(), "matching startups");

        let candidates = self
            .query
            .find_matching(Role::Startup, &filter)
            .await
            .map_err(|e| GetMatchingStartupsError::Internal(e.to_string()))?;

        Ok(candidates
            .iter()
            .filter_map(|doc| project_card(doc, CardPerspective::MatchingStartups))
            .collect())
    }
}
