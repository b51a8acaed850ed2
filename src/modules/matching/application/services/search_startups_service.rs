use async_trait::async_trait;
use tracing::debug;

use crate::matching::application::domain::card::{project_card, Card, CardPerspective};
use crate::matching::application::domain::search_filter::{
    build_search_filter, SearchParams, SearchStartupsQuery,
};
use crate::matching::application::ports::incoming::use_cases::{
    SearchStartupsError, SearchStartupsUseCase,
};
use crate::matching::application::ports::outgoing::ProfileQuery;
use crate::profile::application::domain::entities::Role;

pub struct SearchStartupsService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> SearchStartupsService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SearchStartupsUseCase for SearchStartupsService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, query: SearchStartupsQuery) -> Result<Vec<Card>, SearchStartupsError> {
        let params = SearchParams::parse(query)?;

        let filter = build_search_filter(&params);
        debug!(filter = %filter.to_json(), "searching startups");

        let candidates = self
            .query
            .find_matching(Role::Startup, &filter)
            .await
            .map_err(|e| SearchStartupsError::Internal(e.to_string()))?;

        Ok(candidates
            .iter()
            .filter_map(|doc| project_card(doc, CardPerspective::SearchStartups))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::application::domain::search_filter::SearchParamsError;
    use crate::tests::support::profile_query::InMemoryProfileQuery;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn startup(industry: &str, goal: f64, score: Option<f64>) -> Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "role": "startup",
            "startup": {
                "industry1": industry,
                "stage": "mvp",
                "fundingGoal": { "amount": goal },
                "successPrediction": { "score": score, "details": null }
            }
        })
    }

    fn store() -> InMemoryProfileQuery {
        InMemoryProfileQuery::new(vec![
            startup("Fintech", 900.0, Some(80.0)),
            startup("Fintech", 1000.0, Some(80.0)),
            startup("Fintech", 5000.0, Some(40.0)),
            startup("Fintech", 5500.0, Some(90.0)),
            startup("Retail", 3000.0, None),
        ])
    }

    #[tokio::test]
    async fn amount_bounds_are_strict() {
        let service = SearchStartupsService::new(store());
        let cards = service
            .execute(SearchStartupsQuery {
                min_funding: Some("1000".to_string()),
                max_funding: Some("5000".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let totals: Vec<f64> = cards.iter().map(|c| c.total_required).collect();
        assert_eq!(totals, vec![1000.0, 5000.0, 3000.0]);
    }

    #[tokio::test]
    async fn every_parameter_must_hold() {
        let service = SearchStartupsService::new(store());
        let cards = service
            .execute(SearchStartupsQuery {
                industry: Some("Fintech".to_string()),
                min_success_score: Some("75".to_string()),
                stage: Some("mvp".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let totals: Vec<f64> = cards.iter().map(|c| c.total_required).collect();
        assert_eq!(totals, vec![900.0, 1000.0, 5500.0]);
    }

    #[tokio::test]
    async fn no_parameters_lists_all_startups() {
        let cards = SearchStartupsService::new(store())
            .execute(SearchStartupsQuery::default())
            .await
            .unwrap();
        assert_eq!(cards.len(), 5);
    }

    #[tokio::test]
    async fn invalid_stage_fails_before_store_access() {
        let query = store();
        let probe = query.clone();

        let result = SearchStartupsService::new(query)
            .execute(SearchStartupsQuery {
                stage: Some("seed".to_string()),
                ..Default::default()
            })
            .await;

        assert_eq!(
            result,
            Err(SearchStartupsError::InvalidArgument(SearchParamsError::UnknownStage(
                "seed".to_string()
            )))
        );
        assert_eq!(probe.match_calls(), 0);
    }

    #[tokio::test]
    async fn non_numeric_amount_is_invalid() {
        let result = SearchStartupsService::new(store())
            .execute(SearchStartupsQuery {
                max_funding: Some("lots".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(SearchStartupsError::InvalidArgument(_))));
    }
}
