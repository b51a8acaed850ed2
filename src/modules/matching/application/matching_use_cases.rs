use std::sync::Arc;

use crate::matching::application::ports::incoming::use_cases::{
    GetMatchingInvestorsUseCase, GetMatchingStartupsUseCase, GetStartupDetailsUseCase,
    SearchStartupsUseCase,
};

#[derive(Clone)]
pub struct MatchingUseCases {
    pub matching_startups: Arc<dyn GetMatchingStartupsUseCase + Send + Sync>,
    pub matching_investors: Arc<dyn GetMatchingInvestorsUseCase + Send + Sync>,
    pub search_startups: Arc<dyn SearchStartupsUseCase + Send + Sync>,
    pub startup_details: Arc<dyn GetStartupDetailsUseCase + Send + Sync>,
}
