use std::sync::Arc;

use actix_web::web;

use crate::matching::application::matching_use_cases::MatchingUseCases;
use crate::matching::application::ports::incoming::use_cases::{
    GetMatchingInvestorsUseCase, GetMatchingStartupsUseCase, GetStartupDetailsUseCase,
    SearchStartupsUseCase,
};
use crate::profile::application::ports::incoming::use_cases::{
    UpdateContactInfoUseCase, UpdateInvestmentCriteriaUseCase, UpdateInvestorProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
    matching: MatchingUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: ProfileUseCases {
                update_contact: Arc::new(StubUpdateContactInfoUseCase),
                update_criteria: Arc::new(StubUpdateInvestmentCriteriaUseCase),
                update_investor_profile: Arc::new(StubUpdateInvestorProfileUseCase),
            },
            matching: MatchingUseCases {
                matching_startups: Arc::new(StubGetMatchingStartupsUseCase),
                matching_investors: Arc::new(StubGetMatchingInvestorsUseCase),
                search_startups: Arc::new(StubSearchStartupsUseCase),
                startup_details: Arc::new(StubGetStartupDetailsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_update_contact(
        mut self,
        uc: impl UpdateContactInfoUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update_contact = Arc::new(uc);
        self
    }

    pub fn with_update_criteria(
        mut self,
        uc: impl UpdateInvestmentCriteriaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update_criteria = Arc::new(uc);
        self
    }

    pub fn with_update_investor_profile(
        mut self,
        uc: impl UpdateInvestorProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.update_investor_profile = Arc::new(uc);
        self
    }

    pub fn with_matching_startups(
        mut self,
        uc: impl GetMatchingStartupsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.matching.matching_startups = Arc::new(uc);
        self
    }

    pub fn with_matching_investors(
        mut self,
        uc: impl GetMatchingInvestorsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.matching.matching_investors = Arc::new(uc);
        self
    }

    pub fn with_search_startups(
        mut self,
        uc: impl SearchStartupsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.matching.search_startups = Arc::new(uc);
        self
    }

    pub fn with_startup_details(
        mut self,
        uc: impl GetStartupDetailsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.matching.startup_details = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
            matching: self.matching,
        })
    }
}
