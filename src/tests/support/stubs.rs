//! Default use cases for `TestAppStateBuilder`. Each answers with an
//! internal error so a test that forgets to install its own mock fails
//! loudly instead of passing on stub data.

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::matching::application::domain::card::{Card, StartupDetails};
use crate::matching::application::domain::search_filter::SearchStartupsQuery;
use crate::matching::application::ports::incoming::use_cases::{
    GetMatchingInvestorsError, GetMatchingInvestorsUseCase, GetMatchingStartupsError,
    GetMatchingStartupsUseCase, GetStartupDetailsError, GetStartupDetailsUseCase,
    SearchStartupsError, SearchStartupsUseCase,
};
use crate::profile::application::domain::entities::UserView;
use crate::profile::application::domain::investor_profile::{CriteriaUpdate, InvestorProfilePatch};
use crate::profile::application::ports::incoming::use_cases::{
    UpdateContactInfoCommand, UpdateContactInfoError, UpdateContactInfoUseCase,
    UpdateInvestmentCriteriaError, UpdateInvestmentCriteriaUseCase, UpdateInvestorProfileError,
    UpdateInvestorProfileUseCase,
};

const NOT_USED: &str = "not used in this test";

#[derive(Default, Clone)]
pub struct StubUpdateContactInfoUseCase;

#[async_trait]
impl UpdateContactInfoUseCase for StubUpdateContactInfoUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: UpdateContactInfoCommand,
    ) -> Result<UserView, UpdateContactInfoError> {
        Err(UpdateContactInfoError::RepositoryError(NOT_USED.into()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateInvestmentCriteriaUseCase;

#[async_trait]
impl UpdateInvestmentCriteriaUseCase for StubUpdateInvestmentCriteriaUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _update: CriteriaUpdate,
    ) -> Result<UserView, UpdateInvestmentCriteriaError> {
        Err(UpdateInvestmentCriteriaError::RepositoryError(NOT_USED.into()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateInvestorProfileUseCase;

#[async_trait]
impl UpdateInvestorProfileUseCase for StubUpdateInvestorProfileUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _patch: InvestorProfilePatch,
    ) -> Result<UserView, UpdateInvestorProfileError> {
        Err(UpdateInvestorProfileError::RepositoryError(NOT_USED.into()))
    }
}

#[derive(Default, Clone)]
pub struct StubGetMatchingStartupsUseCase;

#[async_trait]
impl GetMatchingStartupsUseCase for StubGetMatchingStartupsUseCase {
    async fn execute(&self, _investor_id: UserId) -> Result<Vec<Card>, GetMatchingStartupsError> {
        Err(GetMatchingStartupsError::Internal(NOT_USED.into()))
    }
}

#[derive(Default, Clone)]
pub struct StubGetMatchingInvestorsUseCase;

#[async_trait]
impl GetMatchingInvestorsUseCase for StubGetMatchingInvestorsUseCase {
    async fn execute(&self, _startup_id: UserId) -> Result<Vec<Card>, GetMatchingInvestorsError> {
        Err(GetMatchingInvestorsError::Internal(NOT_USED.into()))
    }
}

#[derive(Default, Clone)]
pub struct StubSearchStartupsUseCase;

#[async_trait]
impl SearchStartupsUseCase for StubSearchStartupsUseCase {
    async fn execute(&self, _query: SearchStartupsQuery) -> Result<Vec<Card>, SearchStartupsError> {
        Err(SearchStartupsError::Internal(NOT_USED.into()))
    }
}

#[derive(Default, Clone)]
pub struct StubGetStartupDetailsUseCase;

#[async_trait]
impl GetStartupDetailsUseCase for StubGetStartupDetailsUseCase {
    async fn execute(&self, _id: &str) -> Result<StartupDetails, GetStartupDetailsError> {
        Err(GetStartupDetailsError::Internal(NOT_USED.into()))
    }
}
