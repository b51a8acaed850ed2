use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    UpdateContactInfoUseCase, UpdateInvestmentCriteriaUseCase, UpdateInvestorProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub update_contact: Arc<dyn UpdateContactInfoUseCase + Send + Sync>,
    pub update_criteria: Arc<dyn UpdateInvestmentCriteriaUseCase + Send + Sync>,
    pub update_investor_profile: Arc<dyn UpdateInvestorProfileUseCase + Send + Sync>,
}
