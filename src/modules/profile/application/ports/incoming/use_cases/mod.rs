mod update_contact_info;
mod update_investment_criteria;
mod update_investor_profile;

pub use update_contact_info::{
    UpdateContactInfoCommand, UpdateContactInfoError, UpdateContactInfoUseCase,
};
pub use update_investment_criteria::{
    UpdateInvestmentCriteriaError, UpdateInvestmentCriteriaUseCase,
};
pub use update_investor_profile::{UpdateInvestorProfileError, UpdateInvestorProfileUseCase};
