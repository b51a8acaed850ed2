mod update_contact_info_service;
mod update_investment_criteria_service;
mod update_investor_profile_service;

pub use update_contact_info_service::UpdateContactInfoService;
pub use update_investment_criteria_service::UpdateInvestmentCriteriaService;
pub use update_investor_profile_service::UpdateInvestorProfileService;
