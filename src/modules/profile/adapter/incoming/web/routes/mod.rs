mod update_contact_info;
mod update_investment_criteria;
mod update_investor_profile;

pub use update_contact_info::*;
pub use update_investment_criteria::*;
pub use update_investor_profile::*;
