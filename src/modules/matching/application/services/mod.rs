pub mod get_matching_investors_service;
pub mod get_matching_startups_service;
pub mod get_startup_details_service;
pub mod search_startups_service;

pub use get_matching_investors_service::GetMatchingInvestorsService;
pub use get_matching_startups_service::GetMatchingStartupsService;
pub use get_startup_details_service::GetStartupDetailsService;
pub use search_startups_service::SearchStartupsService;
