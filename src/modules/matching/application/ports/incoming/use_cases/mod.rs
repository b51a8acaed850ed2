pub mod get_matching_investors;
pub mod get_matching_startups;
pub mod get_startup_details;
pub mod search_startups;

pub use get_matching_investors::{GetMatchingInvestorsError, GetMatchingInvestorsUseCase};
pub use get_matching_startups::{GetMatchingStartupsError, GetMatchingStartupsUseCase};
pub use get_startup_details::{GetStartupDetailsError, GetStartupDetailsUseCase};
pub use search_startups::{SearchStartupsError, SearchStartupsUseCase};
