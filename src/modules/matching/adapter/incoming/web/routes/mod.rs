mod get_matching_investors;
mod get_matching_startups;
mod get_startup_details;
mod search_startups;

pub use get_matching_investors::*;
pub use get_matching_startups::*;
pub use get_startup_details::*;
pub use search_startups::*;
