use async_trait::async_trait;

use crate::matching::application::domain::card::Card;
use crate::matching::application::domain::search_filter::{SearchParamsError, SearchStartupsQuery};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchStartupsError {
    #[error(transparent)]
    InvalidArgument(#[from] SearchParamsError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait SearchStartupsUseCase: Send + Sync {
    async fn execute(&self, query: SearchStartupsQuery) -> Result<Vec<Card>, SearchStartupsError>;
}
