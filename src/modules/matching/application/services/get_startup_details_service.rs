use async_trait::async_trait;
use uuid::Uuid;

use crate::matching::application::domain::card::{project_startup_details, StartupDetails};
use crate::matching::application::domain::document::str_at;
use crate::matching::application::ports::incoming::use_cases::{
    GetStartupDetailsError, GetStartupDetailsUseCase,
};
use crate::matching::application::ports::outgoing::ProfileQuery;
use crate::profile::application::domain::entities::Role;

pub struct GetStartupDetailsService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetStartupDetailsService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetStartupDetailsUseCase for GetStartupDetailsService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, id: &str) -> Result<StartupDetails, GetStartupDetailsError> {
        let startup_id = Uuid::parse_str(id.trim())
            .map_err(|_| GetStartupDetailsError::InvalidArgument(id.to_string()))?;

        let doc = self
            .query
            .find_by_id(startup_id)
            .await
            .map_err(|e| GetStartupDetailsError::Internal(e.to_string()))?
            .ok_or(GetStartupDetailsError::NotFound)?;

        if str_at(&doc, "role").map(Role::parse) != Some(Role::Startup) {
            return Err(GetStartupDetailsError::NotFound);
        }

        project_startup_details(&doc).ok_or(GetStartupDetailsError::NotFound)
    }
}
