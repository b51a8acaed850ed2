use async_trait::async_trait;
use uuid::Uuid;

use crate::matching::application::domain::filter::FilterExpr;
use crate::matching::application::domain::ProfileDocument;
use crate::profile::application::domain::entities::Role;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the profile store, seen as JSON documents.
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileDocument>, ProfileQueryError>;

    /// Every `target` profile satisfying `filter`, in storage order.
    async fn find_matching(
        &self,
        target: Role,
        filter: &FilterExpr,
    ) -> Result<Vec<ProfileDocument>, ProfileQueryError>;
}
