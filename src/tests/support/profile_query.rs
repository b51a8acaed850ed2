use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::matching::application::domain::document::str_at;
use crate::matching::application::domain::filter::FilterExpr;
use crate::matching::application::domain::ProfileDocument;
use crate::matching::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::profile::application::domain::entities::Role;

/// Profile store over a fixed list of documents. Narrows by role like the
/// Postgres adapter, then evaluates the filter. Clones share call counters.
#[derive(Clone, Default)]
pub struct InMemoryProfileQuery {
    docs: Arc<Vec<ProfileDocument>>,
    failure: Option<ProfileQueryError>,
    lookups: Arc<AtomicUsize>,
    matches: Arc<AtomicUsize>,
}

impl InMemoryProfileQuery {
    pub fn new(docs: Vec<ProfileDocument>) -> Self {
        Self {
            docs: Arc::new(docs),
            ..Default::default()
        }
    }

    pub fn failing(error: ProfileQueryError) -> Self {
        Self {
            failure: Some(error),
            ..Default::default()
        }
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn match_calls(&self) -> usize {
        self.matches.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ProfileQueryError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProfileQuery for InMemoryProfileQuery {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileDocument>, ProfileQueryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let id = id.to_string();
        Ok(self
            .docs
            .iter()
            .find(|doc| str_at(doc, "id") == Some(id.as_str()))
            .cloned())
    }

    async fn find_matching(
        &self,
        target: Role,
        filter: &FilterExpr,
    ) -> Result<Vec<ProfileDocument>, ProfileQueryError> {
        self.matches.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        Ok(self
            .docs
            .iter()
            .filter(|doc| str_at(doc, "role") == Some(target.as_str()))
            .filter(|doc| filter.matches(doc))
            .cloned()
            .collect())
    }
}
