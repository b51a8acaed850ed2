use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::matching::application::domain::filter::FilterExpr;
use crate::matching::application::domain::ProfileDocument;
use crate::matching::application::ports::outgoing::{ProfileQuery, ProfileQueryError};
use crate::profile::adapter::outgoing::sea_orm_entity::users::{
    Column, Entity as UserEntity, Model as UserModel,
};
use crate::profile::application::domain::entities::Role;

/// Narrows candidates in SQL by role and section presence, then evaluates
/// the complete filter over each fetched document.
#[derive(Clone, Debug)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}

fn section_column(target: Role) -> Option<Column> {
    match target {
        Role::Investor => Some(Column::Investor),
        Role::Startup => Some(Column::Startup),
        Role::Other => None,
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProfileDocument>, ProfileQueryError> {
        let model = UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.as_ref().map(UserModel::to_document))
    }

    async fn find_matching(
        &self,
        target: Role,
        filter: &FilterExpr,
    ) -> Result<Vec<ProfileDocument>, ProfileQueryError> {
        let mut select = UserEntity::find().filter(Column::Role.eq(target.as_str()));
        if let Some(section) = section_column(target) {
            select = select.filter(section.is_not_null());
        }

        let rows = select.all(&*self.db).await.map_err(map_db_err)?;
        let fetched = rows.len();

        let matched: Vec<ProfileDocument> = rows
            .iter()
            .map(UserModel::to_document)
            .filter(|doc| filter.matches(doc))
            .collect();

        debug!(
            role = target.as_str(),
            fetched,
            matched = matched.len(),
            "profile query evaluated"
        );

        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    use crate::matching::application::domain::relaxed_match::hard_conditions;
    use crate::profile::adapter::outgoing::sea_orm_entity::users::fixtures::user_model;

    #[tokio::test]
    async fn find_by_id_returns_document() {
        let id = Uuid::new_v4();
        let mut model = user_model(id, Role::Startup);
        model.startup = Some(json!({ "stage": "idea" }));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));
        let doc = query.find_by_id(id).await.unwrap().unwrap();

        assert_eq!(doc["role"], "startup");
        assert_eq!(doc["startup"]["stage"], "idea");
        assert!(doc.get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn find_matching_applies_the_full_filter_after_fetch() {
        let mut seed = user_model(Uuid::new_v4(), Role::Startup);
        seed.startup = Some(json!({ "stage": "idea", "industry1": "Fintech" }));
        let mut empty = user_model(Uuid::new_v4(), Role::Startup);
        empty.startup = Some(json!({}));
        let mut other = user_model(Uuid::new_v4(), Role::Startup);
        other.startup = Some(json!({ "stage": "scaling" }));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![seed.clone(), empty, other]])
            .into_connection();

        let mut all = hard_conditions(Role::Startup);
        all.push(FilterExpr::eq("startup.industry1", "Fintech"));
        let filter = FilterExpr::and(all);

        let query = ProfileQueryPostgres::new(Arc::new(db));
        let docs = query.find_matching(Role::Startup, &filter).await.unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["id"], seed.id.to_string());
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));
        let result = query.find_matching(Role::Investor, &FilterExpr::Always).await;

        assert!(matches!(
            result,
            Err(ProfileQueryError::DatabaseError(msg)) if msg.contains("connection reset")
        ));
    }
}
