use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserView;
use crate::profile::application::ports::outgoing::{
    ContactChanges, ProfileRepository, ProfileRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, id: Uuid) -> Result<UserModel, ProfileRepositoryError> {
        UserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProfileRepositoryError::NotFound)
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

fn map_write_err(e: DbErr) -> ProfileRepositoryError {
    let err_str = e.to_string().to_lowercase();
    if err_str.contains("23505")
        || err_str.contains("duplicate key")
        || err_str.contains("unique constraint")
    {
        return ProfileRepositoryError::EmailAlreadyExists;
    }
    map_db_err(e)
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserView>, ProfileRepositoryError> {
        let model = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.as_ref().map(UserModel::to_view))
    }

    async fn email_taken_by_other(
        &self,
        email: &str,
        user_id: UserId,
    ) -> Result<bool, ProfileRepositoryError> {
        let count = UserEntity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .filter(Column::Id.ne(user_id.value()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn update_contact(
        &self,
        user_id: UserId,
        changes: ContactChanges,
    ) -> Result<(), ProfileRepositoryError> {
        let user = self.load(user_id.value()).await?;
        let mut active: UserActiveModel = user.into();

        if let Some(v) = changes.first_name {
            active.first_name = Set(v);
        }
        if let Some(v) = changes.last_name {
            active.last_name = Set(v);
        }
        if let Some(v) = changes.email {
            active.email = Set(v);
        }
        // Blank optional fields clear the column.
        let optional = |v: String| if v.is_empty() { None } else { Some(v) };
        if let Some(v) = changes.phone {
            active.phone = Set(optional(v));
        }
        if let Some(v) = changes.country {
            active.country = Set(optional(v));
        }
        if let Some(v) = changes.city {
            active.city = Set(optional(v));
        }
        if let Some(v) = changes.profile_picture {
            active.profile_picture = Set(Some(v));
        }
        if let Some(v) = changes.cover_picture {
            active.cover_picture = Set(Some(v));
        }

        active.update(&*self.db).await.map_err(map_write_err)?;
        Ok(())
    }

    async fn save_investor_section(
        &self,
        user_id: UserId,
        section: Value,
    ) -> Result<(), ProfileRepositoryError> {
        let user = self.load(user_id.value()).await?;
        let mut active: UserActiveModel = user.into();
        active.investor = Set(Some(section));

        active.update(&*self.db).await.map_err(map_db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::Value as DbValue;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;
    use std::collections::BTreeMap;

    use crate::profile::adapter::outgoing::sea_orm_entity::users::fixtures::user_model;
    use crate::profile::application::domain::entities::Role;

    fn count_row(n: i64) -> BTreeMap<String, DbValue> {
        BTreeMap::from([("num_items".to_string(), DbValue::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn find_by_id_maps_model_to_view() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id, Role::Investor)]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let view = repo.find_by_id(UserId::from(id)).await.unwrap().unwrap();

        assert_eq!(view.id, id);
        assert_eq!(view.role, Role::Investor);
    }

    #[tokio::test]
    async fn find_by_id_missing_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_by_id(UserId::from(Uuid::new_v4())).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn email_taken_when_another_row_matches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .append_query_results(vec![vec![count_row(0)]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let me = UserId::from(Uuid::new_v4());

        assert!(repo.email_taken_by_other("x@example.com", me).await.unwrap());
        assert!(!repo.email_taken_by_other("y@example.com", me).await.unwrap());
    }

    #[tokio::test]
    async fn update_contact_writes_changes() {
        let id = Uuid::new_v4();
        let before = user_model(id, Role::Startup);
        let mut after = before.clone();
        after.city = Some("Nairobi".to_string());

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![before]])
            .append_query_results(vec![vec![after]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let changes = ContactChanges {
            city: Some("Nairobi".to_string()),
            ..Default::default()
        };

        assert!(repo.update_contact(UserId::from(id), changes).await.is_ok());
    }

    #[tokio::test]
    async fn update_contact_duplicate_email_is_reported() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id, Role::Startup)]])
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            )])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let changes = ContactChanges {
            email: Some("taken@example.com".to_string()),
            ..Default::default()
        };

        let err = repo
            .update_contact(UserId::from(id), changes)
            .await
            .unwrap_err();
        assert_eq!(err, ProfileRepositoryError::EmailAlreadyExists);
    }

    #[tokio::test]
    async fn update_contact_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let err = repo
            .update_contact(UserId::from(Uuid::new_v4()), ContactChanges::default())
            .await
            .unwrap_err();
        assert_eq!(err, ProfileRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn save_investor_section_replaces_section() {
        let id = Uuid::new_v4();
        let before = user_model(id, Role::Investor);
        let mut after = before.clone();
        after.investor = Some(json!({"bio": "angel"}));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![before]])
            .append_query_results(vec![vec![after]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .save_investor_section(UserId::from(id), json!({"bio": "angel"}))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn database_failure_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        match repo.find_by_id(UserId::from(Uuid::new_v4())).await.unwrap_err() {
            ProfileRepositoryError::DatabaseError(msg) => {
                assert!(msg.contains("connection timeout"))
            }
            other => panic!("expected DatabaseError, got {other:?}"),
        }
    }
}
