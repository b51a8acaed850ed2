use async_trait::async_trait;
use serde_json::Value;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::UserView;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Account-level fields. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub profile_picture: Option<String>,
    pub cover_picture: Option<String>,
}

impl ContactChanges {
    pub fn is_empty(&self) -> bool {
        *self == ContactChanges::default()
    }
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserView>, ProfileRepositoryError>;

    /// Whether `email` belongs to an account other than `user_id`.
    async fn email_taken_by_other(
        &self,
        email: &str,
        user_id: UserId,
    ) -> Result<bool, ProfileRepositoryError>;

    async fn update_contact(
        &self,
        user_id: UserId,
        changes: ContactChanges,
    ) -> Result<(), ProfileRepositoryError>;

    /// Replaces the whole `investor` section.
    async fn save_investor_section(
        &self,
        user_id: UserId,
        section: Value,
    ) -> Result<(), ProfileRepositoryError>;
}
