use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{ImagePayload, UserView};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContactInfoCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub profile_image: Option<ImagePayload>,
    pub cover_image: Option<ImagePayload>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateContactInfoError {
    #[error("User not found")]
    NotFound,

    #[error("Email already in use")]
    EmailTaken,

    #[error("{0}")]
    InvalidImage(String),

    #[error("{0}")]
    ValidationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Image storage error: {0}")]
    StorageError(String),
}

#[async_trait]
pub trait UpdateContactInfoUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateContactInfoCommand,
    ) -> Result<UserView, UpdateContactInfoError>;
}
