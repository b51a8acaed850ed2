use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::policies::ValidatedImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Profile,
    Cover,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Profile => "profile",
            ImageKind::Cover => "cover",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub secure_url: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageStorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Unexpected storage response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait ImageStorage: Send + Sync {
    async fn upload(
        &self,
        owner: UserId,
        kind: ImageKind,
        image: ValidatedImage,
    ) -> Result<UploadedImage, ImageStorageError>;
}
