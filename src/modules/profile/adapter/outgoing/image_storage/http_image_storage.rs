use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::policies::ValidatedImage;
use crate::profile::application::ports::outgoing::{
    ImageKind, ImageStorage, ImageStorageError, UploadedImage,
};

use super::image_upload_config::ImageUploadConfig;

/// Uploads to a Cloudinary-compatible unsigned upload endpoint.
#[derive(Clone)]
pub struct HttpImageStorage {
    client: Client,
    config: ImageUploadConfig,
}

impl HttpImageStorage {
    pub fn new(config: ImageUploadConfig) -> Result<Self, ImageStorageError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ImageStorageError::UploadFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn request_body(&self, owner: UserId, kind: ImageKind, image: &ValidatedImage) -> Value {
        json!({
            "file": image.data_uri(),
            "upload_preset": self.config.upload_preset,
            "folder": format!("{}/{}", self.config.folder, owner),
            "public_id": kind.as_str(),
            "overwrite": true,
        })
    }
}

fn parse_upload_response(json: Value) -> Result<UploadedImage, ImageStorageError> {
    if let Some(message) = json.pointer("/error/message").and_then(Value::as_str) {
        return Err(ImageStorageError::UploadFailed(message.to_string()));
    }

    json.get("secure_url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(|url| UploadedImage {
            secure_url: url.to_string(),
        })
        .ok_or_else(|| {
            ImageStorageError::InvalidResponse("upload response is missing secure_url".to_string())
        })
}

#[async_trait]
impl ImageStorage for HttpImageStorage {
    async fn upload(
        &self,
        owner: UserId,
        kind: ImageKind,
        image: ValidatedImage,
    ) -> Result<UploadedImage, ImageStorageError> {
        let body = self.request_body(owner, kind, &image);

        let res = self
            .client
            .post(&self.config.upload_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageStorageError::UploadFailed(e.to_string()))?;

        let status = res.status();
        let json: Value = res
            .json()
            .await
            .map_err(|e| ImageStorageError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            let message = json
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("no error message");
            return Err(ImageStorageError::UploadFailed(format!("{status}: {message}")));
        }

        parse_upload_response(json)
    }
}
