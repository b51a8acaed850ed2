use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ImageUploadConfig {
    /// Unsigned upload endpoint, e.g. `https://api.cloudinary.com/v1_1/<cloud>/image/upload`.
    pub upload_url: String,
    pub upload_preset: String,
    pub folder: String,
    pub timeout: Duration,
}

impl ImageUploadConfig {
    pub const DEFAULT_FOLDER: &'static str = "venture-match";

    pub fn from_env() -> Self {
        let upload_url =
            env::var("IMAGE_UPLOAD_URL").expect("IMAGE_UPLOAD_URL must be set in environment");
        let upload_preset = env::var("IMAGE_UPLOAD_PRESET")
            .expect("IMAGE_UPLOAD_PRESET must be set in environment");

        let folder = env::var("IMAGE_UPLOAD_FOLDER")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_FOLDER.to_string());

        let timeout_secs = env::var("IMAGE_UPLOAD_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            upload_url,
            upload_preset,
            folder,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
