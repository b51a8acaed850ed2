pub mod http_image_storage;
pub mod image_upload_config;

pub use http_image_storage::HttpImageStorage;
pub use image_upload_config::ImageUploadConfig;
