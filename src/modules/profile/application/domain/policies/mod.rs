pub mod image_policy;

pub use image_policy::{ImageFormat, ImageRejection, ImageUploadPolicy, ValidatedImage};
