pub mod image_storage;
pub mod profile_repository;

pub use image_storage::{ImageKind, ImageStorage, ImageStorageError, UploadedImage};
pub use profile_repository::{ContactChanges, ProfileRepository, ProfileRepositoryError};
