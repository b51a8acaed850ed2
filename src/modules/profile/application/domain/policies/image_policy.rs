use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::profile::application::domain::entities::ImagePayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Webp => "image/webp",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "webp" => Some(ImageFormat::Webp),
            _ => None,
        }
    }

    fn sniff(bytes: &[u8]) -> Option<Self> {
        // JPEG: FF D8 FF
        if bytes.len() >= 3 && bytes[..3] == [0xFF, 0xD8, 0xFF] {
            return Some(ImageFormat::Jpeg);
        }
        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if bytes.len() >= 8 && &bytes[..8] == b"\x89PNG\r\n\x1a\n" {
            return Some(ImageFormat::Png);
        }
        // WEBP: RIFF .... WEBP
        if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            return Some(ImageFormat::Webp);
        }
        None
    }
}

/// Decoded image that passed every policy check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedImage {
    pub file_name: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl ValidatedImage {
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime_type(),
            STANDARD.encode(&self.bytes)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageRejection {
    #[error("Invalid file name")]
    InvalidFileName,

    #[error("Unsupported image type '{0}'. Allowed: jpg, jpeg, png, webp")]
    UnsupportedExtension(String),

    #[error("Image data is not valid base64")]
    InvalidEncoding,

    #[error("Image exceeds the maximum size of {max_bytes} bytes")]
    TooLarge { max_bytes: usize },

    #[error("Image content does not match its file extension")]
    ContentMismatch,
}

#[derive(Debug, Clone)]
pub struct ImageUploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_file_name_len: usize,
    pub allowed_extensions: &'static [&'static str],
}

impl Default for ImageUploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_file_name_len: 255,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
        }
    }
}

impl ImageUploadPolicy {
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] = &["jpg", "jpeg", "png", "webp"];

    pub fn validate(&self, payload: &ImagePayload) -> Result<ValidatedImage, ImageRejection> {
        let file_name = payload.file_name.trim();
        if file_name.is_empty() || file_name.len() > self.max_file_name_len {
            return Err(ImageRejection::InvalidFileName);
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .ok_or_else(|| ImageRejection::UnsupportedExtension(String::new()))?;

        if !self.allowed_extensions.contains(&extension.as_str()) {
            return Err(ImageRejection::UnsupportedExtension(extension));
        }
        let declared = ImageFormat::from_extension(&extension)
            .ok_or_else(|| ImageRejection::UnsupportedExtension(extension.clone()))?;

        // Tolerate data URIs as well as bare base64.
        let encoded = match payload.data.split_once(";base64,") {
            Some((_, rest)) => rest,
            None => payload.data.as_str(),
        };

        // base64 grows data by 4/3; reject obviously oversized input before decoding.
        if encoded.len() / 4 * 3 > self.max_file_size_bytes + 3 {
            return Err(ImageRejection::TooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|_| ImageRejection::InvalidEncoding)?;

        if bytes.len() > self.max_file_size_bytes {
            return Err(ImageRejection::TooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        if ImageFormat::sniff(&bytes) != Some(declared) {
            return Err(ImageRejection::ContentMismatch);
        }

        Ok(ValidatedImage {
            file_name: file_name.to_string(),
            format: declared,
            bytes,
        })
    }
}
