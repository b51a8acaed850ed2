use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{ImagePayload, UserView};
use crate::profile::application::domain::policies::{ImageUploadPolicy, ValidatedImage};
use crate::profile::application::ports::incoming::use_cases::{
    UpdateContactInfoCommand, UpdateContactInfoError, UpdateContactInfoUseCase,
};
use crate::profile::application::ports::outgoing::{
    ContactChanges, ImageKind, ImageStorage, ProfileRepository, ProfileRepositoryError,
};

const MAX_NAME_LEN: usize = 100;

static PHONE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn phone_pattern() -> &'static Regex {
    PHONE_PATTERN
        .get_or_init(|| Regex::new(r"^\+?[0-9][0-9 ()\-]{5,19}$").expect("valid phone pattern"))
}

pub struct UpdateContactInfoService<R, S>
where
    R: ProfileRepository,
    S: ImageStorage,
{
    repository: R,
    storage: S,
    policy: ImageUploadPolicy,
}

impl<R, S> UpdateContactInfoService<R, S>
where
    R: ProfileRepository,
    S: ImageStorage,
{
    pub fn new(repository: R, storage: S, policy: ImageUploadPolicy) -> Self {
        Self {
            repository,
            storage,
            policy,
        }
    }

    fn check_image(
        &self,
        user_id: UserId,
        kind: ImageKind,
        payload: Option<&ImagePayload>,
    ) -> Result<Option<ValidatedImage>, UpdateContactInfoError> {
        let Some(payload) = payload else {
            return Ok(None);
        };

        self.policy.validate(payload).map(Some).map_err(|rejection| {
            warn!(
                "Rejected {} image '{}' for user {}: {}",
                kind.as_str(),
                payload.file_name,
                user_id,
                rejection
            );
            UpdateContactInfoError::InvalidImage(rejection.to_string())
        })
    }

    async fn store(
        &self,
        user_id: UserId,
        kind: ImageKind,
        image: Option<ValidatedImage>,
    ) -> Result<Option<String>, UpdateContactInfoError> {
        match image {
            None => Ok(None),
            Some(image) => self
                .storage
                .upload(user_id, kind, image)
                .await
                .map(|uploaded| Some(uploaded.secure_url))
                .map_err(|e| UpdateContactInfoError::StorageError(e.to_string())),
        }
    }
}

fn validate(command: &UpdateContactInfoCommand) -> Vec<String> {
    let mut problems = Vec::new();

    for (field, value) in [
        ("firstName", &command.first_name),
        ("lastName", &command.last_name),
    ] {
        if let Some(name) = value {
            let name = name.trim();
            if name.is_empty() {
                problems.push(format!("{field} must not be empty"));
            } else if name.chars().count() > MAX_NAME_LEN {
                problems.push(format!("{field} must be at most {MAX_NAME_LEN} characters"));
            }
        }
    }

    if let Some(email) = &command.email {
        if !EmailAddress::is_valid(email.trim()) {
            problems.push("email is not a valid email address".to_string());
        }
    }

    if let Some(phone) = &command.phone {
        let phone = phone.trim();
        if !phone.is_empty() && !phone_pattern().is_match(phone) {
            problems.push("phone is not a valid phone number".to_string());
        }
    }

    for (field, value) in [("country", &command.country), ("city", &command.city)] {
        if let Some(place) = value {
            if place.trim().chars().count() > MAX_NAME_LEN {
                problems.push(format!("{field} must be at most {MAX_NAME_LEN} characters"));
            }
        }
    }

    problems
}

// Uploaded images are not rolled back when a later step fails.
fn warn_orphaned<'a>(user_id: UserId, urls: impl Iterator<Item = &'a String>) {
    for url in urls {
        warn!(
            "Contact update for user {} failed after upload; orphaned image {}",
            user_id, url
        );
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

fn map_repo_err(e: ProfileRepositoryError) -> UpdateContactInfoError {
    match e {
        ProfileRepositoryError::NotFound => UpdateContactInfoError::NotFound,
        ProfileRepositoryError::EmailAlreadyExists => UpdateContactInfoError::EmailTaken,
        ProfileRepositoryError::DatabaseError(msg) => UpdateContactInfoError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R, S> UpdateContactInfoUseCase for UpdateContactInfoService<R, S>
where
    R: ProfileRepository + Send + Sync,
    S: ImageStorage + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateContactInfoCommand,
    ) -> Result<UserView, UpdateContactInfoError> {
        let problems = validate(&command);
        if !problems.is_empty() {
            return Err(UpdateContactInfoError::ValidationFailed(problems.join("; ")));
        }

        let current = self
            .repository
            .find_by_id(user_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(UpdateContactInfoError::NotFound)?;

        let email = command.email.as_ref().map(|e| e.trim().to_lowercase());
        if let Some(email) = email.as_deref() {
            if !email.eq_ignore_ascii_case(&current.email)
                && self
                    .repository
                    .email_taken_by_other(email, user_id)
                    .await
                    .map_err(map_repo_err)?
            {
                return Err(UpdateContactInfoError::EmailTaken);
            }
        }

        // Both images are checked before either is uploaded.
        let profile_image =
            self.check_image(user_id, ImageKind::Profile, command.profile_image.as_ref())?;
        let cover_image =
            self.check_image(user_id, ImageKind::Cover, command.cover_image.as_ref())?;

        let profile_picture = self.store(user_id, ImageKind::Profile, profile_image).await?;
        let cover_picture = match self.store(user_id, ImageKind::Cover, cover_image).await {
            Ok(url) => url,
            Err(e) => {
                warn_orphaned(user_id, profile_picture.iter());
                return Err(e);
            }
        };

        let changes = ContactChanges {
            first_name: trimmed(command.first_name),
            last_name: trimmed(command.last_name),
            email,
            phone: trimmed(command.phone),
            country: trimmed(command.country),
            city: trimmed(command.city),
            profile_picture,
            cover_picture,
        };

        if !changes.is_empty() {
            let uploaded: Vec<String> = changes
                .profile_picture
                .iter()
                .chain(changes.cover_picture.iter())
                .cloned()
                .collect();
            if let Err(e) = self.repository.update_contact(user_id, changes).await {
                warn_orphaned(user_id, uploaded.iter());
                return Err(map_repo_err(e));
            }
        }

        self.repository
            .find_by_id(user_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(UpdateContactInfoError::NotFound)
    }
}
