use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::profile::application::domain::entities::{ImagePayload, UserView};
use crate::profile::application::ports::incoming::use_cases::{
    UpdateContactInfoCommand, UpdateContactInfoError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateContactInfoRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub profile_image: Option<ImagePayload>,
    pub cover_image: Option<ImagePayload>,
}

impl From<UpdateContactInfoRequest> for UpdateContactInfoCommand {
    fn from(req: UpdateContactInfoRequest) -> Self {
        UpdateContactInfoCommand {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            country: req.country,
            city: req.city,
            profile_image: req.profile_image,
            cover_image: req.cover_image,
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/users/me/contact",
    tag = "profile",
    request_body = UpdateContactInfoRequest,
    responses(
        (status = 200, description = "Contact info updated", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Rejected image", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/users/me/contact")]
pub async fn update_contact_info_handler(
    user: VerifiedUser,
    req: web::Json<UpdateContactInfoRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .update_contact
        .execute(user.user_id, req.into_inner().into())
        .await
    {
        Ok(view) => ApiResponse::success(view),

        Err(UpdateContactInfoError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(UpdateContactInfoError::EmailTaken) => {
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already in use")
        }
        Err(UpdateContactInfoError::InvalidImage(msg)) => {
            ApiResponse::bad_request("INVALID_IMAGE", &msg)
        }
        Err(UpdateContactInfoError::ValidationFailed(msg)) => ApiResponse::validation_failed(&msg),
        Err(e @ UpdateContactInfoError::RepositoryError(_))
        | Err(e @ UpdateContactInfoError::StorageError(_)) => {
            error!("Failed to update contact info of {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
