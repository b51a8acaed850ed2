use actix_web::{patch, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::profile::application::domain::entities::UserView;
use crate::profile::application::domain::investor_profile::InvestorProfilePatch;
use crate::profile::application::ports::incoming::use_cases::UpdateInvestorProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Omitted fields are kept, `null` clears a field.
#[utoipa::path(
    patch,
    path = "/api/investors/me/profile",
    tag = "profile",
    request_body = InvestorProfilePatch,
    responses(
        (status = 200, description = "Investor profile updated", body = inline(SuccessResponse<UserView>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Investor not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[patch("/api/investors/me/profile")]
pub async fn update_investor_profile_handler(
    user: VerifiedUser,
    req: web::Json<InvestorProfilePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .update_investor_profile
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),

        Err(UpdateInvestorProfileError::NotFound) => {
            ApiResponse::not_found("INVESTOR_NOT_FOUND", "Investor not found")
        }
        Err(UpdateInvestorProfileError::ValidationFailed(msg)) => {
            ApiResponse::validation_failed(&msg)
        }
        Err(UpdateInvestorProfileError::RepositoryError(e)) => {
            error!("Repository error patching investor profile of {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
