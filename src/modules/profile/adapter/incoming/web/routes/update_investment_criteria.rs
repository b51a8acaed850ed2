use actix_web::{put, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::profile::application::domain::entities::UserView;
use crate::profile::application::domain::investor_profile::CriteriaUpdate;
use crate::profile::application::ports::incoming::use_cases::UpdateInvestmentCriteriaError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fields may be sent as a single value or a list; `stage: "seed"` is stored
/// as `["seed"]`.
#[utoipa::path(
    put,
    path = "/api/investors/me/criteria",
    tag = "profile",
    request_body = CriteriaUpdate,
    responses(
        (status = 200, description = "Criteria updated", body = inline(SuccessResponse<UserView>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Investor not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/investors/me/criteria")]
pub async fn update_investment_criteria_handler(
    user: VerifiedUser,
    req: web::Json<CriteriaUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .profile
        .update_criteria
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(view) => ApiResponse::success(view),

        Err(UpdateInvestmentCriteriaError::NotFound) => {
            ApiResponse::not_found("INVESTOR_NOT_FOUND", "Investor not found")
        }
        Err(UpdateInvestmentCriteriaError::ValidationFailed(msg)) => {
            ApiResponse::validation_failed(&msg)
        }
        Err(UpdateInvestmentCriteriaError::RepositoryError(e)) => {
            error!("Repository error updating criteria of {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
