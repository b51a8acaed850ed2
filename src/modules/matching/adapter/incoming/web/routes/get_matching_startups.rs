use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::matching::application::domain::card::Card;
use crate::matching::application::ports::incoming::use_cases::GetMatchingStartupsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Startups matching the caller's stored investment criteria.
#[utoipa::path(
    get,
    path = "/api/matches/startups",
    tag = "matching",
    responses(
        (status = 200, description = "Matching startups", body = inline(SuccessResponse<Vec<Card>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Investor profile not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/matches/startups")]
pub async fn get_matching_startups_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.matching.matching_startups.execute(user.user_id).await {
        Ok(cards) => ApiResponse::success(cards),

        Err(GetMatchingStartupsError::NotFound) => {
            ApiResponse::not_found("INVESTOR_NOT_FOUND", "Investor profile not found")
        }
        Err(GetMatchingStartupsError::Internal(e)) => {
            error!("Failed to match startups for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
