use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::matching::application::domain::card::StartupDetails;
use crate::matching::application::ports::incoming::use_cases::GetStartupDetailsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/startups/{id}",
    tag = "matching",
    params(("id" = String, Path, description = "Startup user id")),
    responses(
        (status = 200, description = "Startup details", body = inline(SuccessResponse<StartupDetails>)),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Startup not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/startups/{id}")]
pub async fn get_startup_details_handler(
    _user: VerifiedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.matching.startup_details.execute(&id).await {
        Ok(details) => ApiResponse::success(details),

        Err(GetStartupDetailsError::InvalidArgument(_)) => {
            ApiResponse::bad_request("INVALID_ID", "Startup id must be a UUID")
        }
        Err(GetStartupDetailsError::NotFound) => {
            ApiResponse::not_found("STARTUP_NOT_FOUND", "Startup not found")
        }
        Err(GetStartupDetailsError::Internal(e)) => {
            error!("Failed to load startup {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}
