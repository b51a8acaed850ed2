use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::matching::application::domain::card::Card;
use crate::matching::application::domain::search_filter::SearchStartupsQuery;
use crate::matching::application::ports::incoming::use_cases::SearchStartupsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every supplied parameter must hold. Funding bounds are inclusive.
#[utoipa::path(
    get,
    path = "/api/startups/search",
    tag = "matching",
    params(SearchStartupsQuery),
    responses(
        (status = 200, description = "Startups matching every parameter", body = inline(SuccessResponse<Vec<Card>>)),
        (status = 400, description = "Invalid parameter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/startups/search")]
pub async fn search_startups_handler(
    _user: VerifiedUser,
    query: web::Query<SearchStartupsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.matching.search_startups.execute(query.into_inner()).await {
        Ok(cards) => ApiResponse::success(cards),

        Err(SearchStartupsError::InvalidArgument(e)) => {
            ApiResponse::bad_request("INVALID_ARGUMENT", &e.to_string())
        }
        Err(SearchStartupsError::Internal(e)) => {
            error!("Startup search failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
