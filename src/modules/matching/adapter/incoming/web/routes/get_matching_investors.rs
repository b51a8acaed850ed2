use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::matching::application::domain::card::Card;
use crate::matching::application::ports::incoming::use_cases::GetMatchingInvestorsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Investors whose criteria overlap the caller's startup profile.
#[utoipa::path(
    get,
    path = "/api/matches/investors",
    tag = "matching",
    responses(
        (status = 200, description = "Matching investors", body = inline(SuccessResponse<Vec<Card>>)),
        (status = 400, description = "Startup profile not set up", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/matches/investors")]
pub async fn get_matching_investors_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.matching.matching_investors.execute(user.user_id).await {
        Ok(cards) => ApiResponse::success(cards),

        Err(GetMatchingInvestorsError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetMatchingInvestorsError::InvalidArgument(msg)) => {
            ApiResponse::bad_request("STARTUP_PROFILE_MISSING", &msg)
        }
        Err(GetMatchingInvestorsError::Internal(e)) => {
            error!("Failed to match investors for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::UserId;
    use crate::matching::application::ports::incoming::use_cases::GetMatchingInvestorsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, test_token_provider};
    use crate::tests::support::fixtures::investor_card;

    struct MockMatchingInvestors {
        result: Result<Vec<Card>, GetMatchingInvestorsError>,
    }

    #[async_trait]
    impl GetMatchingInvestorsUseCase for MockMatchingInvestors {
        async fn execute(
            &self,
            _startup_id: UserId,
        ) -> Result<Vec<Card>, GetMatchingInvestorsError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<Vec<Card>, GetMatchingInvestorsError>) -> (StatusCode, Value) {
        let state = TestAppStateBuilder::default()
            .with_matching_investors(MockMatchingInvestors { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(get_matching_investors_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/matches/investors")
            .insert_header(("Authorization", bearer(Uuid::new_v4())))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn investor_cards_use_name_and_bio() {
        let (status, body) = call(Ok(vec![investor_card("Grace Hopper")])).await;

        assert_eq!(status, StatusCode::OK);
        let card = &body["data"][0];
        assert_eq!(card["name"], "Grace Hopper");
        assert!(card.get("bio").is_some());
        assert!(card.get("executive").is_none());
    }

    #[actix_web::test]
    async fn missing_startup_profile_is_400() {
        let (status, body) = call(Err(GetMatchingInvestorsError::InvalidArgument(
            "Startup profile has not been set up".to_string(),
        )))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "STARTUP_PROFILE_MISSING");
    }

    #[actix_web::test]
    async fn unknown_user_is_404() {
        let (status, _) = call(Err(GetMatchingInvestorsError::NotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
