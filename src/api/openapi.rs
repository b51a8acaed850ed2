use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::matching::application::domain::card::{
    Card, CardLocation, KeyPoint, KeyPointValue, StartupDetails, SuccessPrediction, TeamMember,
};
use crate::profile::adapter::incoming::web::routes::UpdateContactInfoRequest;
use crate::profile::application::domain::entities::{ImagePayload, Role, UserView};
use crate::profile::application::domain::investor_profile::{
    CriteriaUpdate, InvestorProfilePatch, RangeInput,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Venture Match API",
        version = "0.1.0",
        description = "Investor and startup profiles, relaxed matching and startup search"
    ),
    paths(
        // Profile
        crate::profile::adapter::incoming::web::routes::update_contact_info_handler,
        crate::profile::adapter::incoming::web::routes::update_investment_criteria_handler,
        crate::profile::adapter::incoming::web::routes::update_investor_profile_handler,

        // Matching
        crate::matching::adapter::incoming::web::routes::get_matching_startups_handler,
        crate::matching::adapter::incoming::web::routes::get_matching_investors_handler,
        crate::matching::adapter::incoming::web::routes::search_startups_handler,
        crate::matching::adapter::incoming::web::routes::get_startup_details_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            UserView,
            Role,
            ImagePayload,
            UpdateContactInfoRequest,
            CriteriaUpdate,
            RangeInput,
            InvestorProfilePatch,
            Card,
            CardLocation,
            KeyPoint,
            KeyPointValue,
            SuccessPrediction,
            StartupDetails,
            TeamMember,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "profile", description = "Owner-only profile updates"),
        (name = "matching", description = "Relaxed matching and startup search"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued for the caller"))
                        .build(),
                ),
            )
        }
    }
}
