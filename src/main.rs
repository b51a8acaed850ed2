pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, matching, profile};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::matching::adapter::outgoing::ProfileQueryPostgres;
use crate::matching::application::matching_use_cases::MatchingUseCases;
use crate::matching::application::services::{
    GetMatchingInvestorsService, GetMatchingStartupsService, GetStartupDetailsService,
    SearchStartupsService,
};
use crate::profile::adapter::outgoing::image_storage::{HttpImageStorage, ImageUploadConfig};
use crate::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::profile::application::domain::policies::ImageUploadPolicy;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::services::{
    UpdateContactInfoService, UpdateInvestmentCriteriaService, UpdateInvestorProfileService,
};
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
    pub matching: MatchingUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let server_url = format!("{host}:{port}");

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // Profile
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let image_storage = HttpImageStorage::new(ImageUploadConfig::from_env())
        .expect("Failed to build image upload client");

    let profile = ProfileUseCases {
        update_contact: Arc::new(UpdateContactInfoService::new(
            profile_repo.clone(),
            image_storage,
            ImageUploadPolicy::default(),
        )),
        update_criteria: Arc::new(UpdateInvestmentCriteriaService::new(profile_repo.clone())),
        update_investor_profile: Arc::new(UpdateInvestorProfileService::new(profile_repo)),
    };

    // Matching
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let matching = MatchingUseCases {
        matching_startups: Arc::new(GetMatchingStartupsService::new(profile_query.clone())),
        matching_investors: Arc::new(GetMatchingInvestorsService::new(profile_query.clone())),
        search_startups: Arc::new(SearchStartupsService::new(profile_query.clone())),
        startup_details: Arc::new(GetStartupDetailsService::new(profile_query)),
    };

    let state = AppState { profile, matching };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::from_env()));
    let db_for_server = Arc::clone(&db_arc);

    info!("Server listening on {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::update_contact_info_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_investment_criteria_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_investor_profile_handler);
    // Matching; search is registered before the `{id}` route
    cfg.service(crate::matching::adapter::incoming::web::routes::get_matching_startups_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::get_matching_investors_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::search_startups_handler);
    cfg.service(crate::matching::adapter::incoming::web::routes::get_startup_details_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
