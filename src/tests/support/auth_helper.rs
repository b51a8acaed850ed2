use std::sync::Arc;

use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "venture-match-test".to_string(),
        access_token_expiry: 3600,
    }
}

/// Registered with `web::Data::new(..)`, the same way `main` does it.
pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(test_jwt_config()))
}

/// `Authorization` header value for `user_id`, signed with the test key.
pub fn bearer(user_id: Uuid) -> String {
    let token = test_token_provider()
        .generate_access_token(user_id)
        .expect("test token");
    format!("Bearer {}", token)
}
