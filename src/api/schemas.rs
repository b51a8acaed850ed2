// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope as produced by `ApiResponse::success`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
    #[schema(example = "OK")]
    pub message: String,
}

/// Failure envelope. `data` is always `null`.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(value_type = Option<Object>)]
    pub data: Option<()>,
    #[schema(example = "Investor not found")]
    pub message: String,
    /// Machine readable code, e.g. `VALIDATION_FAILED`.
    #[schema(example = "INVESTOR_NOT_FOUND")]
    pub code: String,
}
