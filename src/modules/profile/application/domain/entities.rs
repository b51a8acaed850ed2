use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// Account role. Stored as a lowercase string in the `role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Investor,
    Startup,
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Investor => "investor",
            Role::Startup => "startup",
            Role::Other => "other",
        }
    }

    /// Key of the nested profile section owned by this role.
    pub fn section_key(&self) -> &'static str {
        self.as_str()
    }

    /// Unrecognized values are treated as `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "investor" => Role::Investor,
            "startup" => Role::Startup,
            _ => Role::Other,
        }
    }
}

/// A user record without secrets, as returned by every profile update.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub profile_picture: Option<String>,
    pub cover_picture: Option<String>,
    pub role: Role,
    #[schema(value_type = Option<Object>)]
    pub investor: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub startup: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserView {
    pub fn is_investor(&self) -> bool {
        self.role == Role::Investor
    }
}

/// Base64 image as sent by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub file_name: String,
    pub data: String,
}
