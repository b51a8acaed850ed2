pub mod card;
pub mod criteria;
pub mod document;
pub mod filter;
pub mod flags;
pub mod relaxed_match;
pub mod search_filter;

/// A user record as seen by matching: camelCase keys, role sections nested
/// under `investor` / `startup`.
pub type ProfileDocument = serde_json::Value;
