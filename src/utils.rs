use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;

/// `base64(email:api_key)`, the credential part of a Basic `Authorization` header.
pub fn basic_auth_token(email: &str, api_key: &str) -> String {
    STANDARD.encode(format!("{}:{}", email, api_key))
}

/// Appends the current unix time in milliseconds so repeated runs don't collide.
pub fn timestamped_name(name: &str) -> String {
    format!("{} {}", name, Utc::now().timestamp_millis())
}
