mod client;
mod error_message;

use crate::models::AuthResponse;

pub(crate) fn sample_auth() -> AuthResponse {
    AuthResponse {
        token: "jwt".to_string(),
        token_type: "Bearer".to_string(),
        id: 10,
        username: "user".to_string(),
        email: "user@mail.com".to_string(),
        role: "USER".to_string(),
    }
}
