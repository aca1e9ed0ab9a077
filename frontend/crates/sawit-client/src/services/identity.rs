use crate::models::{AuthResponse, RegisterRequest};
use crate::{Client, ClientResult};

use sawit_config::AuthEndpoints;

const DUMMY_PASSWORD: &str = "dummy123";

/// Throwaway registration data keyed by `seed` (usually a timestamp).
pub fn build_dummy_identity(seed: u128) -> RegisterRequest {
    RegisterRequest {
        username: format!("dummy.user.{seed}"),
        email: format!("dummy.{seed}@mysawit.local"),
        password: DUMMY_PASSWORD.to_string(),
    }
}

/// Identity administration. Unlike [`super::AuthService::register`], nothing
/// here touches the local session.
pub struct IdentityService<'a> {
    client: &'a Client,
    endpoints: &'a AuthEndpoints,
}

impl<'a> IdentityService<'a> {
    pub fn new(client: &'a Client, endpoints: &'a AuthEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn create_dummy_user(&self, data: &RegisterRequest) -> ClientResult<AuthResponse> {
        self.client.post(&self.endpoints.register, data).await
    }
}
