use crate::models::{AuthResponse, HealthStatus, LoginRequest, RegisterRequest};
use crate::{Client, ClientResult, UserInfo};

use log::info;
use sawit_config::AuthEndpoints;

/// Login, registration and the local session
pub struct AuthService<'a> {
    client: &'a Client,
    endpoints: &'a AuthEndpoints,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a Client, endpoints: &'a AuthEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Log in and store the returned session
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self
            .client
            .post(&self.endpoints.login, credentials)
            .await?;
        self.client.save_auth(&response)?;
        info!("logged in as {} ({})", response.username, response.role);
        Ok(response)
    }

    /// Register a new account and store the returned session
    pub async fn register(&self, data: &RegisterRequest) -> ClientResult<AuthResponse> {
        let response: AuthResponse = self.client.post(&self.endpoints.register, data).await?;
        self.client.save_auth(&response)?;
        info!("registered {} ({})", response.username, response.role);
        Ok(response)
    }

    pub fn logout(&self) -> ClientResult<()> {
        self.client.clear_auth()
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.is_authenticated()
    }

    pub fn get_user_info(&self) -> Option<UserInfo> {
        self.client.get_user_info()
    }

    pub async fn check_health(&self) -> ClientResult<HealthStatus> {
        self.client.get(&self.endpoints.health).await
    }
}
