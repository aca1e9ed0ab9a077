use crate::models::AuthResponse;
use crate::{ClientError, ClientResult, SessionKey, SessionStore, UserInfo};

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Message used when a failed response carries no usable `error` field.
pub const REQUEST_FAILED: &str = "Request failed";

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client shared by every MySawit service wrapper.
///
/// Holds no session state itself: the bearer token and user fields are read
/// from, and written to, the injected [`SessionStore`] on every call.
#[derive(Clone)]
pub struct Client {
    http: ReqwestClient,
    session: Arc<dyn SessionStore>,
}

impl Client {
    /// Create a new client over the given session store
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self::with_http_client(ReqwestClient::new(), session)
    }

    /// Create a client reusing an existing reqwest client
    pub fn with_http_client(http: ReqwestClient, session: Arc<dyn SessionStore>) -> Self {
        Self { http, session }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    // =========================================================================
    // Requests
    // =========================================================================

    /// GET `url` and decode the JSON body as `T`
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, url);
        self.execute(Method::GET, url, req).await
    }

    /// POST `body` as JSON to `url` and decode the JSON response as `T`
    pub async fn post<T, B>(&self, url: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::POST, url).body(serde_json::to_string(body)?);
        self.execute(Method::POST, url, req).await
    }

    /// PUT `body` as JSON to `url` and decode the JSON response as `T`
    pub async fn put<T, B>(&self, url: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::PUT, url).body(serde_json::to_string(body)?);
        self.execute(Method::PUT, url, req).await
    }

    /// DELETE `url` and decode the JSON body as `T`
    pub async fn delete<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let req = self.request(Method::DELETE, url);
        self.execute(Method::DELETE, url, req).await
    }

    /// Build a request with the JSON content type and, when a session token is
    /// stored, the bearer credential
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if let Some(token) = self.auth_token() {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        req
    }

    /// Execute request and normalize failures
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        debug!("{method} {url}");

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!("{method} {url} failed with {status}: {message}");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        // An empty success body decodes as JSON null, so callers expecting
        // `Value` or `Option<_>` still succeed on 204-style responses.
        let body: &[u8] = if body.is_empty() { b"null" } else { &body };
        serde_json::from_slice(body).map_err(ClientError::from_json)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Persist the session from a login/register response.
    ///
    /// All four keys are written together. Without storage capability this is
    /// a no-op.
    pub fn save_auth(&self, auth: &AuthResponse) -> ClientResult<()> {
        if !self.session.is_available() {
            debug!("session storage unavailable, not saving auth");
            return Ok(());
        }

        let id = auth.id.to_string();
        self.session.set_all(&[
            (SessionKey::AuthToken, auth.token.as_str()),
            (SessionKey::UserId, id.as_str()),
            (SessionKey::Username, auth.username.as_str()),
            (SessionKey::UserRole, auth.role.as_str()),
        ])?;

        debug!("session saved for user {}", auth.username);
        Ok(())
    }

    /// Remove all four session keys. Without storage capability this is a no-op.
    pub fn clear_auth(&self) -> ClientResult<()> {
        if !self.session.is_available() {
            return Ok(());
        }

        self.session.clear()?;
        debug!("session cleared");
        Ok(())
    }

    /// True iff a non-empty token is stored
    pub fn is_authenticated(&self) -> bool {
        self.auth_token().is_some()
    }

    /// The stored user fields, or `None` when no storage is available
    pub fn get_user_info(&self) -> Option<UserInfo> {
        if !self.session.is_available() {
            return None;
        }

        Some(UserInfo {
            id: self.session.get(SessionKey::UserId),
            username: self.session.get(SessionKey::Username),
            role: self.session.get(SessionKey::UserRole),
        })
    }

    fn auth_token(&self) -> Option<String> {
        if !self.session.is_available() {
            return None;
        }

        self.session
            .get(SessionKey::AuthToken)
            .filter(|token| !token.is_empty())
    }
}

/// Extract the `error` string from a failure body.
///
/// Anything else (missing field, non-string or empty value, a body that is
/// not JSON at all) yields [`REQUEST_FAILED`].
pub(crate) fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|payload| payload.get("error"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(REQUEST_FAILED)
        .to_string()
}
