//! Authentication endpoints

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{AuthTokens, LoginPayload, PasswordChange, User};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// The authentication surface the session store depends on.
///
/// A trait seam so the state machine can be exercised against a fake backend
/// without a network.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, payload: &LoginPayload) -> Result<AuthTokens, ApiError>;
    async fn me(&self) -> Result<User, ApiError>;
    async fn logout(&self, refresh_token: Option<&str>) -> Result<(), ApiError>;
}

/// Wrappers for /auth/* and GET /users/me
#[derive(Clone)]
pub struct AuthApi {
    http: Arc<HttpClient>,
}

impl AuthApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// POST /auth/login – obtain a JWT pair
    pub async fn login(&self, payload: &LoginPayload) -> Result<AuthTokens, ApiError> {
        self.http.post("/auth/login", payload).await
    }

    /// POST /auth/refresh – rotate the pair.
    ///
    /// Defined for completeness; no component invokes it automatically, so an
    /// expired access token degrades to forced re-login.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, ApiError> {
        self.http
            .post("/auth/refresh", &json!({ "refresh_token": refresh_token }))
            .await
    }

    /// POST /auth/logout – revoke the refresh token server-side
    pub async fn logout(&self, refresh_token: Option<&str>) -> Result<(), ApiError> {
        match refresh_token {
            Some(token) => {
                self.http
                    .post_unit("/auth/logout", &json!({ "refresh_token": token }))
                    .await
            }
            None => self.http.post_empty("/auth/logout").await,
        }
    }

    /// GET /users/me – current user identity
    pub async fn me(&self) -> Result<User, ApiError> {
        self.http.get("/users/me").await
    }

    /// POST /auth/password-reset/request – always succeeds server-side to
    /// prevent user enumeration
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.http
            .post_unit("/auth/password-reset/request", &json!({ "email": email }))
            .await
    }

    /// POST /auth/password-reset/confirm
    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        self.http
            .post_unit(
                "/auth/password-reset/confirm",
                &json!({ "token": token, "new_password": new_password }),
            )
            .await
    }

    /// POST /auth/change-password – authenticated password change
    pub async fn change_password(&self, payload: &PasswordChange) -> Result<(), ApiError> {
        self.http.post_unit("/auth/change-password", payload).await
    }
}

#[async_trait]
impl AuthBackend for AuthApi {
    async fn login(&self, payload: &LoginPayload) -> Result<AuthTokens, ApiError> {
        AuthApi::login(self, payload).await
    }

    async fn me(&self) -> Result<User, ApiError> {
        AuthApi::me(self).await
    }

    async fn logout(&self, refresh_token: Option<&str>) -> Result<(), ApiError> {
        AuthApi::logout(self, refresh_token).await
    }
}
