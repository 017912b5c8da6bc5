//! User management endpoints

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{AdminCreate, User, UserUpdate};
use std::sync::Arc;

#[derive(Clone)]
pub struct UsersApi {
    http: Arc<HttpClient>,
}

impl UsersApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// PATCH /users/me – partial self-update
    pub async fn update_me(&self, payload: &UserUpdate) -> Result<User, ApiError> {
        self.http.patch("/users/me", payload).await
    }

    /// POST /users/admin – onboard a tenant admin (admin tier required)
    pub async fn create_admin(&self, payload: &AdminCreate) -> Result<User, ApiError> {
        self.http.post("/users/admin", payload).await
    }
}
