//! Matrimonial profile endpoints

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Paginated, Profile, ProfileListItem, ProfileQuery, ProfileUpdate};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProfilesApi {
    http: Arc<HttpClient>,
}

impl ProfilesApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// GET /profiles – paginated listing with optional filters
    pub async fn list(&self, query: &ProfileQuery) -> Result<Paginated<ProfileListItem>, ApiError> {
        self.http.get_query("/profiles", query).await
    }

    /// GET /profiles/:id
    pub async fn get(&self, id: Uuid) -> Result<Profile, ApiError> {
        self.http.get(&format!("/profiles/{id}")).await
    }

    /// GET /profiles/me – the caller's own profile
    pub async fn mine(&self) -> Result<Profile, ApiError> {
        self.http.get("/profiles/me").await
    }

    /// POST /profiles – create; fields not set are omitted from the payload
    pub async fn create(&self, data: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.http.post("/profiles", data).await
    }

    /// PATCH /profiles/:id – partial edit, forwarded verbatim
    pub async fn update(&self, id: Uuid, data: &ProfileUpdate) -> Result<Profile, ApiError> {
        self.http.patch(&format!("/profiles/{id}"), data).await
    }

    /// DELETE /profiles/:id
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete_unit(&format!("/profiles/{id}")).await
    }
}
