//! Partner preference endpoints

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{PartnerPreference, PartnerPreferenceUpsert};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct PreferencesApi {
    http: Arc<HttpClient>,
}

impl PreferencesApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// GET /profiles/:id/preferences – 404 until first upsert
    pub async fn get(&self, profile_id: Uuid) -> Result<PartnerPreference, ApiError> {
        self.http
            .get(&format!("/profiles/{profile_id}/preferences"))
            .await
    }

    /// PUT /profiles/:id/preferences – idempotent upsert
    pub async fn upsert(
        &self,
        profile_id: Uuid,
        body: &PartnerPreferenceUpsert,
    ) -> Result<PartnerPreference, ApiError> {
        self.http
            .put(&format!("/profiles/{profile_id}/preferences"), body)
            .await
    }
}
