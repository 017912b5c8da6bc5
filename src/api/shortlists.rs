//! Shortlist endpoints – express, accept, or withdraw interest

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Shortlist, ShortlistCreate, ShortlistList, ShortlistStatus, ShortlistStatusUpdate};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct ShortlistsApi {
    http: Arc<HttpClient>,
}

impl ShortlistsApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// POST /shortlists/ – express interest in a profile
    pub async fn create(&self, payload: &ShortlistCreate) -> Result<Shortlist, ApiError> {
        self.http.post("/shortlists/", payload).await
    }

    /// GET /shortlists/sent
    pub async fn sent(&self) -> Result<ShortlistList, ApiError> {
        self.http.get("/shortlists/sent").await
    }

    /// GET /shortlists/received
    pub async fn received(&self) -> Result<ShortlistList, ApiError> {
        self.http.get("/shortlists/received").await
    }

    /// PATCH /shortlists/:id – accept or reject (recipient only)
    pub async fn update_status(
        &self,
        id: Uuid,
        status: ShortlistStatus,
    ) -> Result<Shortlist, ApiError> {
        self.http
            .patch(&format!("/shortlists/{id}"), &ShortlistStatusUpdate { status })
            .await
    }

    /// DELETE /shortlists/:id – withdraw (sender only)
    pub async fn withdraw(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete_unit(&format!("/shortlists/{id}")).await
    }
}
