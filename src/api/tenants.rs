//! Tenant administration endpoints (super-admin surface)

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::models::{Tenant, TenantCreate, TenantList, TenantUpdate};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct TenantsApi {
    http: Arc<HttpClient>,
}

impl TenantsApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// GET /admin/tenants/ – paginated, optionally filtered by active state
    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        is_active: Option<bool>,
    ) -> Result<TenantList, ApiError> {
        let mut query: Vec<(&str, String)> = vec![
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        if let Some(active) = is_active {
            query.push(("is_active", active.to_string()));
        }
        self.http.get_query("/admin/tenants/", &query).await
    }

    /// GET /admin/tenants/:id
    pub async fn get(&self, id: Uuid) -> Result<Tenant, ApiError> {
        self.http.get(&format!("/admin/tenants/{id}")).await
    }

    /// POST /admin/tenants/
    pub async fn create(&self, payload: &TenantCreate) -> Result<Tenant, ApiError> {
        self.http.post("/admin/tenants/", payload).await
    }

    /// PATCH /admin/tenants/:id
    pub async fn update(&self, id: Uuid, payload: &TenantUpdate) -> Result<Tenant, ApiError> {
        self.http
            .patch(&format!("/admin/tenants/{id}"), payload)
            .await
    }

    /// DELETE /admin/tenants/:id – deactivation, not a hard delete
    pub async fn deactivate(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete_unit(&format!("/admin/tenants/{id}")).await
    }
}
