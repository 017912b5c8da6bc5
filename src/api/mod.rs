//! Domain API Modules
//!
//! Typed request/response wrappers over the HTTP client. Each function takes
//! a typed payload or path parameter, issues exactly one HTTP call, and
//! returns the parsed body or unit. No retries, no batching, no caching;
//! errors propagate as the underlying transport failure.

pub mod auth;
pub mod files;
pub mod preferences;
pub mod profiles;
pub mod shortlists;
pub mod tenants;
pub mod users;

pub use auth::{AuthApi, AuthBackend};
pub use files::FilesApi;
pub use preferences::PreferencesApi;
pub use profiles::ProfilesApi;
pub use shortlists::ShortlistsApi;
pub use tenants::TenantsApi;
pub use users::UsersApi;

use crate::http::HttpClient;
use std::sync::Arc;

/// All domain wrappers over one shared HTTP client
#[derive(Clone)]
pub struct Api {
    pub auth: AuthApi,
    pub users: UsersApi,
    pub profiles: ProfilesApi,
    pub preferences: PreferencesApi,
    pub tenants: TenantsApi,
    pub files: FilesApi,
    pub shortlists: ShortlistsApi,
}

impl Api {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self {
            auth: AuthApi::new(http.clone()),
            users: UsersApi::new(http.clone()),
            profiles: ProfilesApi::new(http.clone()),
            preferences: PreferencesApi::new(http.clone()),
            tenants: TenantsApi::new(http.clone()),
            files: FilesApi::new(http.clone()),
            shortlists: ShortlistsApi::new(http),
        }
    }
}
