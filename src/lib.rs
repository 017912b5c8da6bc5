//! Matrimony Platform Client
//!
//! Client SDK for the multi-tenant matrimony-profile platform: authentication
//! and session lifecycle, typed endpoint wrappers, tenant administration, and
//! direct-to-storage photo upload.
//!
//! # Features
//!
//! - **HTTP wrapper**: one outbound path, bearer attachment, tagged 401 outcome
//! - **Session store**: Anonymous → Authenticating → Authenticated state machine
//!   with write-through token persistence and awaited boot restore
//! - **Coordinator**: the single owner of unauthorized handling and navigation
//! - **Router guard**: pure pre-navigation evaluation over a typed route table
//! - **Domain APIs**: auth, users, profiles, preferences, tenants, files,
//!   shortlists – one call per function, errors untranslated
//!
//! # Architecture
//!
//! ```text
//! Views/CLI ──► Domain APIs ──► HttpClient ──► backend
//!     │              │             │
//!     │              └── outcome ──┤ 401 → Unauthorized (tagged)
//!     │                            │
//!     ├── SessionCoordinator ◄─────┘ clears session, records navigation
//!     ├── SessionStore ──► TokenStore (write-through JSON file)
//!     └── router::guard (pure)
//! ```

pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod http;
pub mod models;
pub mod router;
pub mod session;
pub mod tokens;

pub use api::{
    Api, AuthApi, AuthBackend, FilesApi, PreferencesApi, ProfilesApi, ShortlistsApi, TenantsApi,
    UsersApi,
};
pub use config::Config;
pub use coordinator::SessionCoordinator;
pub use error::{ApiError, ErrorDetail, FieldError};
pub use http::HttpClient;
pub use router::{guard, NavDecision, Route};
pub use session::{SessionState, SessionStore};
pub use tokens::TokenStore;
