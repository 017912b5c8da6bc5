//! Session Coordinator
//!
//! The one component allowed to turn an unauthorized outcome into session
//! invalidation plus navigation. Domain calls return the tagged
//! [`ApiError::Unauthorized`] result; the coordinator clears the session
//! (persisted tokens included) and records a pending redirect to the login
//! route for the application layer to consume. The error is still re-raised
//! to the caller, so domain code observes the failure as usual.
//!
//! This keeps navigation a one-directional dependency: session → router,
//! never transport → router.

use crate::error::ApiError;
use crate::router::Route;
use crate::session::SessionStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

pub struct SessionCoordinator {
    session: Arc<SessionStore>,
    pending_nav: RwLock<Option<Route>>,
}

impl SessionCoordinator {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            session,
            pending_nav: RwLock::new(None),
        }
    }

    /// Inspect a domain-call outcome. On [`ApiError::Unauthorized`] the
    /// session is invalidated and a login navigation is recorded, regardless
    /// of which endpoint produced it. The outcome passes through unchanged.
    pub async fn intercept<T>(&self, outcome: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ApiError::Unauthorized) = &outcome {
            warn!("Unauthorized response; invalidating session");
            self.session.invalidate().await;
            *self.pending_nav.write().await = Some(Route::Login);
        }
        outcome
    }

    /// Consume the pending navigation, if any
    pub async fn take_navigation(&self) -> Option<Route> {
        self.pending_nav.write().await.take()
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }
}
