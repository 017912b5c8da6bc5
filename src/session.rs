//! Session Store
//!
//! Owner of the in-memory session and the only writer of the persisted token
//! pair. Four reachable states:
//!
//! - **Anonymous**: no tokens
//! - **Authenticating**: login in flight
//! - **Authenticated**: tokens persisted and user loaded
//! - back to **Anonymous** on logout or invalidation
//!
//! Invariant: a loaded user implies a cached access token – any failure path
//! clears both together. Dependencies are injected: the wire is reached
//! through [`AuthBackend`] and durable storage through [`TokenStore`], so
//! tests substitute fakes for both.

use crate::api::auth::AuthBackend;
use crate::error::ApiError;
use crate::models::{LoginPayload, User, UserRole};
use crate::tokens::TokenStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
}

#[derive(Default)]
struct SessionInner {
    state: SessionState,
    user: Option<User>,
    last_error: Option<String>,
}

/// Shared session state machine
pub struct SessionStore {
    backend: Arc<dyn AuthBackend>,
    tokens: Arc<TokenStore>,
    inner: RwLock<SessionInner>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn AuthBackend>, tokens: Arc<TokenStore>) -> Self {
        Self {
            backend,
            tokens,
            inner: RwLock::new(SessionInner::default()),
        }
    }

    /// Boot-time restore: if a persisted access token exists, load the user
    /// before anything consults the session. A stale token degrades to
    /// Anonymous inside the identity fetch.
    ///
    /// Callers await this before the first navigation decision.
    pub async fn restore(&self) {
        if self.tokens.has_access_token() {
            debug!("Persisted access token found; restoring session");
            self.fetch_current_user().await;
        }
    }

    /// Authenticate and load the current user.
    ///
    /// On success both tokens are persisted write-through before the identity
    /// fetch is attempted. On failure the error message is surfaced via
    /// [`last_error`](Self::last_error) and no partial token state remains.
    pub async fn login(&self, payload: &LoginPayload) -> Result<(), ApiError> {
        {
            let mut inner = self.inner.write().await;
            inner.state = SessionState::Authenticating;
            inner.last_error = None;
        }

        match self.backend.login(payload).await {
            Ok(tokens) => match self.tokens.store(&tokens.access_token, &tokens.refresh_token) {
                Ok(()) => {
                    info!("Login succeeded; loading current user");
                    self.fetch_current_user().await;
                    Ok(())
                }
                // A failed write-through is a failed login: the persisted and
                // in-memory views must not diverge
                Err(io) => Err(self.fail_login(ApiError::Storage(io)).await),
            },
            Err(err) => Err(self.fail_login(err).await),
        }
    }

    /// Settle a failed login: no partial token state remains, the message is
    /// surfaced, and the machine returns to Anonymous.
    async fn fail_login(&self, err: ApiError) -> ApiError {
        let message = err.to_string();
        if let Err(io) = self.tokens.clear() {
            warn!("Failed to clear token storage: {}", io);
        }
        let mut inner = self.inner.write().await;
        inner.state = SessionState::Anonymous;
        inner.user = None;
        inner.last_error = Some(message);
        err
    }

    /// Load the current user identity.
    ///
    /// No-op without a cached access token – no network call is issued. On
    /// failure the whole session is cleared; this is how a stale boot-time
    /// token degrades gracefully rather than surfacing an error.
    pub async fn fetch_current_user(&self) {
        if !self.tokens.has_access_token() {
            return;
        }

        match self.backend.me().await {
            Ok(user) => {
                let mut inner = self.inner.write().await;
                inner.user = Some(user);
                inner.state = SessionState::Authenticated;
            }
            Err(err) => {
                warn!("Identity fetch failed, clearing session: {}", err);
                self.clear().await;
            }
        }
    }

    /// Best-effort remote revocation followed by unconditional local clear.
    /// Safe to call repeatedly.
    pub async fn logout(&self) {
        let refresh = self.tokens.refresh_token();
        if let Err(err) = self.backend.logout(refresh.as_deref()).await {
            debug!("Remote logout failed (ignored): {}", err);
        }
        self.clear().await;
    }

    /// Drop all session state, local and persisted. Used by the coordinator
    /// when any call comes back unauthorized.
    pub async fn invalidate(&self) {
        self.clear().await;
    }

    async fn clear(&self) {
        if let Err(io) = self.tokens.clear() {
            warn!("Failed to clear token storage: {}", io);
        }
        let mut inner = self.inner.write().await;
        inner.user = None;
        inner.state = SessionState::Anonymous;
    }

    // ============ Derived flags ============

    /// Authenticated iff an access token is cached
    pub fn is_authenticated(&self) -> bool {
        self.tokens.has_access_token()
    }

    /// Admin tier: admin or super_admin
    pub async fn is_admin(&self) -> bool {
        matches!(
            self.inner.read().await.user.as_ref().map(|u| u.role),
            Some(UserRole::Admin) | Some(UserRole::SuperAdmin)
        )
    }

    /// Exactly super_admin
    pub async fn is_super_admin(&self) -> bool {
        matches!(
            self.inner.read().await.user.as_ref().map(|u| u.role),
            Some(UserRole::SuperAdmin)
        )
    }

    pub async fn state(&self) -> SessionState {
        self.inner.read().await.state
    }

    /// Absent until restore or login resolves
    pub async fn current_user(&self) -> Option<User> {
        self.inner.read().await.user.clone()
    }

    /// Message from the most recent failed login, cleared on the next attempt
    pub async fn last_error(&self) -> Option<String> {
        self.inner.read().await.last_error.clone()
    }
}
