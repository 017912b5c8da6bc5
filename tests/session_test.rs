//! Session Lifecycle Integration Tests
//!
//! Exercises the store's state machine and the coordinator's unauthorized
//! handling against a fake auth backend and a tempdir-backed token store.

use async_trait::async_trait;
use chrono::Utc;
use matrimony_client::models::{AuthTokens, LoginPayload, User, UserRole};
use matrimony_client::{
    ApiError, ErrorDetail, Route, SessionCoordinator, SessionState, SessionStore, TokenStore,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use uuid::Uuid;

/// Programmable stand-in for the wire
struct FakeBackend {
    reject_login: AtomicBool,
    fail_me: AtomicBool,
    fail_logout: AtomicBool,
    role: Mutex<UserRole>,
    login_calls: AtomicUsize,
    me_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    last_logout_refresh: Mutex<Option<String>>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            reject_login: AtomicBool::new(false),
            fail_me: AtomicBool::new(false),
            fail_logout: AtomicBool::new(false),
            role: Mutex::new(UserRole::Member),
            login_calls: AtomicUsize::new(0),
            me_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            last_logout_refresh: Mutex::new(None),
        }
    }
}

fn fixture_user(role: UserRole) -> User {
    User {
        id: Uuid::new_v4(),
        email: "asha@example.org".to_string(),
        full_name: "Asha Kumar".to_string(),
        role,
        is_active: true,
        tenant_id: Some(Uuid::new_v4()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl matrimony_client::AuthBackend for FakeBackend {
    async fn login(&self, _payload: &LoginPayload) -> Result<AuthTokens, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if self.reject_login.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 400,
                detail: ErrorDetail::Message("Incorrect email or password.".to_string()),
            });
        }
        Ok(AuthTokens {
            access_token: "A".to_string(),
            refresh_token: "B".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 1800,
        })
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.me_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_me.load(Ordering::SeqCst) {
            return Err(ApiError::Unauthorized);
        }
        Ok(fixture_user(*self.role.lock().unwrap()))
    }

    async fn logout(&self, refresh_token: Option<&str>) -> Result<(), ApiError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_logout_refresh.lock().unwrap() = refresh_token.map(|s| s.to_string());
        if self.fail_logout.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                detail: ErrorDetail::Message("revocation store down".to_string()),
            });
        }
        Ok(())
    }
}

struct Harness {
    backend: Arc<FakeBackend>,
    tokens: Arc<TokenStore>,
    session: Arc<SessionStore>,
    _temp: TempDir,
}

fn create_session() -> Harness {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let tokens =
        Arc::new(TokenStore::open(temp.path().join("tokens.json")).expect("Failed to open store"));
    let backend = Arc::new(FakeBackend::default());
    let session = Arc::new(SessionStore::new(backend.clone(), tokens.clone()));
    Harness {
        backend,
        tokens,
        session,
        _temp: temp,
    }
}

fn credentials() -> LoginPayload {
    LoginPayload {
        email: "asha@example.org".to_string(),
        password: "s3cret!Pass".to_string(),
    }
}

#[tokio::test]
async fn test_login_persists_pair_and_fetches_identity_once() {
    let h = create_session();

    h.session.login(&credentials()).await.unwrap();

    assert_eq!(h.tokens.access_token().as_deref(), Some("A"));
    assert_eq!(h.tokens.refresh_token().as_deref(), Some("B"));
    assert_eq!(h.backend.login_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.backend.me_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.session.state().await, SessionState::Authenticated);
    assert!(h.session.is_authenticated());
    assert!(h.session.current_user().await.is_some());
    assert!(h.session.last_error().await.is_none());
}

#[tokio::test]
async fn test_failed_login_leaves_no_partial_state() {
    let h = create_session();
    h.backend.reject_login.store(true, Ordering::SeqCst);

    let result = h.session.login(&credentials()).await;

    assert!(result.is_err());
    assert!(h.tokens.access_token().is_none());
    assert!(h.tokens.refresh_token().is_none());
    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert!(!h.session.is_authenticated());
    let message = h.session.last_error().await.expect("error message set");
    assert!(!message.is_empty());
    // No identity fetch is attempted after a failed login
    assert_eq!(h.backend.me_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_login_with_failing_token_storage_returns_to_anonymous() {
    let h = create_session();
    // Occupy the token file path with a directory so the write-through fails
    // even though the backend issued a valid pair
    std::fs::create_dir(h._temp.path().join("tokens.json")).unwrap();

    let result = h.session.login(&credentials()).await;

    assert!(result.is_err());
    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert!(!h.session.is_authenticated());
    assert!(h.session.current_user().await.is_none());
    let message = h.session.last_error().await.expect("error message set");
    assert!(!message.is_empty());
    // The identity fetch never runs when persistence fails
    assert_eq!(h.backend.me_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_fetch_current_user_without_token_is_a_no_op() {
    let h = create_session();

    h.session.fetch_current_user().await;

    assert_eq!(h.backend.me_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert!(h.session.current_user().await.is_none());
}

#[tokio::test]
async fn test_login_then_logout_ends_anonymous_with_empty_storage() {
    let h = create_session();

    h.session.login(&credentials()).await.unwrap();
    h.session.logout().await;

    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert!(h.tokens.access_token().is_none());
    assert!(h.tokens.refresh_token().is_none());
    assert!(h.session.current_user().await.is_none());
    // Remote revocation saw the persisted refresh token
    assert_eq!(
        h.backend.last_logout_refresh.lock().unwrap().as_deref(),
        Some("B")
    );
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let h = create_session();
    h.session.login(&credentials()).await.unwrap();

    h.session.logout().await;
    // Second call must not fail and must end in the same state
    h.session.logout().await;

    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert!(h.tokens.access_token().is_none());
    assert_eq!(h.backend.logout_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_logout_clears_locally_even_when_remote_fails() {
    let h = create_session();
    h.session.login(&credentials()).await.unwrap();
    h.backend.fail_logout.store(true, Ordering::SeqCst);

    h.session.logout().await;

    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert!(h.tokens.access_token().is_none());
}

#[tokio::test]
async fn test_restore_loads_user_from_persisted_token() {
    let h = create_session();
    // A previous process persisted a pair
    h.tokens.store("A", "B").unwrap();

    h.session.restore().await;

    assert_eq!(h.backend.me_calls.load(Ordering::SeqCst), 1);
    assert_eq!(h.session.state().await, SessionState::Authenticated);
    assert!(h.session.current_user().await.is_some());
}

#[tokio::test]
async fn test_restore_with_stale_token_degrades_to_anonymous() {
    let h = create_session();
    h.tokens.store("stale", "stale").unwrap();
    h.backend.fail_me.store(true, Ordering::SeqCst);

    h.session.restore().await;

    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert!(h.tokens.access_token().is_none());
    assert!(h.session.current_user().await.is_none());
}

#[tokio::test]
async fn test_restore_without_token_issues_no_call() {
    let h = create_session();

    h.session.restore().await;

    assert_eq!(h.backend.me_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.session.state().await, SessionState::Anonymous);
}

#[tokio::test]
async fn test_user_present_implies_access_token_present() {
    let h = create_session();
    h.session.login(&credentials()).await.unwrap();

    // Every clearing path drops both together; spot-check invalidation
    h.session.invalidate().await;
    assert!(h.session.current_user().await.is_none());
    assert!(h.tokens.access_token().is_none());
}

// ============ Coordinator ============

#[tokio::test]
async fn test_unauthorized_outcome_clears_session_and_records_login_nav() {
    let h = create_session();
    h.session.login(&credentials()).await.unwrap();
    let coordinator = SessionCoordinator::new(h.session.clone());

    // Any domain call's 401, regardless of endpoint
    let outcome: Result<(), ApiError> = coordinator.intercept(Err(ApiError::Unauthorized)).await;

    assert!(matches!(outcome, Err(ApiError::Unauthorized)));
    assert!(h.tokens.access_token().is_none());
    assert!(h.tokens.refresh_token().is_none());
    assert_eq!(h.session.state().await, SessionState::Anonymous);
    assert_eq!(coordinator.take_navigation().await, Some(Route::Login));
    // Consumed once
    assert_eq!(coordinator.take_navigation().await, None);
}

#[tokio::test]
async fn test_successful_outcome_passes_through_untouched() {
    let h = create_session();
    h.session.login(&credentials()).await.unwrap();
    let coordinator = SessionCoordinator::new(h.session.clone());

    let outcome = coordinator.intercept(Ok(42u32)).await;

    assert_eq!(outcome.unwrap(), 42);
    assert!(h.session.is_authenticated());
    assert_eq!(coordinator.take_navigation().await, None);
}

#[tokio::test]
async fn test_non_auth_errors_do_not_invalidate() {
    let h = create_session();
    h.session.login(&credentials()).await.unwrap();
    let coordinator = SessionCoordinator::new(h.session.clone());

    let outcome: Result<(), ApiError> = coordinator
        .intercept(Err(ApiError::Status {
            status: 422,
            detail: ErrorDetail::Message("validation failed".to_string()),
        }))
        .await;

    assert!(outcome.is_err());
    assert!(h.session.is_authenticated());
    assert_eq!(coordinator.take_navigation().await, None);
}

#[tokio::test]
async fn test_role_flags() {
    let h = create_session();

    h.session.login(&credentials()).await.unwrap();
    assert!(!h.session.is_admin().await);
    assert!(!h.session.is_super_admin().await);

    *h.backend.role.lock().unwrap() = UserRole::Admin;
    h.session.fetch_current_user().await;
    assert!(h.session.is_admin().await);
    assert!(!h.session.is_super_admin().await);

    *h.backend.role.lock().unwrap() = UserRole::SuperAdmin;
    h.session.fetch_current_user().await;
    assert!(h.session.is_admin().await);
    assert!(h.session.is_super_admin().await);
}
