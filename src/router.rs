//! Route Table and Navigation Guard
//!
//! Pure routing: a closed route set with auth metadata, and a guard function
//! evaluated before each navigation. The guard is stateless beyond reading
//! the session's authenticated flag, so it needs no mocking to test.

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Profiles,
    ProfileDetail,
    MyProfile,
    Tenants,
    CreateTenant,
    NotFound,
}

impl Route {
    /// Canonical path for the route. `ProfileDetail` is parameterized; this
    /// returns its prefix.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Profiles => "/profiles",
            Route::ProfileDetail => "/profiles/",
            Route::MyProfile => "/my-profile",
            Route::Tenants => "/admin/tenants",
            Route::CreateTenant => "/admin/tenants/new",
            Route::NotFound => "/404",
        }
    }

    /// Resolve a concrete path to its route; unknown paths fall through to
    /// `NotFound`.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.split('?').next().unwrap_or(path);
        match trimmed {
            "/login" => Route::Login,
            "/" | "" => Route::Dashboard,
            "/profiles" => Route::Profiles,
            "/my-profile" => Route::MyProfile,
            "/admin/tenants" => Route::Tenants,
            "/admin/tenants/new" => Route::CreateTenant,
            other if other.starts_with("/profiles/") => Route::ProfileDetail,
            _ => Route::NotFound,
        }
    }

    /// Login and the not-found page are public; everything else requires an
    /// authenticated session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::NotFound)
    }
}

/// Outcome of a guard evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavDecision {
    /// Proceed to the requested path
    Allow,
    /// Not authenticated for a protected route; `redirect` carries the
    /// original target for post-login return
    RedirectToLogin { redirect: String },
    /// Already authenticated and heading to login
    RedirectToDashboard,
}

/// Evaluate a navigation before it happens
pub fn guard(target_path: &str, authenticated: bool) -> NavDecision {
    let route = Route::from_path(target_path);

    if route.requires_auth() && !authenticated {
        return NavDecision::RedirectToLogin {
            redirect: target_path.to_string(),
        };
    }
    if route == Route::Login && authenticated {
        return NavDecision::RedirectToDashboard;
    }
    NavDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_route_while_anonymous_redirects_with_return_path() {
        let decision = guard("/profiles", false);
        assert_eq!(
            decision,
            NavDecision::RedirectToLogin {
                redirect: "/profiles".to_string()
            }
        );

        // The original target survives verbatim, parameters included
        let decision = guard("/profiles/3f2b", false);
        assert_eq!(
            decision,
            NavDecision::RedirectToLogin {
                redirect: "/profiles/3f2b".to_string()
            }
        );
    }

    #[test]
    fn test_login_while_authenticated_redirects_to_dashboard() {
        assert_eq!(guard("/login", true), NavDecision::RedirectToDashboard);
    }

    #[test]
    fn test_login_while_anonymous_allowed() {
        assert_eq!(guard("/login", false), NavDecision::Allow);
    }

    #[test]
    fn test_protected_routes_allowed_when_authenticated() {
        for path in ["/", "/profiles", "/my-profile", "/admin/tenants", "/admin/tenants/new"] {
            assert_eq!(guard(path, true), NavDecision::Allow, "path {path}");
        }
    }

    #[test]
    fn test_unknown_path_is_public() {
        assert_eq!(guard("/no-such-page", false), NavDecision::Allow);
    }

    #[test]
    fn test_route_resolution() {
        assert_eq!(Route::from_path("/admin/tenants/new"), Route::CreateTenant);
        assert_eq!(Route::from_path("/profiles/abc-123"), Route::ProfileDetail);
        assert_eq!(Route::from_path("/profiles?page=2"), Route::Profiles);
        assert_eq!(Route::from_path("/"), Route::Dashboard);
    }
}
