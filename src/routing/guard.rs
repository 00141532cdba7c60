//! Navigation guard: the per-transition authorization decision.

use std::sync::Arc;

use crate::session::SessionStore;
use crate::storage::SessionStorage;

use super::route::Route;

/// Outcome of guarding a single transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested route
    Allow,
    /// Cancel the request and resolve the fallback path instead
    Redirect(String),
}

/// Gate consulted before every route transition.
///
/// Reads the session store and nothing else: no I/O of its own, no
/// failure modes. The fallback path must resolve to a public route so a
/// redirect cannot re-enter the guard.
pub struct NavigationGuard<S: SessionStorage> {
    session: Arc<SessionStore<S>>,
    fallback: String,
}

impl<S: SessionStorage> NavigationGuard<S> {
    pub fn new(session: Arc<SessionStore<S>>, fallback: &str) -> Self {
        Self {
            session,
            fallback: fallback.to_string(),
        }
    }

    /// Decides a single transition.
    ///
    /// Total over its inputs: every call returns exactly one decision.
    pub fn decide(&self, target: &Route) -> GuardDecision {
        if !target.requires_auth || self.session.is_authenticated() {
            return GuardDecision::Allow;
        }
        GuardDecision::Redirect(self.fallback.clone())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::ViewId;
    use crate::session::SessionConfig;
    use crate::storage::MemoryStorage;
    use std::time::Duration;

    fn guard_over(session: Arc<SessionStore<MemoryStorage>>) -> NavigationGuard<MemoryStorage> {
        NavigationGuard::new(session, "/")
    }

    fn fast_session() -> Arc<SessionStore<MemoryStorage>> {
        let config = SessionConfig {
            sign_in_latency: Duration::ZERO,
            ..SessionConfig::default()
        };
        Arc::new(SessionStore::with_config(config, MemoryStorage::new()))
    }

    #[test]
    fn test_public_route_always_allows() {
        let session = fast_session();
        session.initialize();
        let guard = guard_over(session);

        let route = Route::view("/", "Home", || ViewId("DashboardView"));
        assert_eq!(guard.decide(&route), GuardDecision::Allow);
    }

    #[test]
    fn test_protected_route_redirects_when_logged_out() {
        let session = fast_session();
        session.initialize();
        let guard = guard_over(session);

        let route = Route::view("/accounts", "Accounts", || ViewId("AccountManager"))
            .requires_auth();
        assert_eq!(
            guard.decide(&route),
            GuardDecision::Redirect("/".to_string())
        );
    }

    #[tokio::test]
    async fn test_protected_route_allows_when_authenticated() {
        let session = fast_session();
        session.initialize();
        session.sign_in("alice", "secret").await;
        let guard = guard_over(session);

        let route = Route::view("/accounts", "Accounts", || ViewId("AccountManager"))
            .requires_auth();
        assert_eq!(guard.decide(&route), GuardDecision::Allow);
    }

    #[tokio::test]
    async fn test_decision_tracks_the_latest_session_change() {
        let session = fast_session();
        session.initialize();
        let guard = guard_over(session.clone());

        let route = Route::view("/accounts", "Accounts", || ViewId("AccountManager"))
            .requires_auth();

        session.sign_in("alice", "secret").await;
        assert_eq!(guard.decide(&route), GuardDecision::Allow);

        session.sign_out();
        assert_eq!(
            guard.decide(&route),
            GuardDecision::Redirect("/".to_string())
        );
    }
}
