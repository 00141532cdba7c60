//! Router: resolve the path, run the guard, commit the transition.

use std::sync::{Arc, PoisonError, RwLock};

use crate::observability::{Event, Logger};
use crate::session::SessionStore;
use crate::storage::SessionStorage;

use super::guard::{GuardDecision, NavigationGuard};
use super::pattern::PathParams;
use super::table::{ResolvedTarget, RouteTable};

/// Final state of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The transition committed; this is now the current route
    Complete(ResolvedRoute),
    /// No descriptor matched; the host decides what to show
    NotFound { path: String },
}

/// A committed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Pattern of the matched descriptor
    pub route_path: String,
    /// Display name of the matched descriptor
    pub name: Option<String>,
    /// Concrete path, after any redirect entries
    pub path: String,
    /// Captured named parameters
    pub params: PathParams,
    /// True when the guard cancelled the original request and sent it here
    pub redirected: bool,
}

/// Drives route transitions for the client.
///
/// Every attempt ends in exactly one of the [`Navigation`] outcomes; a
/// blocked transition lands on the fallback route rather than failing.
pub struct Router<S: SessionStorage> {
    table: RouteTable,
    guard: NavigationGuard<S>,
    current: RwLock<Option<ResolvedRoute>>,
}

impl<S: SessionStorage> Router<S> {
    /// Builds a router over `table`, redirecting blocked transitions to
    /// `fallback`.
    ///
    /// The fallback must resolve to a public route; a protected fallback
    /// would send a blocked transition straight back into the guard.
    pub fn new(table: RouteTable, session: Arc<SessionStore<S>>, fallback: &str) -> Self {
        debug_assert!(
            table
                .resolve(fallback)
                .is_some_and(|t| !t.route.requires_auth),
            "fallback route must exist and be public"
        );
        Self {
            table,
            guard: NavigationGuard::new(session, fallback),
            current: RwLock::new(None),
        }
    }

    /// Attempts a transition to `path`.
    pub fn navigate(&self, path: &str) -> Navigation {
        let Some(target) = self.table.resolve(path) else {
            Logger::warn(Event::RouteUnmatched.as_str(), &[("path", path)]);
            return Navigation::NotFound {
                path: path.to_string(),
            };
        };

        match self.guard.decide(target.route) {
            GuardDecision::Allow => {
                Logger::trace(Event::NavigationAllowed.as_str(), &[("path", &target.path)]);
                self.commit(to_resolved(target, false))
            }
            GuardDecision::Redirect(fallback) => {
                Logger::info(
                    Event::NavigationRedirected.as_str(),
                    &[("from", path), ("to", &fallback)],
                );
                // The fallback is public; it resolves without a second
                // guard pass.
                match self.table.resolve(&fallback) {
                    Some(target) => self.commit(to_resolved(target, true)),
                    None => Navigation::NotFound { path: fallback },
                }
            }
        }
    }

    /// The route the client currently sits on, if any transition committed.
    pub fn current_route(&self) -> Option<ResolvedRoute> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    fn commit(&self, resolved: ResolvedRoute) -> Navigation {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(resolved.clone());
        Navigation::Complete(resolved)
    }
}

fn to_resolved(target: ResolvedTarget<'_>, redirected: bool) -> ResolvedRoute {
    ResolvedRoute {
        route_path: target.route.pattern.as_str().to_string(),
        name: target.route.name.clone(),
        path: target.path,
        params: target.params,
        redirected,
    }
}
