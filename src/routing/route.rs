//! Route descriptors and lazily resolved view references.

use std::sync::OnceLock;

use super::pattern::RoutePattern;

/// Opaque handle to a view registered by the host application.
///
/// The shell never looks inside; it only hands the id back to the host
/// when a transition commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewId(pub &'static str);

/// Lazily resolved view reference.
///
/// The loader runs at most once, on first resolution, and the result is
/// cached for the lifetime of the route table.
#[derive(Debug)]
pub struct ViewRef {
    load: fn() -> ViewId,
    resolved: OnceLock<ViewId>,
}

impl ViewRef {
    pub fn new(load: fn() -> ViewId) -> Self {
        Self {
            load,
            resolved: OnceLock::new(),
        }
    }

    /// Resolves the underlying view, loading it on first use.
    pub fn resolve(&self) -> ViewId {
        *self.resolved.get_or_init(self.load)
    }
}

/// Where a matched route leads.
#[derive(Debug)]
pub enum RouteTarget {
    /// Render the referenced view
    View(ViewRef),
    /// Re-resolve at another path
    Redirect(String),
}

/// Static descriptor mapping a path pattern to a target and an
/// authorization requirement.
///
/// Descriptors are defined once at startup and never mutated.
#[derive(Debug)]
pub struct Route {
    pub pattern: RoutePattern,
    pub name: Option<String>,
    pub target: RouteTarget,
    pub requires_auth: bool,
}

impl Route {
    /// A view route, public by default.
    pub fn view(path: &str, name: &str, load: fn() -> ViewId) -> Self {
        Self {
            pattern: RoutePattern::parse(path),
            name: Some(name.to_string()),
            target: RouteTarget::View(ViewRef::new(load)),
            requires_auth: false,
        }
    }

    /// A redirect entry: requests for `path` re-resolve at `to`.
    pub fn redirect(path: &str, to: &str) -> Self {
        Self {
            pattern: RoutePattern::parse(path),
            name: None,
            target: RouteTarget::Redirect(to.to_string()),
            requires_auth: false,
        }
    }

    /// Marks the route as requiring an authenticated session.
    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_ref_resolves_once_and_caches() {
        let view = ViewRef::new(|| ViewId("DashboardView"));
        assert_eq!(view.resolve(), ViewId("DashboardView"));
        assert_eq!(view.resolve(), ViewId("DashboardView"));
    }

    #[test]
    fn test_routes_are_public_unless_marked() {
        let public = Route::view("/", "Home", || ViewId("DashboardView"));
        assert!(!public.requires_auth);

        let protected = Route::view("/accounts", "Accounts", || ViewId("AccountManager"))
            .requires_auth();
        assert!(protected.requires_auth);
    }
}
