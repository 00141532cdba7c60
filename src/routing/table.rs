//! Ordered route table and path resolution.

use super::pattern::PathParams;
use super::route::{Route, RouteTarget};

/// Redirect chains longer than this resolve to "no match", so a
/// misconfigured cycle still terminates.
const MAX_REDIRECT_DEPTH: usize = 8;

/// A path resolved to a view route.
#[derive(Debug)]
pub struct ResolvedTarget<'a> {
    /// The matched view descriptor
    pub route: &'a Route,
    /// Concrete path, after following any redirect entries
    pub path: String,
    /// Captured named parameters
    pub params: PathParams,
}

/// Ordered set of route descriptors.
///
/// The first matching descriptor wins. The table is built once at startup
/// and never mutated; pattern ambiguity is a configuration error this
/// layer does not detect.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Finds the first descriptor matching `path`, without following
    /// redirect entries.
    pub fn lookup(&self, path: &str) -> Option<(&Route, PathParams)> {
        self.routes
            .iter()
            .find_map(|route| route.pattern.match_path(path).map(|params| (route, params)))
    }

    /// Resolves `path` to a view route, following redirect entries.
    pub fn resolve(&self, path: &str) -> Option<ResolvedTarget<'_>> {
        let mut current = path.to_string();
        for _ in 0..MAX_REDIRECT_DEPTH {
            let (route, params) = self.lookup(&current)?;
            match &route.target {
                RouteTarget::View(_) => {
                    return Some(ResolvedTarget {
                        route,
                        path: current,
                        params,
                    })
                }
                RouteTarget::Redirect(to) => current = to.clone(),
            }
        }
        None
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}
