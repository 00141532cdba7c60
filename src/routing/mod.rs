//! Route table, path matching, and the navigation guard
//!
//! Routes are static configuration: an ordered list of descriptors mapping
//! a path pattern to a lazily loaded view (or a redirect) and an
//! authorization requirement. Every transition request is resolved against
//! the table, then passed through the guard, which either allows it or
//! sends it to the public fallback route.
//!
//! # Invariants Enforced
//!
//! - the guard makes exactly one allow/redirect decision per attempt and
//!   every attempt terminates
//! - the fallback route is public, so a redirect never re-enters the guard
//! - route resolution performs no I/O; unmatched paths are reported to the
//!   host, never handled here

mod guard;
mod pattern;
mod route;
mod router;
mod routes;
mod table;

pub use guard::{GuardDecision, NavigationGuard};
pub use pattern::{PathParams, RoutePattern};
pub use route::{Route, RouteTarget, ViewId, ViewRef};
pub use router::{Navigation, ResolvedRoute, Router};
pub use routes::{app_routes, FALLBACK_PATH};
pub use table::{ResolvedTarget, RouteTable};
