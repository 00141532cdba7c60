//! Route table of the client.

use super::route::{Route, ViewId};
use super::table::RouteTable;

/// Public fallback route blocked transitions land on.
pub const FALLBACK_PATH: &str = "/";

fn dashboard_view() -> ViewId {
    ViewId("DashboardView")
}

fn account_manager() -> ViewId {
    ViewId("AccountManager")
}

fn platform_config() -> ViewId {
    ViewId("PlatformConfig")
}

fn platform_plan_view() -> ViewId {
    ViewId("PlatformPlanView")
}

/// Builds the application route table.
///
/// The dashboard is public and doubles as the fallback for blocked
/// transitions; the management screens require an authenticated session.
pub fn app_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::view("/", "Home", dashboard_view),
        Route::redirect("/dashboard", FALLBACK_PATH),
        Route::view("/accounts", "Account Management", account_manager).requires_auth(),
        Route::view("/platforms", "Platform Config", platform_config).requires_auth(),
        Route::view("/plan/:platform/:account", "Platform Plan", platform_plan_view)
            .requires_auth(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_route_is_public() {
        let table = app_routes();
        let target = table.resolve(FALLBACK_PATH).unwrap();
        assert!(!target.route.requires_auth);
    }

    #[test]
    fn test_every_path_has_exactly_one_descriptor() {
        let table = app_routes();
        for path in ["/", "/dashboard", "/accounts", "/platforms", "/plan/x/y"] {
            let matches = table
                .routes()
                .iter()
                .filter(|r| r.pattern.match_path(path).is_some())
                .count();
            assert_eq!(matches, 1, "path {path} should match exactly one route");
        }
    }
}
