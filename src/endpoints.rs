//! The endpoint URIs for pages and simulated action routes.
//!
//! For endpoints that take a parameter, e.g., '/expenses/{expense_id}', use
//! [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the expense overview.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page listing, filtering, and sorting expenses.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The page for adding a new expense.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The page showing a single expense in detail.
pub const EXPENSE_DETAIL_VIEW: &str = "/expenses/{expense_id}";
/// The page showing categories and their budgets.
pub const CATEGORIES_VIEW: &str = "/categories";
/// The current user's profile page.
pub const PROFILE_VIEW: &str = "/profile";
/// The settings page.
pub const SETTINGS_VIEW: &str = "/settings";

/// The admin panel landing page.
pub const ADMIN_DASHBOARD_VIEW: &str = "/admin";
/// The admin page for managing user accounts.
pub const ADMIN_USERS_VIEW: &str = "/admin/users";
/// The admin page with spending reports and charts.
pub const ADMIN_REPORTS_VIEW: &str = "/admin/reports";
/// The admin page for managing categories.
pub const ADMIN_CATEGORIES_VIEW: &str = "/admin/categories";
/// The admin page for system-wide settings.
pub const ADMIN_SETTINGS_VIEW: &str = "/admin/settings";

/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create an expense (simulated).
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to delete an expense (simulated).
pub const DELETE_EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to delete a category from the user categories page (simulated).
pub const DELETE_CATEGORY: &str = "/api/categories/{category_id}";
/// The route to save the current user's profile (simulated).
pub const PROFILE_API: &str = "/api/profile";
/// The route to save the current user's settings (simulated).
pub const SETTINGS_API: &str = "/api/settings";
/// The route to export the current user's data (simulated).
pub const EXPORT_API: &str = "/api/export";

/// The route to create a user from the admin panel (simulated).
pub const ADMIN_USERS_API: &str = "/api/admin/users";
/// The route to delete a user from the admin panel (simulated).
pub const DELETE_USER: &str = "/api/admin/users/{user_id}";
/// The route to toggle a user's role (simulated).
pub const TOGGLE_USER_ROLE: &str = "/api/admin/users/{user_id}/role";
/// The route to create a category from the admin panel (simulated).
pub const ADMIN_CATEGORIES_API: &str = "/api/admin/categories";
/// The route to delete a category from the admin panel (simulated).
pub const DELETE_ADMIN_CATEGORY: &str = "/api/admin/categories/{category_id}";
/// The route to save the admin settings (simulated).
pub const ADMIN_SETTINGS_API: &str = "/api/admin/settings";
/// The route to start a system backup (simulated).
pub const ADMIN_BACKUP_API: &str = "/api/admin/backup";
/// The route to export an expense report (simulated).
pub const ADMIN_REPORTS_EXPORT_API: &str = "/api/admin/reports/export";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/expenses/{expense_id}',
/// '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII
/// characters and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it
// will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EXPENSES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_EXPENSE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE_DETAIL_VIEW);
        assert_endpoint_is_valid_uri(endpoints::CATEGORIES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::PROFILE_VIEW);
        assert_endpoint_is_valid_uri(endpoints::SETTINGS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_USERS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_REPORTS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_CATEGORIES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_SETTINGS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::EXPENSES_API);
        assert_endpoint_is_valid_uri(endpoints::DELETE_EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::DELETE_CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::PROFILE_API);
        assert_endpoint_is_valid_uri(endpoints::SETTINGS_API);
        assert_endpoint_is_valid_uri(endpoints::EXPORT_API);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_USERS_API);
        assert_endpoint_is_valid_uri(endpoints::DELETE_USER);
        assert_endpoint_is_valid_uri(endpoints::TOGGLE_USER_ROLE);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_CATEGORIES_API);
        assert_endpoint_is_valid_uri(endpoints::DELETE_ADMIN_CATEGORY);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_SETTINGS_API);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_BACKUP_API);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_REPORTS_EXPORT_API);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());

        // Parameter with single word should also work.
        let formatted_path = format_endpoint("/hello/{world}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/api/admin/users/{user_id}/role", 2);

        assert_eq!(formatted_path, "/api/admin/users/2/role");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
