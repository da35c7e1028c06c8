//! Application router configuration with the user pages, admin pages, and
//! simulated action endpoints.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    admin::{
        backup_endpoint, create_category_endpoint, create_user_endpoint, delete_user_endpoint,
        export_report_endpoint, get_admin_categories_page, get_admin_dashboard_page,
        get_admin_reports_page, get_admin_settings_page, get_admin_users_page,
        save_admin_settings_endpoint, toggle_user_role_endpoint,
    },
    category::{delete_category_endpoint, get_categories_page},
    dashboard::get_dashboard_page,
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_create_expense_page,
        get_expense_detail_page, get_expenses_page,
    },
    not_found::get_404_not_found,
    profile::{get_profile_page, update_profile_endpoint},
    settings::{export_data_endpoint, get_settings_page, save_settings_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let user_pages = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_create_expense_page))
        .route(endpoints::EXPENSE_DETAIL_VIEW, get(get_expense_detail_page))
        .route(endpoints::CATEGORIES_VIEW, get(get_categories_page))
        .route(endpoints::PROFILE_VIEW, get(get_profile_page))
        .route(endpoints::SETTINGS_VIEW, get(get_settings_page));

    let admin_pages = Router::new()
        .route(endpoints::ADMIN_DASHBOARD_VIEW, get(get_admin_dashboard_page))
        .route(endpoints::ADMIN_USERS_VIEW, get(get_admin_users_page))
        .route(endpoints::ADMIN_REPORTS_VIEW, get(get_admin_reports_page))
        .route(endpoints::ADMIN_CATEGORIES_VIEW, get(get_admin_categories_page))
        .route(endpoints::ADMIN_SETTINGS_VIEW, get(get_admin_settings_page));

    // Every endpoint below simulates its action: the input is validated and
    // logged, and the response is a toast fragment.
    let action_endpoints = Router::new()
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::DELETE_CATEGORY, delete(delete_category_endpoint))
        .route(endpoints::PROFILE_API, post(update_profile_endpoint))
        .route(endpoints::SETTINGS_API, post(save_settings_endpoint))
        .route(endpoints::EXPORT_API, post(export_data_endpoint))
        .route(endpoints::ADMIN_USERS_API, post(create_user_endpoint))
        .route(endpoints::DELETE_USER, delete(delete_user_endpoint))
        .route(endpoints::TOGGLE_USER_ROLE, put(toggle_user_role_endpoint))
        .route(endpoints::ADMIN_CATEGORIES_API, post(create_category_endpoint))
        .route(
            endpoints::DELETE_ADMIN_CATEGORY,
            delete(delete_category_endpoint),
        )
        .route(
            endpoints::ADMIN_SETTINGS_API,
            post(save_admin_settings_endpoint),
        )
        .route(endpoints::ADMIN_BACKUP_API, post(backup_endpoint))
        .route(
            endpoints::ADMIN_REPORTS_EXPORT_API,
            post(export_report_endpoint),
        );

    user_pages
        .merge(admin_pages)
        .merge(action_endpoints)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{AppState, DemoStore, endpoints, routing::build_router};

    fn get_test_server() -> TestServer {
        let state = AppState::new(DemoStore::seeded());
        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn every_page_renders() {
        let server = get_test_server();

        let pages = [
            endpoints::DASHBOARD_VIEW,
            endpoints::EXPENSES_VIEW,
            endpoints::NEW_EXPENSE_VIEW,
            endpoints::CATEGORIES_VIEW,
            endpoints::PROFILE_VIEW,
            endpoints::SETTINGS_VIEW,
            endpoints::ADMIN_DASHBOARD_VIEW,
            endpoints::ADMIN_USERS_VIEW,
            endpoints::ADMIN_REPORTS_VIEW,
            endpoints::ADMIN_CATEGORIES_VIEW,
            endpoints::ADMIN_SETTINGS_VIEW,
        ];

        for page in pages {
            let response = server.get(page).await;
            response.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn expense_detail_route_takes_an_id() {
        let server = get_test_server();

        let response = server.get("/expenses/1").await;

        response.assert_status_ok();
        assert!(response.text().contains("Lunch at Italian restaurant"));
    }

    #[tokio::test]
    async fn unknown_route_renders_the_404_page() {
        let server = get_test_server();

        let response = server.get("/does-not-exist").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert!(response.text().contains("404"));
    }

    #[tokio::test]
    async fn simulated_delete_responds_with_a_toast() {
        let server = get_test_server();

        let response = server.delete("/api/expenses/1").await;

        response.assert_status_ok();
        assert!(response.text().contains("Expense deleted"));
    }

    #[tokio::test]
    async fn simulated_export_responds_with_a_toast() {
        let server = get_test_server();

        let response = server.post("/api/export").await;

        response.assert_status_ok();
        assert!(response.text().contains("Export started"));
    }
}
