//! The admin panel: dashboard, user management, reports, category
//! management, and system settings.

mod categories_page;
mod category_endpoints;
mod charts;
mod dashboard_page;
mod reports_page;
mod settings_endpoints;
mod settings_page;
mod user_endpoints;
mod users_page;

pub use categories_page::get_admin_categories_page;
pub use category_endpoints::create_category_endpoint;
pub use dashboard_page::get_admin_dashboard_page;
pub use reports_page::{export_report_endpoint, get_admin_reports_page};
pub use settings_endpoints::{backup_endpoint, save_admin_settings_endpoint};
pub use settings_page::get_admin_settings_page;
pub use user_endpoints::{
    create_user_endpoint, delete_user_endpoint, toggle_user_role_endpoint,
};
pub use users_page::get_admin_users_page;
