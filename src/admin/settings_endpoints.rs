//! Defines the endpoints for saving admin settings and starting backups
//! (simulated).

use axum::{
    Form,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::alert::Alert;

/// The form data for the admin settings page.
///
/// Checkboxes only submit a value when ticked, so every toggle arrives as an
/// optional field. The numeric fields arrive as strings and are logged
/// verbatim; nothing is persisted.
#[derive(Debug, Deserialize)]
pub struct AdminSettingsForm {
    /// Whether new user registration is allowed.
    #[serde(default)]
    pub user_registration: Option<String>,
    /// Whether two-factor authentication is required.
    #[serde(default)]
    pub two_factor_required: Option<String>,
    /// Whether system email notifications are enabled.
    #[serde(default)]
    pub email_notifications: Option<String>,
    /// Whether maintenance mode is enabled.
    #[serde(default)]
    pub maintenance_mode: Option<String>,
    /// The session timeout in minutes.
    #[serde(default)]
    pub session_timeout: Option<String>,
    /// The data retention period in days.
    #[serde(default)]
    pub data_retention: Option<String>,
    /// How often backups run.
    #[serde(default)]
    pub backup_frequency: Option<String>,
    /// The maximum upload size in megabytes.
    #[serde(default)]
    pub max_file_size: Option<String>,
}

/// A route handler for saving the admin settings form, responds with a
/// toast.
pub async fn save_admin_settings_endpoint(Form(form): Form<AdminSettingsForm>) -> Response {
    tracing::info!(
        "demo admin settings saved: registration={} two_factor={} email={} \
        maintenance={} timeout={} retention={} backups={} max_upload={}",
        form.user_registration.is_some(),
        form.two_factor_required.is_some(),
        form.email_notifications.is_some(),
        form.maintenance_mode.is_some(),
        form.session_timeout.as_deref().unwrap_or("60"),
        form.data_retention.as_deref().unwrap_or("365"),
        form.backup_frequency.as_deref().unwrap_or("daily"),
        form.max_file_size.as_deref().unwrap_or("10"),
    );

    Alert::success("Settings saved", "Admin settings have been successfully updated.")
        .into_response()
}

/// A route handler for the backup button, responds with a toast.
pub async fn backup_endpoint() -> Response {
    tracing::info!("demo system backup requested");

    Alert::success("Backup started", "System backup has been initiated.").into_response()
}
