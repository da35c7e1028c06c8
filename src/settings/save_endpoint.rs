//! Defines the endpoints for saving settings and exporting data (simulated).

use axum::{
    Form,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::alert::Alert;

/// The form data for the settings page.
///
/// Checkboxes only submit a value when ticked, so every toggle arrives as an
/// optional field.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    /// Whether dark mode is enabled.
    #[serde(default)]
    pub dark_mode: Option<String>,
    /// Whether push notifications are enabled.
    #[serde(default)]
    pub notifications: Option<String>,
    /// Whether email alerts are enabled.
    #[serde(default)]
    pub email_alerts: Option<String>,
    /// Whether budget warnings are enabled.
    #[serde(default)]
    pub budget_warnings: Option<String>,
    /// Whether automatic backups are enabled.
    #[serde(default)]
    pub auto_backup: Option<String>,
    /// The preferred currency code, e.g. "USD".
    #[serde(default)]
    pub currency: Option<String>,
    /// The preferred language code, e.g. "en".
    #[serde(default)]
    pub language: Option<String>,
}

/// A route handler for saving the settings form, responds with a toast.
///
/// Nothing is persisted; the selections are logged and confirmed.
pub async fn save_settings_endpoint(Form(form): Form<SettingsForm>) -> Response {
    tracing::info!(
        "demo settings saved: dark_mode={} notifications={} email_alerts={} \
        budget_warnings={} auto_backup={} currency={} language={}",
        form.dark_mode.is_some(),
        form.notifications.is_some(),
        form.email_alerts.is_some(),
        form.budget_warnings.is_some(),
        form.auto_backup.is_some(),
        form.currency.as_deref().unwrap_or("USD"),
        form.language.as_deref().unwrap_or("en"),
    );

    Alert::success("Settings saved", "Your settings have been successfully updated.")
        .into_response()
}

/// A route handler for the export-data button, responds with a toast.
pub async fn export_data_endpoint() -> Response {
    tracing::info!("demo data export requested");

    Alert::success("Export started", "Your data export will be ready shortly.").into_response()
}

#[cfg(test)]
mod tests {
    use axum::Form;

    use crate::test_utils::{assert_status_ok, parse_html_fragment};

    use super::{SettingsForm, export_data_endpoint, save_settings_endpoint};

    #[tokio::test]
    async fn saving_settings_confirms_with_toast() {
        let form = SettingsForm {
            dark_mode: Some("on".to_owned()),
            notifications: None,
            email_alerts: Some("on".to_owned()),
            budget_warnings: None,
            auto_backup: None,
            currency: Some("EUR".to_owned()),
            language: Some("en".to_owned()),
        };

        let response = save_settings_endpoint(Form(form)).await;

        assert_status_ok(&response);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Settings saved"));
    }

    #[tokio::test]
    async fn export_confirms_with_toast() {
        let response = export_data_endpoint().await;

        assert_status_ok(&response);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Export started"));
    }
}
