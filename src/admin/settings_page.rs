//! Defines the route handler for the admin settings page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_SELECT_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base,
    },
    navigation::SideBar,
    store::DemoStore,
};

/// The state needed for the admin settings page.
#[derive(Debug, Clone)]
pub struct AdminSettingsPageState {
    /// The demo data providing the admin user for the sidebar.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for AdminSettingsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display the system-wide settings form groups.
pub async fn get_admin_settings_page(State(state): State<AdminSettingsPageState>) -> Response {
    admin_settings_view(&state.store).into_response()
}

fn toggle_row(name: &str, label: &str, checked: bool) -> Markup {
    html!(
        div class="flex items-center justify-between"
        {
            label for=(name) class="text-slate-700 dark:text-gray-300" { (label) }

            input
                id=(name)
                type="checkbox"
                name=(name)
                checked[checked]
                class="w-4 h-4 rounded text-emerald-600 border-slate-300
                focus:ring-emerald-500";
        }
    )
}

fn setting_card(title: &str, description: &str, body: Markup) -> Markup {
    html!(
        section class=(CARD_STYLE)
        {
            h3 class="font-semibold text-slate-900 dark:text-white mb-1" { (title) }

            p class="text-sm text-slate-600 dark:text-gray-400 mb-4" { (description) }

            (body)
        }
    )
}

fn admin_settings_view(store: &DemoStore) -> Markup {
    let side_bar = SideBar::admin(endpoints::ADMIN_SETTINGS_VIEW, store.admin_user()).into_html();

    let content = html!(
        div class="lg:flex"
        {
            (side_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                header
                {
                    h1 class="text-3xl font-bold" { "Admin Settings" }

                    p class="text-slate-600 dark:text-gray-400 mt-1"
                    {
                        "Configure system-wide settings and preferences"
                    }
                }

                form
                    hx-post=(endpoints::ADMIN_SETTINGS_API)
                    hx-target="#alert-container"
                    hx-target-error="#alert-container"
                    hx-swap="innerHTML"
                    class="space-y-6"
                {
                    (setting_card(
                        "User Management",
                        "Control user registration and account settings",
                        html!(
                            div class="space-y-4"
                            {
                                (toggle_row("user_registration", "Allow User Registration", true))
                                (toggle_row(
                                    "two_factor_required",
                                    "Require Two-Factor Authentication",
                                    false,
                                ))

                                div class="flex items-center justify-between"
                                {
                                    label
                                        for="session_timeout"
                                        class="text-slate-700 dark:text-gray-300"
                                    {
                                        "Session Timeout (minutes)"
                                    }

                                    input
                                        id="session_timeout"
                                        type="number"
                                        name="session_timeout"
                                        value="60"
                                        min="5"
                                        class=(format!("{FORM_TEXT_INPUT_STYLE} max-w-32"));
                                }
                            }
                        ),
                    ))

                    (setting_card(
                        "Notifications",
                        "Configure system notification defaults",
                        html!(
                            (toggle_row("email_notifications", "Email Notifications", true))
                        ),
                    ))

                    (setting_card(
                        "Data Management",
                        "Control retention, backups, and upload limits",
                        html!(
                            div class="space-y-4"
                            {
                                div class="flex items-center justify-between"
                                {
                                    label
                                        for="data_retention"
                                        class="text-slate-700 dark:text-gray-300"
                                    {
                                        "Data Retention (days)"
                                    }

                                    input
                                        id="data_retention"
                                        type="number"
                                        name="data_retention"
                                        value="365"
                                        min="30"
                                        class=(format!("{FORM_TEXT_INPUT_STYLE} max-w-32"));
                                }

                                div class="flex items-center justify-between"
                                {
                                    label
                                        for="backup_frequency"
                                        class="text-slate-700 dark:text-gray-300"
                                    {
                                        "Backup Frequency"
                                    }

                                    select
                                        id="backup_frequency"
                                        name="backup_frequency"
                                        class=(format!("{FORM_SELECT_STYLE} max-w-32"))
                                    {
                                        option value="hourly" { "Hourly" }
                                        option value="daily" selected { "Daily" }
                                        option value="weekly" { "Weekly" }
                                    }
                                }

                                div class="flex items-center justify-between"
                                {
                                    label
                                        for="max_file_size"
                                        class="text-slate-700 dark:text-gray-300"
                                    {
                                        "Max Upload Size (MB)"
                                    }

                                    input
                                        id="max_file_size"
                                        type="number"
                                        name="max_file_size"
                                        value="10"
                                        min="1"
                                        class=(format!("{FORM_TEXT_INPUT_STYLE} max-w-32"));
                                }
                            }
                        ),
                    ))

                    (setting_card(
                        "Maintenance",
                        "Take the system offline for maintenance",
                        html!(
                            (toggle_row("maintenance_mode", "Maintenance Mode", false))
                        ),
                    ))

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save All Settings" }
                }

                section class=(CARD_STYLE)
                {
                    h3 class="font-semibold mb-4" { "System Backup" }

                    button
                        class=(BUTTON_SECONDARY_STYLE)
                        hx-post=(endpoints::ADMIN_BACKUP_API)
                        hx-target="#alert-container"
                        hx-target-error="#alert-container"
                        hx-swap="innerHTML"
                    {
                        "Backup Now"
                    }
                }
            }
        }
    );

    base("Admin Settings", &[], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::State;
    use scraper::Selector;

    use crate::{
        endpoints,
        store::DemoStore,
        test_utils::{
            assert_hx_endpoint, assert_status_ok, assert_valid_html, must_get_form,
            parse_html_document,
        },
    };

    use super::{AdminSettingsPageState, get_admin_settings_page};

    fn get_test_state() -> AdminSettingsPageState {
        AdminSettingsPageState {
            store: Arc::new(DemoStore::seeded()),
        }
    }

    #[tokio::test]
    async fn form_posts_to_the_admin_settings_endpoint() {
        let response = get_admin_settings_page(State(get_test_state())).await;

        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::ADMIN_SETTINGS_API, "hx-post");
    }

    #[tokio::test]
    async fn backup_button_targets_the_backup_endpoint() {
        let response = get_admin_settings_page(State(get_test_state())).await;

        let html = parse_html_document(response).await;
        let selector = Selector::parse(&format!(
            "button[hx-post='{}']",
            endpoints::ADMIN_BACKUP_API
        ))
        .unwrap();

        assert!(html.select(&selector).next().is_some());
    }

    #[tokio::test]
    async fn registration_defaults_on_and_maintenance_off() {
        let response = get_admin_settings_page(State(get_test_state())).await;

        let html = parse_html_document(response).await;

        let registration =
            Selector::parse("input[name='user_registration'][checked]").unwrap();
        assert!(html.select(&registration).next().is_some());

        let maintenance = Selector::parse("input[name='maintenance_mode'][checked]").unwrap();
        assert!(html.select(&maintenance).next().is_none());
    }
}
