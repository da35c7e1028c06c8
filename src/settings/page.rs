//! Defines the route handler for the settings page.

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
        PAGE_CONTAINER_STYLE, base,
    },
    navigation::SideBar,
    store::DemoStore,
};

/// The state needed for the settings page.
#[derive(Debug, Clone)]
pub struct SettingsPageState {
    /// The demo data providing the current user for the sidebar.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for SettingsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display the settings form groups.
pub async fn get_settings_page(State(state): State<SettingsPageState>) -> Response {
    settings_view(&state.store).into_response()
}

/// A labelled toggle row. The demo defaults mirror the original app:
/// notifications on, dark mode off, and so on.
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

fn settings_view(store: &DemoStore) -> Markup {
    let side_bar = SideBar::user(endpoints::SETTINGS_VIEW, store.current_user()).into_html();

    let content = html!(
        div class="lg:flex"
        {
            (side_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                header
                {
                    h1 class="text-3xl font-bold" { "Settings" }

                    p class="text-slate-600 dark:text-gray-400 mt-1"
                    {
                        "Customize your expense tracker experience"
                    }
                }

                form
                    hx-post=(endpoints::SETTINGS_API)
                    hx-target="#alert-container"
                    hx-target-error="#alert-container"
                    hx-swap="innerHTML"
                    class="space-y-6"
                {
                    (setting_card(
                        "Appearance",
                        "Customize the look and feel of your application",
                        html!(
                            div class="space-y-4"
                            {
                                (toggle_row("dark_mode", "Dark Mode", false))

                                div class="flex items-center justify-between"
                                {
                                    label for="language" class="text-slate-700 dark:text-gray-300"
                                    {
                                        "Language"
                                    }

                                    select
                                        id="language"
                                        name="language"
                                        class=(format!("{FORM_SELECT_STYLE} max-w-32"))
                                    {
                                        option value="en" selected { "English" }
                                        option value="es" { "Spanish" }
                                        option value="fr" { "French" }
                                        option value="de" { "German" }
                                    }
                                }
                            }
                        ),
                    ))

                    (setting_card(
                        "Notifications",
                        "Manage how and when you receive notifications",
                        html!(
                            div class="space-y-4"
                            {
                                (toggle_row("notifications", "Push Notifications", true))
                                (toggle_row("email_alerts", "Email Alerts", true))
                                (toggle_row("budget_warnings", "Budget Warnings", true))
                            }
                        ),
                    ))

                    (setting_card(
                        "Currency & Localization",
                        "Set your preferred currency and regional settings",
                        html!(
                            div class="flex items-center justify-between"
                            {
                                label for="currency" class="text-slate-700 dark:text-gray-300"
                                {
                                    "Currency"
                                }

                                select
                                    id="currency"
                                    name="currency"
                                    class=(format!("{FORM_SELECT_STYLE} max-w-32"))
                                {
                                    option value="USD" selected { "USD ($)" }
                                    option value="EUR" { "EUR (€)" }
                                    option value="GBP" { "GBP (£)" }
                                    option value="JPY" { "JPY (¥)" }
                                }
                            }
                        ),
                    ))

                    (setting_card(
                        "Privacy & Security",
                        "Control your data privacy and security preferences",
                        html!(
                            div class="space-y-4"
                            {
                                (toggle_row("auto_backup", "Auto Backup", false))
                            }
                        ),
                    ))

                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Settings" }
                }

                section class=(CARD_STYLE)
                {
                    h3 class="font-semibold mb-4" { "Your Data" }

                    div class="grid grid-cols-1 md:grid-cols-2 gap-4"
                    {
                        button
                            class=(BUTTON_SECONDARY_STYLE)
                            hx-post=(endpoints::EXPORT_API)
                            hx-target="#alert-container"
                            hx-target-error="#alert-container"
                            hx-swap="innerHTML"
                        {
                            "Export Data"
                        }

                        button class=(BUTTON_SECONDARY_STYLE) { "Delete Account" }
                    }
                }

                section class=(CARD_STYLE)
                {
                    h3 class="font-semibold" { "Application Information" }

                    p class="text-sm text-slate-600 dark:text-gray-400 mt-1"
                    {
                        "Version 1.0.0 • Last updated January 2025"
                    }
                }
            }
        }
    );

    base("Settings", &[], &content)
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

    use super::{SettingsPageState, get_settings_page};

    fn get_test_state() -> SettingsPageState {
        SettingsPageState {
            store: Arc::new(DemoStore::seeded()),
        }
    }

    #[tokio::test]
    async fn form_posts_to_the_settings_endpoint() {
        let response = get_settings_page(State(get_test_state())).await;

        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::SETTINGS_API, "hx-post");
    }

    #[tokio::test]
    async fn renders_every_toggle() {
        let response = get_settings_page(State(get_test_state())).await;

        let html = parse_html_document(response).await;
        let checkboxes = Selector::parse("input[type='checkbox']").unwrap();

        assert_eq!(html.select(&checkboxes).count(), 5);
    }

    #[tokio::test]
    async fn notification_toggles_default_on() {
        let response = get_settings_page(State(get_test_state())).await;

        let html = parse_html_document(response).await;
        let checked = Selector::parse("input[type='checkbox'][checked]").unwrap();

        // notifications, email alerts, and budget warnings
        assert_eq!(html.select(&checked).count(), 3);
    }
}
