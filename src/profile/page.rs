//! Defines the route handler for the current user's profile page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, format_currency, format_month_year,
        initials,
    },
    navigation::SideBar,
    store::DemoStore,
    user::User,
};

/// The number of months the all-time total is averaged over.
const AVERAGE_MONTHS: f64 = 6.0;

/// The state needed for the profile page.
#[derive(Debug, Clone)]
pub struct ProfilePageState {
    /// The demo data the profile is rendered from.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for ProfilePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display the current user's profile and expense stats.
pub async fn get_profile_page(State(state): State<ProfilePageState>) -> Response {
    let store = &state.store;
    let user = store.current_user();
    let expense_count = store.expenses_for_user(user.id).len();
    let total_spent: f64 = store
        .expenses_for_user(user.id)
        .iter()
        .map(|expense| expense.amount)
        .sum();

    profile_view(user, expense_count, total_spent).into_response()
}

fn profile_view(user: &User, expense_count: usize, total_spent: f64) -> Markup {
    let side_bar = SideBar::user(endpoints::PROFILE_VIEW, user).into_html();
    let average_monthly = user.total_expenses / AVERAGE_MONTHS;

    let stat_card = |label: &str, value: String| {
        html!(
            div class=(format!("{CARD_STYLE} text-center"))
            {
                p class="text-sm font-medium text-slate-600 dark:text-gray-400 mb-1" { (label) }

                p class="text-2xl font-bold text-slate-900 dark:text-white" { (value) }
            }
        )
    };

    let content = html!(
        div class="lg:flex"
        {
            (side_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                header
                {
                    h1 class="text-3xl font-bold" { "Profile" }

                    p class="text-slate-600 dark:text-gray-400 mt-1"
                    {
                        "Manage your account and preferences"
                    }
                }

                div class="grid grid-cols-1 lg:grid-cols-3 gap-6"
                {
                    section class=(format!("{CARD_STYLE} lg:col-span-2"))
                    {
                        h2 class="text-xl font-semibold mb-6" { "Personal Information" }

                        div class="flex items-center space-x-4 mb-6"
                        {
                            div
                                class="w-20 h-20 bg-emerald-500 rounded-full flex
                                items-center justify-center text-white text-2xl font-semibold"
                            {
                                (initials(&user.name))
                            }

                            div
                            {
                                h3 class="text-lg font-semibold text-slate-900 dark:text-white"
                                {
                                    (user.name)
                                }

                                p class="text-slate-600 dark:text-gray-400" { (user.email) }

                                span
                                    class="inline-flex mt-2 px-2.5 py-0.5 text-xs font-semibold
                                    text-emerald-700 bg-emerald-100 rounded-full
                                    dark:bg-emerald-900 dark:text-emerald-300"
                                {
                                    (user.role)
                                }
                            }
                        }

                        form
                            hx-post=(endpoints::PROFILE_API)
                            hx-target="#alert-container"
                            hx-target-error="#alert-container"
                            hx-swap="innerHTML"
                            class="space-y-6"
                        {
                            div class="grid grid-cols-1 md:grid-cols-2 gap-6"
                            {
                                div
                                {
                                    label for="name" class=(FORM_LABEL_STYLE) { "Full Name" }

                                    input
                                        id="name"
                                        type="text"
                                        name="name"
                                        value=(user.name)
                                        required
                                        class=(FORM_TEXT_INPUT_STYLE);
                                }

                                div
                                {
                                    label for="email" class=(FORM_LABEL_STYLE) { "Email Address" }

                                    input
                                        id="email"
                                        type="email"
                                        name="email"
                                        value=(user.email)
                                        required
                                        class=(FORM_TEXT_INPUT_STYLE);
                                }

                                div class="md:col-span-2"
                                {
                                    label for="monthly_budget" class=(FORM_LABEL_STYLE)
                                    {
                                        "Monthly Budget"
                                    }

                                    input
                                        id="monthly_budget"
                                        type="number"
                                        name="monthly_budget"
                                        step="0.01"
                                        min="0"
                                        value=(user.monthly_budget)
                                        required
                                        class=(FORM_TEXT_INPUT_STYLE);
                                }
                            }

                            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save Changes" }
                        }

                        div class="pt-6 mt-6 border-t border-slate-200 dark:border-gray-700"
                        {
                            h3 class="font-semibold mb-4" { "Account Information" }

                            div class="grid grid-cols-2 gap-4 text-sm"
                            {
                                p
                                {
                                    span class="text-slate-600 dark:text-gray-400"
                                    {
                                        "Member since: "
                                    }
                                    span class="font-medium" { (format_month_year(user.created_at)) }
                                }

                                p
                                {
                                    span class="text-slate-600 dark:text-gray-400"
                                    {
                                        "Account ID: "
                                    }
                                    span class="font-mono" { (user.id) }
                                }
                            }
                        }
                    }

                    div class="space-y-6"
                    {
                        (stat_card("Total Expenses", expense_count.to_string()))
                        (stat_card("Total Spent", format_currency(total_spent)))
                        (stat_card("Avg Monthly", format_currency(average_monthly)))

                        section class=(CARD_STYLE)
                        {
                            h3 class="font-semibold mb-4" { "Quick Actions" }

                            div class="space-y-3"
                            {
                                button class=(BUTTON_SECONDARY_STYLE) { "Change Password" }

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
                    }
                }
            }
        }
    );

    base("Profile", &[], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::State;

    use crate::{
        endpoints,
        store::DemoStore,
        test_utils::{
            assert_form_input_with_value, assert_hx_endpoint, assert_status_ok, assert_valid_html,
            must_get_form, parse_html_document,
        },
    };

    use super::{ProfilePageState, get_profile_page};

    fn get_test_state() -> ProfilePageState {
        ProfilePageState {
            store: Arc::new(DemoStore::seeded()),
        }
    }

    #[tokio::test]
    async fn form_is_prefilled_with_the_current_user() {
        let response = get_profile_page(State(get_test_state())).await;

        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::PROFILE_API, "hx-post");
        assert_form_input_with_value(&form, "name", "text", "John Doe");
        assert_form_input_with_value(&form, "email", "email", "john@example.com");
        assert_form_input_with_value(&form, "monthly_budget", "number", "3000");
    }

    #[tokio::test]
    async fn shows_expense_stats_for_the_current_user()  {
        let response = get_profile_page(State(get_test_state())).await;

        let html = parse_html_document(response).await;
        let text = html.html();

        assert!(text.contains("$431.50"), "total spent missing");
        // 2450.75 / 6 = 408.458...
        assert!(text.contains("$408.4"), "average monthly missing");
        assert!(text.contains("January 2024"), "member since missing");
    }

    #[tokio::test]
    async fn shows_the_role_badge() {
        let response = get_profile_page(State(get_test_state())).await;

        let html = parse_html_document(response).await;
        assert!(html.html().contains(">User</span>"));
    }
}
