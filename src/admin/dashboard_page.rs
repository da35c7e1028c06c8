//! Defines the route handler for the admin panel landing page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    html::{
        CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_currency, initials,
    },
    navigation::SideBar,
    store::DemoStore,
    user::Role,
};

/// The state needed for the admin dashboard page.
#[derive(Debug, Clone)]
pub struct AdminDashboardState {
    /// The demo data summarized on the admin dashboard.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for AdminDashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display an overview of system activity for administrators.
pub async fn get_admin_dashboard_page(State(state): State<AdminDashboardState>) -> Response {
    admin_dashboard_view(&state.store).into_response()
}

fn admin_dashboard_view(store: &DemoStore) -> Markup {
    let side_bar = SideBar::admin(endpoints::ADMIN_DASHBOARD_VIEW, store.admin_user()).into_html();
    let stats = store.overview_stats();
    let recent_users: Vec<_> = store
        .users()
        .iter()
        .filter(|user| user.role == Role::User)
        .take(3)
        .collect();
    let recent_expenses = store.recent_expenses(5);

    let stat_card = |title: &str, value: String, subtitle: &str| {
        html!(
            div class=(CARD_STYLE)
            {
                p class="text-sm font-medium text-slate-600 dark:text-gray-400" { (title) }

                p class="text-3xl font-bold text-slate-900 dark:text-white mt-2" { (value) }

                p class="text-sm text-slate-500 dark:text-gray-400 mt-1" { (subtitle) }
            }
        )
    };

    let shortcut_card = |title: &str, description: &str, url: &str, link_text: &str| {
        html!(
            div class=(CARD_STYLE)
            {
                h3 class="font-semibold text-slate-900 dark:text-white mb-2" { (title) }

                p class="text-slate-600 dark:text-gray-400 mb-4" { (description) }

                a href=(url) class=(LINK_STYLE) { (link_text) }
            }
        )
    };

    let content = html!(
        div class="lg:flex"
        {
            (side_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    div
                    {
                        h1 class="text-3xl font-bold" { "Admin Dashboard" }

                        p class="text-slate-600 dark:text-gray-400 mt-1"
                        {
                            "Overview of system activity and user management"
                        }
                    }

                    div class="flex gap-4"
                    {
                        a href=(endpoints::ADMIN_REPORTS_VIEW) class=(LINK_STYLE) { "View Reports" }

                        a href=(endpoints::ADMIN_USERS_VIEW) class=(LINK_STYLE) { "Manage Users" }
                    }
                }

                section class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6"
                {
                    (stat_card(
                        "Total Users",
                        stats.total_users.to_string(),
                        "Active accounts",
                    ))
                    (stat_card(
                        "Total Expenses",
                        format_currency(stats.total_expenses),
                        &format!("Up {:.1}% vs last month", stats.monthly_growth),
                    ))
                    (stat_card(
                        "Avg Monthly",
                        format_currency(stats.average_monthly_expense),
                        "Per user",
                    ))
                    (stat_card("Top Category", stats.top_category.to_owned(), "Most used"))
                }

                div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
                {
                    section class=(CARD_STYLE)
                    {
                        div class="flex items-center justify-between mb-4"
                        {
                            h3 class="text-lg font-semibold" { "Recent Users" }

                            a href=(endpoints::ADMIN_USERS_VIEW) class=(LINK_STYLE) { "View all" }
                        }

                        ul class="space-y-3"
                        {
                            @for user in &recent_users {
                                li class="flex items-center justify-between p-3 bg-slate-50 dark:bg-gray-700 rounded-lg"
                                {
                                    div class="flex items-center space-x-3"
                                    {
                                        div
                                            class="w-10 h-10 bg-emerald-500 rounded-full flex
                                            items-center justify-center text-white font-semibold"
                                        {
                                            (initials(&user.name))
                                        }

                                        div
                                        {
                                            p class="font-medium text-slate-900 dark:text-white"
                                            {
                                                (user.name)
                                            }

                                            p class="text-sm text-slate-600 dark:text-gray-400"
                                            {
                                                (user.email)
                                            }
                                        }
                                    }

                                    div class="text-right"
                                    {
                                        p class="font-semibold text-slate-900 dark:text-white"
                                        {
                                            (format_currency(user.total_expenses))
                                        }

                                        p class="text-xs text-slate-500 dark:text-gray-400"
                                        {
                                            (user.role)
                                        }
                                    }
                                }
                            }
                        }
                    }

                    section class=(CARD_STYLE)
                    {
                        div class="flex items-center justify-between mb-4"
                        {
                            h3 class="text-lg font-semibold" { "Recent Activity" }

                            a href=(endpoints::ADMIN_REPORTS_VIEW) class=(LINK_STYLE)
                            {
                                "View reports"
                            }
                        }

                        ul class="space-y-3"
                        {
                            @for expense in &recent_expenses {
                                li class="flex items-center justify-between p-3 bg-slate-50 dark:bg-gray-700 rounded-lg"
                                {
                                    div
                                    {
                                        p class="font-medium text-slate-900 dark:text-white"
                                        {
                                            (expense.description)
                                        }

                                        p class="text-sm text-slate-600 dark:text-gray-400"
                                        {
                                            (expense.category_name)
                                        }
                                    }

                                    div class="text-right"
                                    {
                                        p class="font-semibold text-slate-900 dark:text-white"
                                        {
                                            (format_currency(expense.amount))
                                        }

                                        p class="text-xs text-slate-500 dark:text-gray-400"
                                        {
                                            (expense.date)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                section class="grid grid-cols-1 lg:grid-cols-3 gap-6"
                {
                    (shortcut_card(
                        "User Management",
                        "Manage user accounts, permissions, and activity monitoring.",
                        endpoints::ADMIN_USERS_VIEW,
                        "Manage Users",
                    ))
                    (shortcut_card(
                        "Analytics",
                        "View detailed reports and analytics on user spending patterns.",
                        endpoints::ADMIN_REPORTS_VIEW,
                        "View Reports",
                    ))
                    (shortcut_card(
                        "Categories",
                        "Configure and manage expense categories for all users.",
                        endpoints::ADMIN_CATEGORIES_VIEW,
                        "Manage Categories",
                    ))
                }
            }
        }
    );

    base("Admin Dashboard", &[], &content)
}
