//! Dashboard HTTP handler and view rendering.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    category::CategorySpending,
    dashboard::summary::{MonthSummary, month_summary},
    expense::Expense,
    html::{
        CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_currency, progress_bar,
    },
    navigation::SideBar,
    store::DemoStore,
    user::User,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The demo data summarized on the dashboard.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display a page with an overview of the current user's spending.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Response {
    let store = &state.store;
    let user = store.current_user();
    let summary = month_summary(store);
    let recent = store.recent_expenses(3);
    let top_categories = store.top_categories(3);
    let month_name = store.anchor_date().month().to_string();

    dashboard_view(user, &summary, &recent, &top_categories, &month_name).into_response()
}

fn dashboard_view(
    user: &User,
    summary: &MonthSummary,
    recent: &[&Expense],
    top_categories: &[CategorySpending],
    month_name: &str,
) -> Markup {
    let side_bar = SideBar::user(endpoints::DASHBOARD_VIEW, user).into_html();

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
                        h1 class="text-3xl font-bold"
                        {
                            "Welcome back, " (user.first_name()) "!"
                        }

                        p class="text-slate-600 dark:text-gray-400 mt-1"
                        {
                            "Here's your expense overview for " (month_name)
                        }
                    }

                    a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE)
                    {
                        "Add Expense"
                    }
                }

                (stat_cards(user, summary))

                div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
                {
                    (recent_expenses_card(recent))
                    (top_categories_card(top_categories))
                }

                (quick_actions_card())
            }
        }
    );

    base("Dashboard", &[], &content)
}

fn stat_cards(user: &User, summary: &MonthSummary) -> Markup {
    let stat_card = |title: &str, value: String, extra: Option<Markup>| {
        html!(
            div class=(CARD_STYLE)
            {
                p class="text-sm font-medium text-slate-600 dark:text-gray-400" { (title) }

                p class="text-3xl font-bold text-slate-900 dark:text-white mt-2" { (value) }

                @if let Some(extra) = extra {
                    (extra)
                }
            }
        )
    };

    // Spending going up is bad news on a personal dashboard, so positive
    // change renders red and negative renders emerald.
    let change = summary.change_percent;
    let change_indicator = html!(
        p
            class=(if change > 0.0 {
                "flex items-center mt-2 text-sm text-red-600 dark:text-red-400"
            } else {
                "flex items-center mt-2 text-sm text-emerald-600 dark:text-emerald-400"
            })
        {
            span aria-hidden="true" { (if change > 0.0 { "↑" } else { "↓" }) }
            span class="ml-1" { (format!("{:.1}", change.abs())) "% vs last month" }
        }
    );

    html!(
        section class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6"
        {
            (stat_card(
                "This Month",
                format_currency(summary.this_month),
                Some(change_indicator),
            ))
            (stat_card("Monthly Budget", format_currency(user.monthly_budget), None))
            (stat_card(
                "Budget Used",
                format!("{:.1}%", summary.budget_used_percent),
                None,
            ))
            (stat_card("Total Expenses", format_currency(user.total_expenses), None))
        }
    )
}

fn recent_expenses_card(recent: &[&Expense]) -> Markup {
    html!(
        section class=(CARD_STYLE)
        {
            div class="flex items-center justify-between mb-4"
            {
                h3 class="text-lg font-semibold" { "Recent Expenses" }

                a href=(endpoints::EXPENSES_VIEW) class=(LINK_STYLE) { "View all" }
            }

            ul class="space-y-3"
            {
                @for expense in recent {
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

                            p class="text-sm text-slate-500 dark:text-gray-400"
                            {
                                (expense.date)
                            }
                        }
                    }
                }
            }
        }
    )
}

fn top_categories_card(top_categories: &[CategorySpending]) -> Markup {
    html!(
        section class=(CARD_STYLE)
        {
            div class="flex items-center justify-between mb-4"
            {
                h3 class="text-lg font-semibold" { "Top Categories" }

                a href=(endpoints::CATEGORIES_VIEW) class=(LINK_STYLE) { "View all" }
            }

            ul class="space-y-3"
            {
                @for (index, summary) in top_categories.iter().enumerate() {
                    li class="p-3 bg-slate-50 dark:bg-gray-700 rounded-lg"
                    {
                        div class="flex items-center justify-between mb-2"
                        {
                            div class="flex items-center space-x-3"
                            {
                                div
                                    class="w-8 h-8 rounded-lg flex items-center justify-center
                                    text-white text-xs font-semibold"
                                    style=(format!("background-color: {}", summary.category.color))
                                {
                                    "#" (index + 1)
                                }

                                span class="font-medium text-slate-900 dark:text-white"
                                {
                                    (summary.category.name)
                                }
                            }

                            span class="font-semibold text-slate-900 dark:text-white"
                            {
                                (format_currency(summary.spent))
                            }
                        }

                        (progress_bar(summary.percent_of_budget(), &summary.category.color))

                        p class="text-xs text-slate-600 dark:text-gray-400 mt-1"
                        {
                            (format!("{:.0}", summary.percent_of_budget()))
                            "% of "
                            (format_currency(summary.category.budget))
                            " budget"
                        }
                    }
                }
            }
        }
    )
}

fn quick_actions_card() -> Markup {
    let actions = [
        ("Add Expense", endpoints::NEW_EXPENSE_VIEW),
        ("View Reports", endpoints::EXPENSES_VIEW),
        ("Manage Categories", endpoints::CATEGORIES_VIEW),
        ("Settings", endpoints::SETTINGS_VIEW),
    ];

    html!(
        section class=(CARD_STYLE)
        {
            h3 class="text-lg font-semibold mb-4" { "Quick Actions" }

            div class="grid grid-cols-2 lg:grid-cols-4 gap-4"
            {
                @for (label, url) in actions {
                    a
                        href=(url)
                        class="h-16 flex items-center justify-center rounded-lg border
                        border-emerald-200 bg-white/60 text-sm font-medium
                        text-emerald-700 hover:bg-emerald-50 dark:border-gray-700
                        dark:bg-gray-800 dark:text-emerald-400 dark:hover:bg-gray-700"
                    {
                        (label)
                    }
                }
            }
        }
    )
}
