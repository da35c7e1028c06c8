//! Defines the route handler for the admin expense reports page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, endpoints,
    admin::charts::{ReportChart, category_breakdown_chart, charts_script, monthly_trend_chart},
    alert::Alert,
    category::CategorySpending,
    html::{
        BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_SELECT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, base, category_avatar, format_currency, initials,
    },
    navigation::SideBar,
    store::DemoStore,
    user::{Role, User},
};

/// The number of categories shown in the breakdown list.
const BREAKDOWN_LIMIT: usize = 6;

/// The state needed for the reports page.
#[derive(Debug, Clone)]
pub struct AdminReportsState {
    /// The demo data the report is built from.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for AdminReportsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The reporting period filter.
///
/// The demo data set is static, so the period only changes the dropdown
/// selection; the figures always cover the whole data set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// The current week.
    Week,
    /// The current month.
    #[default]
    Month,
    /// The current quarter.
    Quarter,
    /// The current year.
    Year,
}

/// The query parameters accepted by the reports page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    /// The selected reporting period.
    #[serde(default)]
    pub period: Option<ReportPeriod>,
    /// The selected category filter; like the period, it only drives the
    /// dropdown selection on the static demo data.
    #[serde(default)]
    pub category: Option<String>,
}

/// Display spending reports with charts, category breakdown, and top
/// spenders.
pub async fn get_admin_reports_page(
    State(state): State<AdminReportsState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let period = query.period.unwrap_or_default();
    let category = query
        .category
        .as_deref()
        .and_then(|raw| raw.trim().parse::<i64>().ok());

    admin_reports_view(period, category, &state.store).into_response()
}

/// A route handler for the report export button, responds with a toast.
pub async fn export_report_endpoint() -> Response {
    tracing::info!("demo report export requested");

    Alert::success("Export started", "Your expense report will be ready shortly.")
        .into_response()
}

/// Category spending sorted by amount descending, ties broken by ID so the
/// unused categories keep a stable order.
fn sorted_breakdown(store: &DemoStore) -> Vec<CategorySpending> {
    let mut breakdown = store.category_spending();
    breakdown.sort_by(|a, b| {
        b.spent
            .total_cmp(&a.spent)
            .then(a.category.id.cmp(&b.category.id))
    });
    breakdown
}

fn admin_reports_view(period: ReportPeriod, category: Option<i64>, store: &DemoStore) -> Markup {
    let side_bar = SideBar::admin(endpoints::ADMIN_REPORTS_VIEW, store.admin_user()).into_html();

    let total: f64 = store.expenses().iter().map(|expense| expense.amount).sum();
    let expense_count = store.expenses().len();
    let average = if expense_count > 0 {
        total / expense_count as f64
    } else {
        0.0
    };
    let active_users = store
        .users()
        .iter()
        .filter(|user| user.role == Role::User)
        .count();

    let breakdown = sorted_breakdown(store);
    let mut top_spenders: Vec<&User> = store
        .users()
        .iter()
        .filter(|user| user.role == Role::User)
        .collect();
    top_spenders.sort_by(|a, b| b.total_expenses.total_cmp(&a.total_expenses));

    let charts = [
        ReportChart {
            id: "monthly-trend-chart",
            options: monthly_trend_chart(store.monthly_totals()).to_string(),
        },
        ReportChart {
            id: "category-breakdown-chart",
            options: category_breakdown_chart(&breakdown).to_string(),
        },
    ];

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
                        h1 class="text-3xl font-bold" { "Expense Reports" }

                        p class="text-slate-600 dark:text-gray-400 mt-1"
                        {
                            "Detailed analytics and spending insights"
                        }
                    }

                    button
                        class=(BUTTON_SECONDARY_STYLE)
                        hx-post=(endpoints::ADMIN_REPORTS_EXPORT_API)
                        hx-target="#alert-container"
                        hx-target-error="#alert-container"
                        hx-swap="innerHTML"
                    {
                        "Export Report"
                    }
                }

                section class=(CARD_STYLE)
                {
                    form method="get" action=(endpoints::ADMIN_REPORTS_VIEW)
                        class="flex flex-col md:flex-row gap-4 items-center"
                    {
                        span class="text-sm font-medium text-slate-700 dark:text-gray-300"
                        {
                            "Filters:"
                        }

                        select name="period" class=(format!("{FORM_SELECT_STYLE} max-w-40"))
                        {
                            option value="week" selected[period == ReportPeriod::Week]
                            {
                                "This Week"
                            }
                            option value="month" selected[period == ReportPeriod::Month]
                            {
                                "This Month"
                            }
                            option value="quarter" selected[period == ReportPeriod::Quarter]
                            {
                                "This Quarter"
                            }
                            option value="year" selected[period == ReportPeriod::Year]
                            {
                                "This Year"
                            }
                        }

                        select name="category" class=(format!("{FORM_SELECT_STYLE} max-w-48"))
                        {
                            option value="" { "All Categories" }

                            @for entry in store.categories() {
                                option
                                    value=(entry.id)
                                    selected[category == Some(entry.id)]
                                {
                                    (entry.name)
                                }
                            }
                        }

                        button
                            type="submit"
                            class="px-4 py-2 bg-emerald-500 hover:bg-emerald-600 text-white rounded text-sm"
                        {
                            "Apply"
                        }
                    }
                }

                section class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6"
                {
                    (stat_card("Total Expenses", format_currency(total), "All time"))
                    (stat_card("Average Expense", format_currency(average), "Per transaction"))
                    (stat_card("Total Transactions", expense_count.to_string(), "All time"))
                    (stat_card("Active Users", active_users.to_string(), "With expenses"))
                }

                section class="grid grid-cols-1 xl:grid-cols-2 gap-6"
                {
                    @for chart in &charts {
                        div
                            id=(chart.id)
                            class="min-h-[380px] rounded bg-white dark:bg-gray-100 shadow-md"
                        {}
                    }
                }

                section class=(CARD_STYLE)
                {
                    h3 class="text-lg font-semibold mb-4" { "Category Breakdown" }

                    ul class="space-y-3"
                    {
                        @for summary in breakdown.iter().take(BREAKDOWN_LIMIT) {
                            li class="flex items-center justify-between p-3 bg-slate-50 dark:bg-gray-700 rounded-lg"
                            {
                                div class="flex items-center space-x-3"
                                {
                                    (category_avatar(&summary.category))

                                    div
                                    {
                                        p class="font-medium text-slate-900 dark:text-white"
                                        {
                                            (summary.category.name)
                                        }

                                        p class="text-sm text-slate-600 dark:text-gray-400"
                                        {
                                            (summary.expense_count) " transactions"
                                        }
                                    }
                                }

                                div class="text-right"
                                {
                                    p class="font-semibold text-slate-900 dark:text-white"
                                    {
                                        (format_currency(summary.spent))
                                    }

                                    p class="text-xs text-slate-500 dark:text-gray-400"
                                    {
                                        @if total > 0.0 {
                                            (format!("{:.1}", summary.spent / total * 100.0)) "%"
                                        } @else {
                                            "0%"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                section class=(CARD_STYLE)
                {
                    h3 class="text-lg font-semibold mb-4" { "Top Spenders" }

                    ul class="space-y-3"
                    {
                        @for (index, user) in top_spenders.iter().enumerate() {
                            li class="flex items-center justify-between p-4 bg-slate-50 dark:bg-gray-700 rounded-lg"
                            {
                                div class="flex items-center space-x-4"
                                {
                                    div
                                        class="w-8 h-8 bg-emerald-500 rounded-full flex
                                        items-center justify-center text-white text-sm font-bold"
                                    {
                                        "#" (index + 1)
                                    }

                                    div
                                        class="w-10 h-10 bg-slate-400 rounded-full flex
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
                                    p class="text-lg font-bold text-slate-900 dark:text-white"
                                    {
                                        (format_currency(user.total_expenses))
                                    }

                                    p class="text-sm text-slate-600 dark:text-gray-400"
                                    {
                                        "Budget: " (format_currency(user.monthly_budget))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(&charts),
    ];

    base("Expense Reports", &scripts, &content)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::{Query, State};
    use scraper::Selector;

    use crate::{
        store::DemoStore,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document, parse_html_fragment},
    };

    use super::{
        AdminReportsState, ReportQuery, export_report_endpoint, get_admin_reports_page,
        sorted_breakdown,
    };

    fn get_test_state() -> AdminReportsState {
        AdminReportsState {
            store: Arc::new(DemoStore::seeded()),
        }
    }

    #[tokio::test]
    async fn shows_the_headline_figures() {
        let response =
            get_admin_reports_page(State(get_test_state()), Query(ReportQuery::default())).await;

        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let text = html.html();
        assert!(text.contains("$456.50"), "total missing");
        // 456.50 / 5
        assert!(text.contains("$91.30"), "average missing");
    }

    #[tokio::test]
    async fn renders_both_chart_containers() {
        let response =
            get_admin_reports_page(State(get_test_state()), Query(ReportQuery::default())).await;

        let html = parse_html_document(response).await;

        for chart_id in ["monthly-trend-chart", "category-breakdown-chart"] {
            let selector = Selector::parse(&format!("#{chart_id}")).unwrap();
            assert!(
                html.select(&selector).next().is_some(),
                "chart container {chart_id} missing"
            );
        }
    }

    #[tokio::test]
    async fn ranks_top_spenders_by_total() {
        let response =
            get_admin_reports_page(State(get_test_state()), Query(ReportQuery::default())).await;

        let html = parse_html_document(response).await;
        let text = html.html();

        let john = text.find("John Doe").expect("John Doe missing");
        let sarah = text.find("Sarah Smith").expect("Sarah Smith missing");
        assert!(john < sarah, "top spender should be listed first");
    }

    #[test]
    fn breakdown_is_sorted_by_spending() {
        let store = DemoStore::seeded();

        let breakdown = sorted_breakdown(&store);

        assert_eq!(breakdown[0].category.name, "Bills & Utilities");
        assert_eq!(breakdown[1].category.name, "Transportation");
        // Unused categories sink to the bottom in ID order.
        assert_eq!(breakdown.last().unwrap().spent, 0.0);
    }

    #[tokio::test]
    async fn export_confirms_with_toast() {
        let response = export_report_endpoint().await;

        assert_status_ok(&response);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Export started"));
    }
}
