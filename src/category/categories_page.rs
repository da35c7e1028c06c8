//! Defines the route handler for the page showing categories and their
//! budgets.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    category::CategorySpending,
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, category_avatar,
        format_currency, progress_bar,
    },
    navigation::SideBar,
    store::DemoStore,
};

/// The state needed for the categories page.
#[derive(Debug, Clone)]
pub struct CategoriesPageState {
    /// The demo data the categories are summarized from.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for CategoriesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display each category with its spending progress against the budget.
pub async fn get_categories_page(State(state): State<CategoriesPageState>) -> Response {
    let spending = state.store.category_spending();

    categories_view(&spending, &state.store).into_response()
}

fn categories_view(spending: &[CategorySpending], store: &DemoStore) -> Markup {
    let side_bar = SideBar::user(endpoints::CATEGORIES_VIEW, store.current_user()).into_html();

    let total_budget: f64 = spending.iter().map(|summary| summary.category.budget).sum();
    let total_spent: f64 = spending.iter().map(|summary| summary.spent).sum();
    let over_budget_count = spending
        .iter()
        .filter(|summary| summary.is_over_budget())
        .count();

    let summary_card = |label: &str, value: String| {
        html!(
            div class=(CARD_STYLE)
            {
                p class="text-sm font-medium text-slate-600 dark:text-gray-400" { (label) }

                p class="text-2xl font-bold text-slate-900 dark:text-white mt-1" { (value) }
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
                        h1 class="text-3xl font-bold" { "Categories" }

                        p class="text-slate-600 dark:text-gray-400 mt-1"
                        {
                            "Manage your expense categories and budgets"
                        }
                    }

                    a href=(endpoints::ADMIN_CATEGORIES_VIEW) class=(LINK_STYLE)
                    {
                        "Add Category"
                    }
                }

                section class="grid grid-cols-1 md:grid-cols-3 gap-6"
                {
                    (summary_card("Total Budget", format_currency(total_budget)))
                    (summary_card("Total Spent", format_currency(total_spent)))
                    (summary_card("Over Budget", over_budget_count.to_string()))
                }

                section class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6"
                {
                    @for summary in spending {
                        (category_card(summary))
                    }
                }
            }
        }
    );

    base("Categories", &[], &content)
}

fn category_card(summary: &CategorySpending) -> Markup {
    let category = &summary.category;
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_CATEGORY, category.id);
    let confirm_message = format!("Are you sure you want to delete '{}'?", category.name);
    let percentage = summary.percent_of_budget();

    html!(
        div class=(CARD_STYLE) data-category-id=(category.id)
        {
            div class="flex items-center justify-between mb-4"
            {
                div class="flex items-center space-x-3"
                {
                    (category_avatar(category))

                    div
                    {
                        h3 class="font-semibold text-slate-900 dark:text-white"
                        {
                            (category.name)
                        }

                        p class="text-sm text-slate-600 dark:text-gray-400"
                        {
                            "Budget: " (format_currency(category.budget))
                        }
                    }
                }

                button
                    class=(BUTTON_DELETE_STYLE)
                    hx-delete=(delete_url)
                    hx-confirm=(confirm_message)
                    hx-target="#alert-container"
                    hx-target-error="#alert-container"
                    hx-swap="innerHTML"
                {
                    "Delete"
                }
            }

            div class="space-y-2"
            {
                div class="flex justify-between items-center text-sm"
                {
                    span class="text-slate-600 dark:text-gray-400" { "Spent" }

                    span
                        class=(if summary.is_over_budget() {
                            "font-semibold text-red-600 dark:text-red-400"
                        } else {
                            "font-semibold text-slate-900 dark:text-white"
                        })
                    {
                        (format_currency(summary.spent)) " / " (format_currency(category.budget))
                    }
                }

                (progress_bar(percentage, &category.color))

                div class="flex justify-between items-center text-xs"
                {
                    span class="text-slate-600 dark:text-gray-400"
                    {
                        (format!("{percentage:.0}")) "% used"
                    }

                    @if summary.is_over_budget() {
                        span class="text-red-600 dark:text-red-400 font-medium" { "Over budget!" }
                    }
                }
            }

            div class="pt-3 mt-3 border-t border-slate-100 dark:border-gray-700"
            {
                div class="grid grid-cols-2 gap-4 text-center"
                {
                    div
                    {
                        p class="text-xs text-slate-600 dark:text-gray-400" { "Remaining" }

                        p class="font-semibold text-sm text-emerald-600 dark:text-emerald-400"
                        {
                            (format_currency(summary.remaining()))
                        }
                    }

                    div
                    {
                        p class="text-xs text-slate-600 dark:text-gray-400" { "Expenses" }

                        p class="font-semibold text-sm text-slate-900 dark:text-white"
                        {
                            (summary.expense_count)
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::State;
    use scraper::Selector;

    use crate::{
        store::DemoStore,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
    };

    use super::{CategoriesPageState, get_categories_page};

    fn get_test_state() -> CategoriesPageState {
        CategoriesPageState {
            store: Arc::new(DemoStore::seeded()),
        }
    }

    #[tokio::test]
    async fn renders_a_card_for_every_category() {
        let response = get_categories_page(State(get_test_state())).await;

        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let cards = Selector::parse("[data-category-id]").unwrap();
        assert_eq!(html.select(&cards).count(), 8);
    }

    #[tokio::test]
    async fn summarizes_budgets_and_spending() {
        let response = get_categories_page(State(get_test_state())).await;

        let html = parse_html_document(response).await;
        let text = html.html();

        // 800 + 400 + 300 + 200 + 600 + 200 + 150 + 250
        assert!(text.contains("$2,900.00"), "total budget missing");
        assert!(text.contains("$456.50"), "total spent missing");
    }

    #[tokio::test]
    async fn no_seeded_category_is_over_budget() {
        let response = get_categories_page(State(get_test_state())).await;

        let html = parse_html_document(response).await;
        assert!(!html.html().contains("Over budget!"));
    }
}
