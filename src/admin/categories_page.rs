//! Defines the route handler for the admin category management page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, endpoints,
    category::CategorySpending,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_SELECT_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base, category_avatar,
        format_currency, progress_bar,
    },
    navigation::SideBar,
    store::DemoStore,
};

/// The colors offered when creating a category.
pub(super) const COLOR_PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57", "#FF9FF3", "#54A0FF", "#5F27CD",
    "#00D2D3", "#FF9F43",
];

/// The state needed for the category management page.
#[derive(Debug, Clone)]
pub struct AdminCategoriesState {
    /// The demo data the categories are summarized from.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for AdminCategoriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The query parameters accepted by the category management page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategorySearchQuery {
    /// Free-text search over category names.
    #[serde(default)]
    pub search: Option<String>,
}

/// Select the category summaries whose name matches `search`,
/// case-insensitively.
fn filter_categories(
    spending: Vec<CategorySpending>,
    search: Option<&str>,
) -> Vec<CategorySpending> {
    let search = search
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    spending
        .into_iter()
        .filter(|summary| match &search {
            Some(term) => summary.category.name.to_lowercase().contains(term),
            None => true,
        })
        .collect()
}

/// Display the category list with search, a create form, and simulated
/// management actions.
pub async fn get_admin_categories_page(
    State(state): State<AdminCategoriesState>,
    Query(query): Query<CategorySearchQuery>,
) -> Response {
    let spending = filter_categories(state.store.category_spending(), query.search.as_deref());

    admin_categories_view(&spending, query.search.as_deref(), &state.store).into_response()
}

fn admin_categories_view(
    spending: &[CategorySpending],
    search: Option<&str>,
    store: &DemoStore,
) -> Markup {
    let side_bar = SideBar::admin(endpoints::ADMIN_CATEGORIES_VIEW, store.admin_user()).into_html();

    let total_budget: f64 = store.categories().iter().map(|category| category.budget).sum();
    let over_budget_count = store
        .category_spending()
        .iter()
        .filter(|summary| summary.is_over_budget())
        .count();

    let stat_card = |label: &str, value: String| {
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
                header
                {
                    h1 class="text-3xl font-bold" { "Category Management" }

                    p class="text-slate-600 dark:text-gray-400 mt-1"
                    {
                        "Manage expense categories and budgets"
                    }
                }

                section class="grid grid-cols-1 md:grid-cols-3 gap-6"
                {
                    (stat_card("Total Categories", store.categories().len().to_string()))
                    (stat_card("Total Budget", format_currency(total_budget)))
                    (stat_card("Over Budget", over_budget_count.to_string()))
                }

                section class=(CARD_STYLE)
                {
                    form method="get" action=(endpoints::ADMIN_CATEGORIES_VIEW)
                        class="flex gap-4 items-center"
                    {
                        input
                            type="search"
                            name="search"
                            placeholder="Search categories..."
                            value=[search]
                            class=(FORM_TEXT_INPUT_STYLE);

                        button
                            type="submit"
                            class="px-4 py-2 bg-emerald-500 hover:bg-emerald-600 text-white rounded text-sm"
                        {
                            "Search"
                        }
                    }
                }

                (create_category_card())

                section class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6"
                {
                    @for summary in spending {
                        (category_card(summary))
                    }

                    @if spending.is_empty() {
                        div class=(format!("{CARD_STYLE} text-center py-12 md:col-span-2 xl:col-span-3"))
                        {
                            p class="text-lg font-medium text-slate-900 dark:text-white mb-2"
                            {
                                "No categories found"
                            }

                            p class="text-slate-600 dark:text-gray-400"
                            {
                                "Try adjusting your search or create a new category."
                            }
                        }
                    }
                }
            }
        }
    );

    base("Category Management", &[], &content)
}

fn create_category_card() -> Markup {
    html!(
        section class=(CARD_STYLE)
        {
            h3 class="text-lg font-semibold mb-4" { "Create New Category" }

            form
                hx-post=(endpoints::ADMIN_CATEGORIES_API)
                hx-target="#alert-container"
                hx-target-error="#alert-container"
                hx-swap="innerHTML"
                class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end"
            {
                div
                {
                    label for="name" class=(FORM_LABEL_STYLE) { "Category Name" }

                    input
                        id="name"
                        type="text"
                        name="name"
                        placeholder="e.g., Food & Dining"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="budget" class=(FORM_LABEL_STYLE) { "Monthly Budget" }

                    input
                        id="budget"
                        type="number"
                        name="budget"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="color" class=(FORM_LABEL_STYLE) { "Category Color" }

                    select id="color" name="color" class=(FORM_SELECT_STYLE)
                    {
                        @for color in COLOR_PALETTE {
                            option value=(color) { (color) }
                        }
                    }
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Create Category" }
            }
        }
    )
}

fn category_card(summary: &CategorySpending) -> Markup {
    let category = &summary.category;
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_ADMIN_CATEGORY, category.id);
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
                    span class="text-slate-600 dark:text-gray-400" { "Usage" }

                    span class="font-semibold text-slate-900 dark:text-white"
                    {
                        (format_currency(summary.spent)) " / " (format_currency(category.budget))
                    }
                }

                (progress_bar(percentage, &category.color))

                p class="text-xs text-slate-600 dark:text-gray-400"
                {
                    (format!("{percentage:.0}")) "% used • " (summary.expense_count) " transactions"
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::{Query, State};
    use scraper::Selector;

    use crate::{
        endpoints,
        store::DemoStore,
        test_utils::{
            assert_form_input, assert_hx_endpoint, assert_status_ok, assert_valid_html,
            parse_html_document,
        },
    };

    use super::{
        AdminCategoriesState, CategorySearchQuery, filter_categories, get_admin_categories_page,
    };

    fn get_test_state() -> AdminCategoriesState {
        AdminCategoriesState {
            store: Arc::new(DemoStore::seeded()),
        }
    }

    #[tokio::test]
    async fn lists_every_category_by_default() {
        let response =
            get_admin_categories_page(State(get_test_state()), Query(CategorySearchQuery::default()))
                .await;

        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let cards = Selector::parse("[data-category-id]").unwrap();
        assert_eq!(html.select(&cards).count(), 8);
        assert!(html.html().contains("$2,900.00"));
    }

    #[tokio::test]
    async fn search_narrows_the_card_grid() {
        let query = CategorySearchQuery {
            search: Some("travel".to_owned()),
        };

        let response = get_admin_categories_page(State(get_test_state()), Query(query)).await;

        let html = parse_html_document(response).await;
        let cards = Selector::parse("[data-category-id]").unwrap();
        assert_eq!(html.select(&cards).count(), 1);
    }

    #[tokio::test]
    async fn create_form_posts_to_the_admin_endpoint() {
        let response =
            get_admin_categories_page(State(get_test_state()), Query(CategorySearchQuery::default()))
                .await;

        let html = parse_html_document(response).await;

        // The first form on the page is the search form; find the create
        // form by its hx-post attribute.
        let forms = Selector::parse("form[hx-post]").unwrap();
        let form = html
            .select(&forms)
            .next()
            .expect("create category form missing");
        assert_hx_endpoint(&form, endpoints::ADMIN_CATEGORIES_API, "hx-post");
        assert_form_input(&form, "name", "text");
        assert_form_input(&form, "budget", "number");
    }

    #[test]
    fn filter_matches_category_names_case_insensitively() {
        let store = DemoStore::seeded();

        let matches = filter_categories(store.category_spending(), Some("FOOD"));

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category.name, "Food & Dining");
    }

    #[test]
    fn blank_filter_matches_everything() {
        let store = DemoStore::seeded();

        assert_eq!(filter_categories(store.category_spending(), Some(" ")).len(), 8);
    }
}
