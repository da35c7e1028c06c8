//! Defines the route handler for the page for adding an expense.

use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_SELECT_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base,
    },
    navigation::SideBar,
    store::DemoStore,
};

/// The state needed for the add-expense page.
#[derive(Debug, Clone)]
pub struct CreateExpensePageState {
    /// The demo data providing the category options and the default date.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for CreateExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Render the page for adding an expense.
pub async fn get_create_expense_page(State(state): State<CreateExpensePageState>) -> Response {
    create_expense_view(&state.store).into_response()
}

fn create_expense_view(store: &DemoStore) -> Markup {
    let side_bar = SideBar::user(endpoints::NEW_EXPENSE_VIEW, store.current_user()).into_html();
    let default_date = store.anchor_date();

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
                        h1 class="text-3xl font-bold" { "Add New Expense" }

                        p class="text-slate-600 dark:text-gray-400 mt-1"
                        {
                            "Track your spending with detailed information"
                        }
                    }

                    a href=(endpoints::DASHBOARD_VIEW) class=(LINK_STYLE) { "Back" }
                }

                section class=(CARD_STYLE)
                {
                    form
                        hx-post=(endpoints::EXPENSES_API)
                        hx-target="#alert-container"
                        hx-target-error="#alert-container"
                        hx-swap="innerHTML"
                        class="max-w-2xl space-y-6"
                    {
                        div
                        {
                            label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                            input
                                id="amount"
                                type="number"
                                name="amount"
                                step="0.01"
                                min="0.01"
                                placeholder="0.00"
                                required
                                autofocus
                                class=(FORM_TEXT_INPUT_STYLE);
                        }

                        div
                        {
                            label for="category_id" class=(FORM_LABEL_STYLE) { "Category" }

                            select
                                id="category_id"
                                name="category_id"
                                required
                                class=(FORM_SELECT_STYLE)
                            {
                                @for category in store.categories() {
                                    option value=(category.id) { (category.name) }
                                }
                            }
                        }

                        div
                        {
                            label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                            input
                                id="description"
                                type="text"
                                name="description"
                                placeholder="e.g., Lunch at restaurant"
                                required
                                class=(FORM_TEXT_INPUT_STYLE);
                        }

                        div
                        {
                            label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                            input
                                id="date"
                                type="date"
                                name="date"
                                value=(default_date)
                                required
                                class=(FORM_TEXT_INPUT_STYLE);
                        }

                        div
                        {
                            label for="notes" class=(FORM_LABEL_STYLE) { "Notes (Optional)" }

                            textarea
                                id="notes"
                                name="notes"
                                placeholder="Add any additional notes..."
                                class=(format!("{FORM_TEXT_INPUT_STYLE} min-h-[100px]"))
                            {}
                        }

                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
                    }
                }
            }
        }
    );

    base("Add Expense", &[], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::State;

    use crate::{
        endpoints,
        store::DemoStore,
        test_utils::{
            assert_form_input, assert_form_submit_button, assert_hx_endpoint, assert_status_ok,
            assert_valid_html, must_get_form, parse_html_document,
        },
    };

    use super::{CreateExpensePageState, get_create_expense_page};

    #[tokio::test]
    async fn render_page() {
        let state = CreateExpensePageState {
            store: Arc::new(DemoStore::seeded()),
        };

        let response = get_create_expense_page(State(state)).await;

        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::EXPENSES_API, "hx-post");
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "description", "text");
        assert_form_input(&form, "date", "date");
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn form_lists_every_category() {
        let state = CreateExpensePageState {
            store: Arc::new(DemoStore::seeded()),
        };

        let response = get_create_expense_page(State(state)).await;

        let html = parse_html_document(response).await;
        let options = scraper::Selector::parse("select[name='category_id'] option").unwrap();
        assert_eq!(html.select(&options).count(), 8);
    }

    #[tokio::test]
    async fn date_defaults_to_the_demo_anchor_date() {
        let state = CreateExpensePageState {
            store: Arc::new(DemoStore::seeded()),
        };

        let response = get_create_expense_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert!(html.html().contains("2025-01-20"));
    }
}
