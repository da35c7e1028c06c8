//! Defines the route handler for the page showing a single expense.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    category::Category,
    expense::{Expense, ExpenseId},
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, CATEGORY_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE,
        base, format_currency, format_long_date,
    },
    navigation::SideBar,
    store::DemoStore,
};

/// The state needed for the expense detail page.
#[derive(Debug, Clone)]
pub struct ExpenseDetailState {
    /// The demo data to look the expense up in.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for ExpenseDetailState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// Display a single expense with its category, date, and notes.
///
/// Unknown IDs render the 404 page.
pub async fn get_expense_detail_page(
    State(state): State<ExpenseDetailState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Response, Error> {
    let expense = state.store.expense(expense_id)?;
    let category = state.store.category(expense.category_id)?;

    Ok(expense_detail_view(expense, category, &state.store).into_response())
}

fn expense_detail_view(expense: &Expense, category: &Category, store: &DemoStore) -> Markup {
    let side_bar = SideBar::user(endpoints::EXPENSES_VIEW, store.current_user()).into_html();
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_EXPENSE, expense.id);
    let confirm_message = format!(
        "Are you sure you want to delete '{}'?",
        expense.description
    );

    let detail_item = |label: &str, value: Markup| {
        html!(
            div class="flex items-start justify-between p-4 bg-slate-50 dark:bg-gray-700 rounded-lg"
            {
                p class="text-sm font-medium text-slate-600 dark:text-gray-400" { (label) }

                div class="text-right font-semibold text-slate-900 dark:text-white" { (value) }
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
                        h1 class="text-3xl font-bold" { "Expense Details" }

                        p class="text-slate-600 dark:text-gray-400 mt-1"
                        {
                            "View and manage expense information"
                        }
                    }

                    a href=(endpoints::EXPENSES_VIEW) class=(LINK_STYLE)
                    {
                        "Back to Expenses"
                    }
                }

                section class=(CARD_STYLE)
                {
                    div class="text-center mb-8 p-6 bg-emerald-50 dark:bg-gray-700 rounded-xl"
                    {
                        h2 class="text-2xl font-bold text-slate-900 dark:text-white mb-2"
                        {
                            (expense.description)
                        }

                        p class="text-4xl font-bold text-emerald-600 dark:text-emerald-400"
                        {
                            (format_currency(expense.amount))
                        }
                    }

                    div class="space-y-4"
                    {
                        (detail_item("Category", html!(
                            span
                                class=(CATEGORY_BADGE_STYLE)
                                style=(format!("background-color: {}", category.color))
                            {
                                (expense.category_name)
                            }

                            span class="text-sm text-slate-600 dark:text-gray-400 ml-2"
                            {
                                "Budget: " (format_currency(category.budget))
                            }
                        )))

                        (detail_item("Date", html!( (format_long_date(expense.date)) )))

                        (detail_item("Amount", html!( (format_currency(expense.amount)) )))

                        @if let Some(notes) = &expense.notes {
                            (detail_item("Notes", html!( (notes) )))
                        }
                    }

                    div class="mt-8 p-4 bg-slate-50 dark:bg-gray-700 rounded-lg"
                    {
                        h3 class="font-semibold text-slate-900 dark:text-white mb-2"
                        {
                            "Additional Information"
                        }

                        div class="grid grid-cols-2 gap-4 text-sm"
                        {
                            p
                            {
                                span class="text-slate-600 dark:text-gray-400" { "Created: " }
                                span class="font-medium" { (expense.date) }
                            }

                            p
                            {
                                span class="text-slate-600 dark:text-gray-400" { "ID: " }
                                span class="font-mono" { (expense.id) }
                            }
                        }
                    }

                    div class="flex gap-4 mt-8 pt-6 border-t border-slate-200 dark:border-gray-700"
                    {
                        button
                            class=(BUTTON_DELETE_STYLE)
                            hx-delete=(delete_url)
                            hx-confirm=(confirm_message)
                            hx-target="#alert-container"
                            hx-target-error="#alert-container"
                            hx-swap="innerHTML"
                        {
                            "Delete Expense"
                        }
                    }
                }
            }
        }
    );

    base("Expense Details", &[], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };

    use crate::{
        store::DemoStore,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
    };

    use super::{ExpenseDetailState, get_expense_detail_page};

    fn get_test_state() -> ExpenseDetailState {
        ExpenseDetailState {
            store: Arc::new(DemoStore::seeded()),
        }
    }

    #[tokio::test]
    async fn renders_expense_fields() {
        let response = get_expense_detail_page(State(get_test_state()), Path(1))
            .await
            .unwrap();

        assert_status_ok(&response);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let text = html.html();
        assert!(text.contains("Lunch at Italian restaurant"));
        assert!(text.contains("$45.50"));
        assert!(text.contains("Food &amp; Dining"));
        assert!(text.contains("Monday, January 20, 2025"));
        assert!(text.contains("Business lunch with client"));
    }

    #[test]
    fn omits_notes_row_when_absent() {
        let store = DemoStore::seeded();
        let mut expense = store.expense(1).unwrap().clone();
        expense.notes = None;
        let category = store.category(expense.category_id).unwrap();

        let html = super::expense_detail_view(&expense, category, &store).into_string();

        assert!(!html.contains("Notes"));
    }

    #[tokio::test]
    async fn unknown_expense_renders_404_page() {
        let result = get_expense_detail_page(State(get_test_state()), Path(99)).await;

        let response = result.unwrap_err().into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = parse_html_document(response).await;
        assert!(html.html().contains("404"));
    }
}
