//! Defines the route handler for the page that lists, filters, and sorts
//! expenses.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, endpoints,
    expense::{
        Expense,
        query::{SortField, SortOrder, filter_expenses, sort_expenses},
    },
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, CATEGORY_BADGE_STYLE, FORM_SELECT_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    navigation::SideBar,
    store::DemoStore,
};

/// The state needed for the expense list page.
#[derive(Debug, Clone)]
pub struct ExpenseListState {
    /// The demo data to list expenses from.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for ExpenseListState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The raw query parameters accepted by the expense list page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseListQuery {
    /// Free-text search over descriptions and category names.
    #[serde(default)]
    pub search: Option<String>,
    /// Category filter; an empty string means all categories.
    #[serde(default)]
    pub category: Option<String>,
    /// The column to sort by.
    #[serde(default)]
    pub sort: Option<SortField>,
    /// The direction to sort in.
    #[serde(default)]
    pub order: Option<SortOrder>,
}

/// Validated list options after normalization.
///
/// Defaults are applied here: empty search terms are dropped, unparseable
/// category filters fall back to all categories, and the sort defaults to
/// date descending.
struct ListOptions {
    search: Option<String>,
    category: Option<i64>,
    sort: SortField,
    order: SortOrder,
}

fn normalize_query(query: ExpenseListQuery) -> ListOptions {
    let search = query
        .search
        .map(|term| term.trim().to_owned())
        .filter(|term| !term.is_empty());
    let category = query
        .category
        .and_then(|raw| raw.trim().parse::<i64>().ok());

    ListOptions {
        search,
        category,
        sort: query.sort.unwrap_or(SortField::Date),
        order: query.order.unwrap_or(SortOrder::Descending),
    }
}

/// Display the expense list with the active search, filter, and sort
/// options applied.
pub async fn get_expenses_page(
    State(state): State<ExpenseListState>,
    Query(query): Query<ExpenseListQuery>,
) -> Response {
    let options = normalize_query(query);

    let mut expenses = filter_expenses(
        state.store.expenses(),
        options.search.as_deref(),
        options.category,
    );
    sort_expenses(&mut expenses, options.sort, options.order);

    expenses_view(&expenses, &options, &state.store).into_response()
}

/// Build the URL for a sortable column header.
///
/// Clicking the active column toggles the direction; clicking a different
/// column sorts by it descending, keeping the search and category filters.
fn sort_url(field: SortField, options: &ListOptions) -> String {
    #[derive(Serialize)]
    struct SortUrlQuery<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        category: Option<i64>,
        sort: SortField,
        order: SortOrder,
    }

    let order = if options.sort == field {
        options.order.toggled()
    } else {
        SortOrder::Descending
    };

    let query_string = serde_urlencoded::to_string(SortUrlQuery {
        search: options.search.as_deref(),
        category: options.category,
        sort: field,
        order,
    })
    .unwrap_or_default();

    format!("{}?{}", endpoints::EXPENSES_VIEW, query_string)
}

fn expenses_view(expenses: &[&Expense], options: &ListOptions, store: &DemoStore) -> Markup {
    let side_bar = SideBar::user(endpoints::EXPENSES_VIEW, store.current_user()).into_html();
    let total: f64 = expenses.iter().map(|expense| expense.amount).sum();

    let sortable_header = |field: SortField, title: &str| {
        html!(
            th scope="col" class=(TABLE_CELL_STYLE)
            {
                a href=(sort_url(field, options)) class="inline-flex items-center gap-1"
                {
                    (title)
                    span aria-hidden="true" { "⇅" }
                }
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
                        h1 class="text-3xl font-bold" { "Expense List" }

                        p class="text-slate-600 dark:text-gray-400 mt-1"
                        {
                            "Manage and track your expenses"
                        }
                    }

                    a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE)
                    {
                        "Add Expense"
                    }
                }

                (filter_card(options, store, expenses.len(), total))

                section class=(CARD_STYLE)
                {
                    table class="w-full text-sm text-left text-slate-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                (sortable_header(SortField::Description, "Description"))
                                th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                (sortable_header(SortField::Amount, "Amount"))
                                (sortable_header(SortField::Date, "Date"))
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for expense in expenses {
                                (table_row(expense, store))
                            }

                            @if expenses.is_empty() {
                                tr
                                {
                                    td
                                        colspan="5"
                                        class="px-6 py-12 text-center text-slate-500 dark:text-gray-400"
                                    {
                                        p class="text-lg font-medium text-slate-900 dark:text-white mb-2"
                                        {
                                            "No expenses found"
                                        }

                                        p class="mb-4"
                                        {
                                            "Try adjusting your search or filter criteria, or add a new expense."
                                        }

                                        a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE)
                                        {
                                            "Add First Expense"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Expenses", &[], &content)
}

fn filter_card(options: &ListOptions, store: &DemoStore, match_count: usize, total: f64) -> Markup {
    html!(
        section class=(CARD_STYLE)
        {
            form method="get" action=(endpoints::EXPENSES_VIEW)
                class="grid grid-cols-1 md:grid-cols-3 gap-4 items-center"
            {
                input
                    type="search"
                    name="search"
                    placeholder="Search expenses..."
                    value=[options.search.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);

                select name="category" class=(FORM_SELECT_STYLE)
                {
                    option value="" { "All Categories" }

                    @for category in store.categories() {
                        option
                            value=(category.id)
                            selected[options.category == Some(category.id)]
                        {
                            (category.name)
                        }
                    }
                }

                div class="flex items-center gap-3"
                {
                    button
                        type="submit"
                        class="px-4 py-2 bg-emerald-500 hover:bg-emerald-600 text-white rounded text-sm"
                    {
                        "Filter"
                    }

                    span class="text-sm text-slate-600 dark:text-gray-400"
                    {
                        (match_count) " expenses • " (format_currency(total))
                    }
                }
            }
        }
    )
}

fn table_row(expense: &Expense, store: &DemoStore) -> Markup {
    let detail_url = endpoints::format_endpoint(endpoints::EXPENSE_DETAIL_VIEW, expense.id);
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_EXPENSE, expense.id);
    let confirm_message = format!(
        "Are you sure you want to delete '{}'?",
        expense.description
    );
    // Fall back to gray if an expense references a category missing from the
    // seed data.
    let badge_color = store
        .category(expense.category_id)
        .map(|category| category.color.as_str())
        .unwrap_or("#666666");

    html!(
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id)
        {
            td class=(TABLE_CELL_STYLE)
            {
                p class="font-medium text-slate-900 dark:text-white" { (expense.description) }

                @if let Some(notes) = &expense.notes {
                    p class="text-sm text-slate-500 dark:text-gray-400 mt-1" { (notes) }
                }
            }

            td class=(TABLE_CELL_STYLE)
            {
                span
                    class=(CATEGORY_BADGE_STYLE)
                    style=(format!("background-color: {badge_color}"))
                {
                    (expense.category_name)
                }
            }

            td class=(TABLE_CELL_STYLE)
            {
                span class="font-semibold text-slate-900 dark:text-white"
                {
                    (format_currency(expense.amount))
                }
            }

            td class=(TABLE_CELL_STYLE) { (expense.date) }

            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4"
                {
                    a href=(detail_url) class=(LINK_STYLE) { "View" }

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
            }
        }
    )
}
