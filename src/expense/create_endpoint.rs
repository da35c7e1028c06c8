//! Defines the endpoint for adding a new expense (simulated).

use std::sync::Arc;

use axum::{
    Form,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use time::Date;

use crate::{AppState, Error, alert::Alert, category::CategoryId, store::DemoStore};

/// The state needed to validate a new expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The demo data the category is validated against.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The form data for adding an expense.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The amount spent in dollars.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category_id: CategoryId,
    /// A short description of the expense.
    pub description: String,
    /// The date the expense occurred.
    pub date: Date,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A route handler for adding an expense.
///
/// The demo has no durable store: a valid form is logged and confirmed with
/// a toast, and the demo data is left untouched.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let category = match validate_expense_form(&form, &state.store) {
        Ok(category_name) => category_name,
        Err(error) => {
            tracing::warn!("rejected expense form {form:?}: {error}");
            return error.into_alert_response();
        }
    };

    // Blank notes are treated as absent.
    let notes = form
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty());

    tracing::info!(
        "demo expense created: {} ({}) for {} on {}, notes: {:?}",
        form.description.trim(),
        category,
        form.amount,
        form.date,
        notes
    );

    Alert::success("Success!", "Expense added successfully.").into_response()
}

/// Check the form fields and return the matched category name.
///
/// # Errors
/// Returns [Error::NonPositiveAmount] for a zero, negative, or non-finite
/// amount, [Error::MissingField] for a blank description, and
/// [Error::UnknownCategory] when the category does not exist.
fn validate_expense_form(form: &ExpenseForm, store: &DemoStore) -> Result<String, Error> {
    if !form.amount.is_finite() || form.amount <= 0.0 {
        return Err(Error::NonPositiveAmount(form.amount));
    }

    if form.description.trim().is_empty() {
        return Err(Error::MissingField("description"));
    }

    let category = store.category(form.category_id)?;

    Ok(category.name.clone())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Form,
        extract::State,
        http::StatusCode,
    };
    use time::macros::date;

    use crate::{
        store::DemoStore,
        test_utils::{assert_status_ok, parse_html_fragment},
    };

    use super::{CreateExpenseState, ExpenseForm, create_expense_endpoint};

    fn get_test_state() -> CreateExpenseState {
        CreateExpenseState {
            store: Arc::new(DemoStore::seeded()),
        }
    }

    fn valid_form() -> ExpenseForm {
        ExpenseForm {
            amount: 12.50,
            category_id: 1,
            description: "Coffee with friends".to_owned(),
            date: date!(2025 - 01 - 20),
            notes: None,
        }
    }

    #[tokio::test]
    async fn valid_form_confirms_with_toast() {
        let response = create_expense_endpoint(State(get_test_state()), Form(valid_form())).await;

        assert_status_ok(&response);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Expense added successfully."));
    }

    #[tokio::test]
    async fn nothing_is_persisted() {
        let state = get_test_state();

        create_expense_endpoint(State(state.clone()), Form(valid_form())).await;

        assert_eq!(state.store.expenses().len(), 5);
    }

    #[tokio::test]
    async fn rejects_non_positive_amount() {
        let form = ExpenseForm {
            amount: 0.0,
            ..valid_form()
        };

        let response = create_expense_endpoint(State(get_test_state()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Validation Error"));
    }

    #[tokio::test]
    async fn rejects_blank_description() {
        let form = ExpenseForm {
            description: "   ".to_owned(),
            ..valid_form()
        };

        let response = create_expense_endpoint(State(get_test_state()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("description must not be empty"));
    }

    #[tokio::test]
    async fn rejects_unknown_category() {
        let form = ExpenseForm {
            category_id: 99,
            ..valid_form()
        };

        let response = create_expense_endpoint(State(get_test_state()), Form(form)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Category not found"));
    }
}
