//! Defines the endpoint for deleting an expense (simulated).

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, alert::Alert, expense::ExpenseId, store::DemoStore};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The demo data the expense ID is checked against.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting an expense, responds with a toast.
///
/// The expense stays in the demo data; the deletion is only confirmed.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    match state.store.expense(expense_id) {
        Ok(expense) => {
            tracing::info!("demo expense deleted: {} ({})", expense.id, expense.description);

            Alert::success("Expense deleted", "The expense has been successfully deleted.")
                .into_response()
        }
        Err(error) => {
            tracing::warn!("Could not delete expense {expense_id}: {error}");
            error.into_alert_response()
        }
    }
}
