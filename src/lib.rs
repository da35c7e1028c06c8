//! SpendTrack is a demo web app for tracking personal expenses, with a
//! separate admin panel.
//!
//! The app serves HTML pages directly from an immutable, in-memory demo data
//! set. There is no database and no authentication: every mutating action
//! (creating an expense, saving settings, exporting data, managing users) is
//! validated, logged, and confirmed with a toast notification without
//! changing any stored data.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{http::StatusCode, response::Response};
use axum_server::Handle;
use tokio::signal;

mod admin;
mod alert;
mod app_state;
mod category;
mod dashboard;
mod endpoints;
mod expense;
mod html;
mod navigation;
mod not_found;
mod profile;
mod routing;
mod settings;
mod store;
#[cfg(test)]
mod test_utils;
mod user;

pub use app_state::AppState;
pub use routing::build_router;
pub use store::DemoStore;

use crate::{
    alert::Alert, category::CategoryId, expense::ExpenseId, html::render,
    not_found::get_404_not_found_response, user::UserId,
};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the
    /// parameters (e.g., ID) are correct.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The expense ID did not match any expense in the demo data.
    #[error("no expense with the ID {0}")]
    UnknownExpense(ExpenseId),

    /// The category ID did not match any category in the demo data.
    #[error("no category with the ID {0}")]
    UnknownCategory(CategoryId),

    /// The user ID did not match any user in the demo data.
    #[error("no user with the ID {0}")]
    UnknownUser(UserId),

    /// A required form field was submitted empty.
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// An expense amount must be greater than zero.
    #[error("{0} is not a valid expense amount")]
    NonPositiveAmount(f64),

    /// A budget cannot be negative.
    #[error("{0} is not a valid budget")]
    NegativeBudget(f64),
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound
            | Error::UnknownExpense(_)
            | Error::UnknownCategory(_)
            | Error::UnknownUser(_) => get_404_not_found_response(),
            // Validation errors are meant to be converted with
            // `into_alert_response` by the endpoints that produce them.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    html::error_view(
                        "Something Went Wrong",
                        "500",
                        "Sorry, something went wrong.",
                        "Try again later or check the server logs.",
                    ),
                )
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::UnknownExpense(expense_id) => render(
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Expense not found",
                    &format!("Could not find an expense with the ID {expense_id}."),
                )
                .render(),
            ),
            Error::UnknownCategory(category_id) => render(
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Category not found",
                    &format!("Could not find a category with the ID {category_id}."),
                )
                .render(),
            ),
            Error::UnknownUser(user_id) => render(
                StatusCode::NOT_FOUND,
                Alert::error(
                    "User not found",
                    &format!("Could not find a user with the ID {user_id}."),
                )
                .render(),
            ),
            Error::MissingField(field) => render(
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Validation Error",
                    &format!("Please fill in all required fields. {field} must not be empty."),
                )
                .render(),
            ),
            Error::NonPositiveAmount(amount) => render(
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Validation Error",
                    &format!("The amount must be greater than zero, got {amount}."),
                )
                .render(),
            ),
            Error::NegativeBudget(budget) => render(
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Validation Error",
                    &format!("The budget must not be negative, got {budget}."),
                )
                .render(),
            ),
            _ => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .render(),
            ),
        }
    }
}
