//! Defines the endpoints for managing users from the admin panel
//! (simulated).

use std::sync::Arc;

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{AppState, Error, alert::Alert, store::DemoStore, user::UserId};

/// The state needed for the simulated user management endpoints.
#[derive(Debug, Clone)]
pub struct AdminUserState {
    /// The demo data user IDs are checked against.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for AdminUserState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The form data for creating a user.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    /// The new user's full name.
    pub name: String,
    /// The new user's email address.
    pub email: String,
}

/// A route handler for creating a user, responds with a toast.
pub async fn create_user_endpoint(Form(form): Form<UserForm>) -> Response {
    if form.name.trim().is_empty() {
        return Error::MissingField("name").into_alert_response();
    }

    if form.email.trim().is_empty() {
        return Error::MissingField("email").into_alert_response();
    }

    tracing::info!("demo user created: {} <{}>", form.name.trim(), form.email.trim());

    Alert::success(
        "User created",
        &format!("{} has been successfully created.", form.name.trim()),
    )
    .into_response()
}

/// A route handler for deleting a user, responds with a toast.
///
/// The user stays in the demo data; the deletion is only confirmed.
pub async fn delete_user_endpoint(
    State(state): State<AdminUserState>,
    Path(user_id): Path<UserId>,
) -> Response {
    match state.store.user(user_id) {
        Ok(user) => {
            tracing::info!("demo user deleted: {} ({})", user.id, user.name);

            Alert::success("User deleted", "The user has been successfully deleted.")
                .into_response()
        }
        Err(error) => {
            tracing::warn!("Could not delete user {user_id}: {error}");
            error.into_alert_response()
        }
    }
}

/// A route handler for toggling a user's role, responds with a toast.
pub async fn toggle_user_role_endpoint(
    State(state): State<AdminUserState>,
    Path(user_id): Path<UserId>,
) -> Response {
    match state.store.user(user_id) {
        Ok(user) => {
            tracing::info!("demo role toggled for user {} ({})", user.id, user.name);

            Alert::success("Role updated", "User role has been successfully updated.")
                .into_response()
        }
        Err(error) => {
            tracing::warn!("Could not toggle role for user {user_id}: {error}");
            error.into_alert_response()
        }
    }
}
