//! Defines the endpoint for deleting a category (simulated).

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, alert::Alert, category::CategoryId, store::DemoStore};

/// The state needed to delete a category.
#[derive(Debug, Clone)]
pub struct DeleteCategoryState {
    /// The demo data the category ID is checked against.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for DeleteCategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a category, responds with a toast.
///
/// The category stays in the demo data; the deletion is only confirmed.
pub async fn delete_category_endpoint(
    State(state): State<DeleteCategoryState>,
    Path(category_id): Path<CategoryId>,
) -> Response {
    match state.store.category(category_id) {
        Ok(category) => {
            tracing::info!("demo category deleted: {} ({})", category.id, category.name);

            Alert::success("Category deleted", "The category has been successfully deleted.")
                .into_response()
        }
        Err(error) => {
            tracing::warn!("Could not delete category {category_id}: {error}");
            error.into_alert_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };

    use crate::{
        store::DemoStore,
        test_utils::{assert_status_ok, parse_html_fragment},
    };

    use super::{DeleteCategoryState, delete_category_endpoint};

    fn get_test_state() -> DeleteCategoryState {
        DeleteCategoryState {
            store: Arc::new(DemoStore::seeded()),
        }
    }

    #[tokio::test]
    async fn existing_category_confirms_with_toast() {
        let response = delete_category_endpoint(State(get_test_state()), Path(1)).await;

        assert_status_ok(&response);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Category deleted"));
    }

    #[tokio::test]
    async fn category_survives_the_simulated_delete() {
        let state = get_test_state();

        delete_category_endpoint(State(state.clone()), Path(1)).await;

        assert!(state.store.category(1).is_ok());
    }

    #[tokio::test]
    async fn missing_category_responds_with_error_toast() {
        let response = delete_category_endpoint(State(get_test_state()), Path(99)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Category not found"));
    }
}
