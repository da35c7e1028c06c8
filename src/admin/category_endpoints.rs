//! Defines the endpoint for creating a category from the admin panel
//! (simulated).

use axum::{
    Form,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{Error, alert::Alert};

use super::categories_page::COLOR_PALETTE;

/// The form data for creating a category.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    /// The category name.
    pub name: String,
    /// The monthly budget in dollars.
    pub budget: f64,
    /// The accent color as a hex string; unknown colors fall back to the
    /// first palette entry.
    #[serde(default)]
    pub color: Option<String>,
}

/// A route handler for creating a category, responds with a toast.
///
/// A valid form is logged and confirmed; the demo data is left untouched.
pub async fn create_category_endpoint(Form(form): Form<CategoryForm>) -> Response {
    if let Err(error) = validate_category_form(&form) {
        tracing::warn!("rejected category form {form:?}: {error}");
        return error.into_alert_response();
    }

    let color = form
        .color
        .as_deref()
        .filter(|color| COLOR_PALETTE.contains(color))
        .unwrap_or(COLOR_PALETTE[0]);

    tracing::info!(
        "demo category created: {} with budget {} and color {}",
        form.name.trim(),
        form.budget,
        color
    );

    Alert::success(
        "Category created",
        &format!("{} has been successfully created.", form.name.trim()),
    )
    .into_response()
}

fn validate_category_form(form: &CategoryForm) -> Result<(), Error> {
    if form.name.trim().is_empty() {
        return Err(Error::MissingField("name"));
    }

    if !form.budget.is_finite() || form.budget < 0.0 {
        return Err(Error::NegativeBudget(form.budget));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{Form, http::StatusCode};

    use crate::test_utils::{assert_status_ok, parse_html_fragment};

    use super::{CategoryForm, create_category_endpoint};

    fn valid_form() -> CategoryForm {
        CategoryForm {
            name: "Subscriptions".to_owned(),
            budget: 50.0,
            color: Some("#4ECDC4".to_owned()),
        }
    }

    #[tokio::test]
    async fn valid_form_confirms_with_toast() {
        let response = create_category_endpoint(Form(valid_form())).await;

        assert_status_ok(&response);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Subscriptions has been successfully created."));
    }

    #[tokio::test]
    async fn rejects_blank_name() {
        let form = CategoryForm {
            name: "  ".to_owned(),
            ..valid_form()
        };

        let response = create_category_endpoint(Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Validation Error"));
    }

    #[tokio::test]
    async fn rejects_negative_budget() {
        let form = CategoryForm {
            budget: -10.0,
            ..valid_form()
        };

        let response = create_category_endpoint(Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_color_falls_back_to_the_palette() {
        let form = CategoryForm {
            color: Some("#BAD".to_owned()),
            ..valid_form()
        };

        let response = create_category_endpoint(Form(form)).await;

        assert_status_ok(&response);
    }
}
