//! Defines the endpoint for saving the profile form (simulated).

use axum::{
    Form,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{Error, alert::Alert};

/// The form data for updating the profile.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    /// The user's full name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The user's monthly budget in dollars.
    pub monthly_budget: f64,
}

/// A route handler for saving the profile, responds with a toast.
///
/// The demo data is not changed; a valid form is logged and confirmed.
pub async fn update_profile_endpoint(Form(form): Form<ProfileForm>) -> Response {
    if let Err(error) = validate_profile_form(&form) {
        tracing::warn!("rejected profile form {form:?}: {error}");
        return error.into_alert_response();
    }

    tracing::info!(
        "demo profile updated: {} <{}> with budget {}",
        form.name.trim(),
        form.email.trim(),
        form.monthly_budget
    );

    Alert::success("Profile updated", "Your profile has been successfully updated.")
        .into_response()
}

fn validate_profile_form(form: &ProfileForm) -> Result<(), Error> {
    if form.name.trim().is_empty() {
        return Err(Error::MissingField("name"));
    }

    if form.email.trim().is_empty() {
        return Err(Error::MissingField("email"));
    }

    if !form.monthly_budget.is_finite() || form.monthly_budget < 0.0 {
        return Err(Error::NegativeBudget(form.monthly_budget));
    }

    Ok(())
}
