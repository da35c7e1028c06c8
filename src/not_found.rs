//! The fallback handler for routes that do not exist.

use axum::{
    http::StatusCode,
    response::Response,
};
use axum_htmx::HxRequest;

use crate::{
    alert::Alert,
    html::{error_view, render},
};

/// The fallback route handler.
///
/// Browser navigation gets the full 404 page; htmx requests get an error
/// toast so a missing endpoint does not replace the alert container with a
/// whole document.
pub async fn get_404_not_found(HxRequest(is_htmx): HxRequest) -> Response {
    if is_htmx {
        return render(
            StatusCode::NOT_FOUND,
            Alert::error(
                "Not found",
                "The requested action does not exist. Try refreshing the page.",
            )
            .render(),
        );
    }

    get_404_not_found_response()
}

/// Get the 404 page as a response.
pub fn get_404_not_found_response() -> Response {
    render(
        StatusCode::NOT_FOUND,
        error_view(
            "Page Not Found",
            "404",
            "Sorry, we can't find that page.",
            "Check the address, or head back to the dashboard.",
        ),
    )
}
