//! Toast alerts for confirming simulated actions and reporting errors.
//!
//! Every mutating endpoint in the app responds with one of these fragments.
//! Forms and buttons target `#alert-container` (see [crate::html::base]),
//! so the fragment swaps into the fixed container at the bottom of the page
//! and `static/app.js` reveals and auto-dismisses it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::html::render;

/// A toast message confirming or rejecting an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An action completed, with extra detail text.
    Success {
        /// The headline, e.g. "Expense deleted".
        message: String,
        /// Supporting detail shown under the headline.
        details: String,
    },
    /// An action failed.
    Error {
        /// The headline, e.g. "Validation Error".
        message: String,
        /// Supporting detail shown under the headline.
        details: String,
    },
}

impl Alert {
    /// Create a success alert with detail text.
    pub fn success(message: &str, details: &str) -> Self {
        Alert::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert with detail text.
    pub fn error(message: &str, details: &str) -> Self {
        Alert::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as a toast fragment.
    pub fn render(&self) -> Markup {
        let (message, details, accent_style) = match self {
            Alert::Success { message, details } => (
                message.as_str(),
                details.as_str(),
                "text-emerald-800 border-emerald-300 bg-emerald-50 \
                dark:bg-gray-800 dark:text-emerald-400 dark:border-emerald-800",
            ),
            Alert::Error { message, details } => (
                message.as_str(),
                details.as_str(),
                "text-red-800 border-red-300 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
            ),
        };

        html!(
            div
                class=(format!("flex items-start justify-between gap-3 p-4 mb-2 border rounded-lg shadow-lg {accent_style}"))
                role="alert"
                data-alert="true"
            {
                div
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p class="text-sm mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    class="font-semibold text-sm"
                    data-dismiss-alert="true"
                    aria-label="Dismiss"
                {
                    "✕"
                }
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        render(StatusCode::OK, self.render())
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::test_utils::{assert_content_type, parse_html_fragment};

    use super::Alert;

    #[test]
    fn success_alert_renders_message_and_details() {
        let alert = Alert::success("Expense added", "The demo data was not changed.");

        let html = alert.render().into_string();

        assert!(html.contains("Expense added"));
        assert!(html.contains("The demo data was not changed."));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn blank_details_omit_the_details_paragraph() {
        let alert = Alert::success("Settings saved", "");

        let html = alert.render().into_string();

        assert!(html.contains("Settings saved"));
        assert!(!html.contains("text-sm mt-1"));
    }

    #[test]
    fn error_alert_uses_red_styling() {
        let alert = Alert::error("Validation Error", "Please fill in all required fields");

        let html = alert.render().into_string();

        assert!(html.contains("text-red-800"));
    }

    #[tokio::test]
    async fn alert_responds_with_html() {
        let response = Alert::success("Expense deleted", "").into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");

        let html = parse_html_fragment(response).await;
        assert!(html.html().contains("Expense deleted"));
    }
}
