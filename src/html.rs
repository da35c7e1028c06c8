//! Shared HTML building blocks: the base layout, style constants, and
//! formatting helpers used across pages.

use std::sync::OnceLock;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};
use time::{Date, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::category::Category;

// Link styles
pub const LINK_STYLE: &str = "text-emerald-600 hover:text-emerald-500 \
    dark:text-emerald-500 dark:hover:text-emerald-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-emerald-500 \
    dark:bg-emerald-600 disabled:bg-emerald-700 hover:enabled:bg-emerald-600 \
    hover:enabled:dark:bg-emerald-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "w-full py-2.5 px-5 \
    text-sm font-medium text-slate-900 bg-white rounded border border-slate-200 \
    hover:bg-slate-100 hover:text-emerald-700 focus:z-10 dark:bg-gray-800 \
    dark:text-gray-400 dark:border-gray-600 dark:hover:text-white \
    dark:hover:bg-gray-700";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-slate-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-slate-900 dark:text-white disabled:text-slate-500 bg-slate-50 \
    dark:bg-gray-700 border border-slate-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-emerald-600 focus:border-emerald-600 \
    focus:dark:border-emerald-500 focus:dark:ring-emerald-500";
pub const FORM_SELECT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-slate-900 dark:text-white bg-slate-50 dark:bg-gray-700 border \
    border-slate-300 dark:border-gray-600 focus:ring-emerald-600 \
    focus:border-emerald-600";

// Card styles
pub const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-slate-200 \
    dark:border-gray-700 rounded-lg p-6 shadow-md";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-slate-700 uppercase \
    bg-slate-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Badge style for category labels; the accent color is set inline per category.
pub const CATEGORY_BADGE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold text-white rounded-full";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex-1 px-4 py-6 lg:px-8 text-slate-900 dark:text-white space-y-6";

/// Extra elements to insert into the page `<head>`.
pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(maud::PreEscaped<String>),
}

/// Render `markup` as an HTML response with the given status code.
pub fn render(status_code: StatusCode, markup: Markup) -> Response {
    (
        status_code,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        markup.into_string(),
    )
        .into_response()
}

/// The base page layout: head, scripts, body, and the fixed alert container
/// that simulated actions swap their toasts into.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - SpendTrack" }
                link rel="icon" type="image/png" href="/static/favicon-32x32.png" sizes="32x32";
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" {}
                script src="/static/htmx-ext-response-targets-2.0.4.js" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-slate-50 dark:bg-gray-900"
            {
                (content)

                // Alert container for toast swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

/// A full-page error view, e.g. for 404 responses.
pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-emerald-600 dark:text-emerald-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-slate-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-slate-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-emerald-600
                            hover:bg-emerald-800 focus:ring-4 focus:outline-hidden
                            focus:ring-emerald-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-emerald-900 my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// A colored square with the first letter of the category name, used as a
/// category avatar across the category views. The icon slug from the data
/// set becomes the tooltip.
pub fn category_avatar(category: &Category) -> Markup {
    let letter: String = category.name.graphemes(true).take(1).collect();

    html!(
        div
            class="w-8 h-8 rounded-lg flex items-center justify-center text-white text-xs font-semibold"
            style=(format!("background-color: {}", category.color))
            title=(category.icon)
        {
            (letter)
        }
    )
}

/// A horizontal progress bar filled to `percentage`, rendered in `color`.
///
/// The fill width clamps to 100% so over-budget categories do not overflow
/// the track; callers display the true percentage as text.
pub fn progress_bar(percentage: f64, color: &str) -> Markup {
    let clamped = percentage.clamp(0.0, 100.0);

    html!(
        div
            class="w-full bg-slate-200 dark:bg-gray-700 rounded-full h-2"
            role="progressbar"
            aria-valuenow=(format!("{clamped:.0}"))
            aria-valuemin="0"
            aria-valuemax="100"
        {
            @if clamped > 0.0 {
                div
                    class="h-2 rounded-full transition-all"
                    style=(format!("width: {clamped:.1}%; background-color: {color}"))
                {}
            }
        }
    )
}

/// The Unicode-aware initials for an avatar: the first grapheme of each of
/// the first two words of `name`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.graphemes(true).next())
        .collect()
}

/// Format `number` as a dollar amount with two decimal places, e.g.
/// "$1,234.50". Negative amounts render as "-$1,234.50".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Format a date in long form, e.g. "Monday, January 20, 2025".
///
/// Falls back to the ISO form if the format description cannot be applied.
pub fn format_long_date(date: Date) -> String {
    date.format(format_description!(
        "[weekday repr:long], [month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

/// Format a date as month and year, e.g. "January 2024".
pub fn format_month_year(date: Date) -> String {
    date.format(format_description!("[month repr:long] [year]"))
        .unwrap_or_else(|_| date.to_string())
}


#[cfg(test)]
mod initials_tests {
    use super::initials;

    #[test]
    fn takes_first_letter_of_first_two_words() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("Admin User"), "AU");
    }

    #[test]
    fn single_word_gives_single_initial() {
        assert_eq!(initials("Cher"), "C");
    }

    #[test]
    fn ignores_words_beyond_the_second() {
        assert_eq!(initials("Anna Maria Jones"), "AM");
    }

    #[test]
    fn handles_multi_byte_graphemes() {
        assert_eq!(initials("Åsa Öberg"), "ÅÖ");
    }
}


#[cfg(test)]
mod progress_bar_tests {
    use super::progress_bar;

    #[test]
    fn clamps_width_to_100_percent() {
        let html = progress_bar(150.0, "#FF6B6B").into_string();

        assert!(html.contains("width: 100.0%"));
    }

    #[test]
    fn renders_no_fill_for_zero() {
        let html = progress_bar(0.0, "#FF6B6B").into_string();

        assert!(html.contains("progressbar"));
        assert!(!html.contains("width:"));
    }

    #[test]
    fn uses_the_given_color() {
        let html = progress_bar(50.0, "#4ECDC4").into_string();

        assert!(html.contains("background-color: #4ECDC4"));
    }
}
