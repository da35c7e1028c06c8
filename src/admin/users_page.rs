//! Defines the route handler for the admin user management page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_currency, initials,
    },
    navigation::SideBar,
    store::DemoStore,
    user::{Role, User},
};

/// The state needed for the user management page.
#[derive(Debug, Clone)]
pub struct AdminUsersPageState {
    /// The demo data the user list is rendered from.
    pub store: Arc<DemoStore>,
}

impl FromRef<AppState> for AdminUsersPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// The query parameters accepted by the user management page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSearchQuery {
    /// Free-text search over names and email addresses.
    #[serde(default)]
    pub search: Option<String>,
}

/// Select the users matching `search` by name or email, case-insensitively.
fn filter_users<'a>(users: &'a [User], search: Option<&str>) -> Vec<&'a User> {
    let search = search
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    users
        .iter()
        .filter(|user| match &search {
            Some(term) => {
                user.name.to_lowercase().contains(term)
                    || user.email.to_lowercase().contains(term)
            }
            None => true,
        })
        .collect()
}

/// The number of users who joined in the newest sign-up month.
fn new_this_month(users: &[User]) -> usize {
    let Some(latest) = users.iter().map(|user| user.created_at).max() else {
        return 0;
    };

    users
        .iter()
        .filter(|user| {
            user.created_at.year() == latest.year() && user.created_at.month() == latest.month()
        })
        .count()
}

/// Display the user list with search and simulated management actions.
pub async fn get_admin_users_page(
    State(state): State<AdminUsersPageState>,
    Query(query): Query<UserSearchQuery>,
) -> Response {
    let users = filter_users(state.store.users(), query.search.as_deref());

    admin_users_view(&users, query.search.as_deref(), &state.store).into_response()
}

fn admin_users_view(users: &[&User], search: Option<&str>, store: &DemoStore) -> Markup {
    let side_bar = SideBar::admin(endpoints::ADMIN_USERS_VIEW, store.admin_user()).into_html();

    let admin_count = store.users().iter().filter(|user| user.is_admin()).count();
    let regular_count = store.users().len() - admin_count;

    let stat_card = |label: &str, value: String| {
        html!(
            div class=(CARD_STYLE)
            {
                p class="text-sm font-medium text-slate-600 dark:text-gray-400" { (label) }

                p class="text-2xl font-bold text-slate-900 dark:text-white mt-1" { (value) }
            }
        )
    };

    let content = html!(
        div class="lg:flex"
        {
            (side_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                header
                {
                    h1 class="text-3xl font-bold" { "User Management" }

                    p class="text-slate-600 dark:text-gray-400 mt-1"
                    {
                        "Manage user accounts and permissions"
                    }
                }

                section class="grid grid-cols-1 md:grid-cols-4 gap-6"
                {
                    (stat_card("Total Users", store.users().len().to_string()))
                    (stat_card("Admins", admin_count.to_string()))
                    (stat_card("Regular Users", regular_count.to_string()))
                    (stat_card("New This Month", new_this_month(store.users()).to_string()))
                }

                section class=(CARD_STYLE)
                {
                    form method="get" action=(endpoints::ADMIN_USERS_VIEW)
                        class="flex flex-col md:flex-row gap-4 items-center"
                    {
                        input
                            type="search"
                            name="search"
                            placeholder="Search users by name or email..."
                            value=[search]
                            class=(FORM_TEXT_INPUT_STYLE);

                        button
                            type="submit"
                            class="px-4 py-2 bg-emerald-500 hover:bg-emerald-600 text-white rounded text-sm"
                        {
                            "Search"
                        }

                        span class="text-sm text-slate-600 dark:text-gray-400 whitespace-nowrap"
                        {
                            (users.len()) " users found"
                        }
                    }
                }

                (create_user_card())

                section class="space-y-4"
                {
                    @for user in users {
                        (user_card(user))
                    }

                    @if users.is_empty() {
                        div class=(format!("{CARD_STYLE} text-center py-12"))
                        {
                            p class="text-lg font-medium text-slate-900 dark:text-white mb-2"
                            {
                                "No users found"
                            }

                            p class="text-slate-600 dark:text-gray-400"
                            {
                                "Try adjusting your search criteria or add a new user."
                            }
                        }
                    }
                }
            }
        }
    );

    base("User Management", &[], &content)
}

fn create_user_card() -> Markup {
    html!(
        section class=(CARD_STYLE)
        {
            h3 class="text-lg font-semibold mb-4" { "Add User" }

            form
                hx-post=(endpoints::ADMIN_USERS_API)
                hx-target="#alert-container"
                hx-target-error="#alert-container"
                hx-swap="innerHTML"
                class="grid grid-cols-1 md:grid-cols-3 gap-4 items-end"
            {
                div
                {
                    label for="name" class=(FORM_LABEL_STYLE) { "Full Name" }

                    input
                        id="name"
                        type="text"
                        name="name"
                        placeholder="e.g., Jane Doe"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="email" class=(FORM_LABEL_STYLE) { "Email Address" }

                    input
                        id="email"
                        type="email"
                        name="email"
                        placeholder="jane@example.com"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add User" }
            }
        }
    )
}

fn user_card(user: &User) -> Markup {
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_USER, user.id);
    let toggle_role_url = endpoints::format_endpoint(endpoints::TOGGLE_USER_ROLE, user.id);
    let confirm_message = format!("Are you sure you want to delete '{}'?", user.name);

    let role_badge_style = if user.role == Role::Admin {
        "inline-flex px-2.5 py-0.5 text-xs font-semibold text-emerald-700 \
        bg-emerald-100 rounded-full dark:bg-emerald-900 dark:text-emerald-300"
    } else {
        "inline-flex px-2.5 py-0.5 text-xs font-semibold text-slate-700 \
        bg-slate-100 rounded-full dark:bg-gray-700 dark:text-gray-300"
    };

    html!(
        div class=(CARD_STYLE) data-user-id=(user.id)
        {
            div class="flex items-center justify-between flex-wrap gap-4"
            {
                div class="flex items-center space-x-4"
                {
                    div
                        class="w-12 h-12 bg-emerald-500 rounded-full flex items-center
                        justify-center text-white font-semibold"
                    {
                        (initials(&user.name))
                    }

                    div
                    {
                        div class="flex items-center gap-2 mb-1"
                        {
                            h3 class="font-semibold text-slate-900 dark:text-white"
                            {
                                (user.name)
                            }

                            span class=(role_badge_style) { (user.role) }
                        }

                        p class="text-sm text-slate-600 dark:text-gray-400" { (user.email) }

                        p class="text-sm text-slate-600 dark:text-gray-400"
                        {
                            "Joined " (user.created_at)
                        }
                    }
                }

                div class="flex items-center gap-6"
                {
                    div class="text-right"
                    {
                        p class="font-semibold text-slate-900 dark:text-white"
                        {
                            (format_currency(user.total_expenses))
                        }

                        p class="text-sm text-slate-600 dark:text-gray-400" { "Total spent" }
                    }

                    div class="flex gap-4"
                    {
                        button
                            class=(LINK_STYLE)
                            hx-put=(toggle_role_url)
                            hx-target="#alert-container"
                            hx-target-error="#alert-container"
                            hx-swap="innerHTML"
                        {
                            "Toggle Role"
                        }

                        button
                            class=(BUTTON_DELETE_STYLE)
                            hx-delete=(delete_url)
                            hx-confirm=(confirm_message)
                            hx-target="#alert-container"
                            hx-target-error="#alert-container"
                            hx-swap="innerHTML"
                        {
                            "Delete"
                        }
                    }
                }
            }
        }
    )
}
