//! This file defines the templates and convenience functions for creating
//! the sidebar navigation.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::initials,
    user::User,
};

/// Template for a link in the sidebar.
///
/// It will change appearance if `is_current` is set to `true`. Only one link
/// should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "flex items-center w-full px-3 py-2.5 rounded-lg text-sm font-semibold \
            bg-emerald-500 text-white shadow-md"
        } else {
            "flex items-center w-full px-3 py-2.5 rounded-lg text-sm font-medium \
            text-slate-700 hover:bg-slate-100 dark:text-gray-300 \
            dark:hover:bg-gray-800"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

/// The sidebar shown on every page, with separate link sets for the user
/// surface and the admin panel.
pub struct SideBar<'a> {
    links: Vec<Link<'a>>,
    user: &'a User,
    is_admin: bool,
}

impl<'a> SideBar<'a> {
    /// Get the sidebar for the user surface, rendered for `user`.
    ///
    /// If a link matches `active_endpoint`, then that link will be marked as
    /// active and displayed differently in the HTML.
    pub fn user(active_endpoint: &str, user: &'a User) -> SideBar<'a> {
        let link = |url: &'a str, title: &'a str| Link {
            url,
            title,
            is_current: active_endpoint == url,
        };

        SideBar {
            links: vec![
                link(endpoints::DASHBOARD_VIEW, "Dashboard"),
                link(endpoints::NEW_EXPENSE_VIEW, "Add Expense"),
                link(endpoints::EXPENSES_VIEW, "Expenses"),
                link(endpoints::CATEGORIES_VIEW, "Categories"),
                link(endpoints::PROFILE_VIEW, "Profile"),
                link(endpoints::SETTINGS_VIEW, "Settings"),
            ],
            user,
            is_admin: false,
        }
    }

    /// Get the sidebar for the admin panel, rendered for `user`.
    pub fn admin(active_endpoint: &str, user: &'a User) -> SideBar<'a> {
        let link = |url: &'a str, title: &'a str| Link {
            url,
            title,
            is_current: active_endpoint == url,
        };

        SideBar {
            links: vec![
                link(endpoints::ADMIN_DASHBOARD_VIEW, "Dashboard"),
                link(endpoints::ADMIN_USERS_VIEW, "Users"),
                link(endpoints::ADMIN_REPORTS_VIEW, "Reports"),
                link(endpoints::ADMIN_CATEGORIES_VIEW, "Categories"),
                link(endpoints::ADMIN_SETTINGS_VIEW, "Settings"),
            ],
            user,
            is_admin: true,
        }
    }

    /// Render the sidebar.
    pub fn into_html(self) -> Markup {
        let subtitle = if self.is_admin {
            "Admin Panel"
        } else {
            "Personal Finance"
        };
        let (switch_url, switch_title) = if self.is_admin {
            (endpoints::DASHBOARD_VIEW, "User View")
        } else {
            (endpoints::ADMIN_DASHBOARD_VIEW, "Admin Panel")
        };

        html!(
            aside
                class="w-full lg:w-64 shrink-0 bg-white dark:bg-gray-900 shadow-xl
                lg:min-h-screen flex flex-col"
                aria-label="Primary"
            {
                div class="p-6 border-b border-slate-200 dark:border-gray-700"
                {
                    a href="/" class="text-2xl font-bold text-emerald-600 dark:text-emerald-500"
                    {
                        "SpendTrack"
                    }

                    p class="text-sm text-slate-600 dark:text-gray-400 mt-1"
                    {
                        (subtitle)
                    }
                }

                div class="p-4 border-b border-slate-200 dark:border-gray-700"
                {
                    div class="flex items-center space-x-3"
                    {
                        div
                            class="w-10 h-10 bg-emerald-500 rounded-full flex
                            items-center justify-center text-white font-semibold"
                        {
                            (initials(&self.user.name))
                        }

                        div
                        {
                            p class="font-medium text-slate-900 dark:text-white"
                            {
                                (self.user.name)
                            }

                            p class="text-xs text-slate-500 dark:text-gray-400"
                            {
                                (self.user.email)
                            }
                        }
                    }
                }

                nav class="p-4 space-y-2 flex-1"
                {
                    @for link in self.links {
                        (link.into_html())
                    }
                }

                div class="p-4 border-t border-slate-200 dark:border-gray-700 space-y-2"
                {
                    a
                        href=(switch_url)
                        class="flex items-center w-full px-3 py-2 rounded-lg border
                        border-slate-200 text-sm text-slate-700 hover:bg-slate-50
                        dark:border-gray-700 dark:text-gray-300 dark:hover:bg-gray-800"
                    {
                        (switch_title)
                    }

                    // The demo has no sessions, so signing out goes nowhere.
                    a
                        href=(endpoints::ROOT)
                        class="flex items-center w-full px-3 py-2 rounded-lg text-sm
                        text-slate-600 hover:bg-red-50 hover:text-red-600
                        dark:text-gray-400 dark:hover:bg-gray-800"
                    {
                        "Sign Out"
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod side_bar_tests {
    use std::collections::HashMap;

    use crate::{endpoints, navigation::SideBar, store::DemoStore};

    #[test]
    fn set_active_endpoint() {
        let store = DemoStore::seeded();
        let mut cases = HashMap::new();
        cases.insert(endpoints::DASHBOARD_VIEW, true);
        cases.insert(endpoints::NEW_EXPENSE_VIEW, true);
        cases.insert(endpoints::EXPENSES_VIEW, true);
        cases.insert(endpoints::CATEGORIES_VIEW, true);
        cases.insert(endpoints::PROFILE_VIEW, true);
        cases.insert(endpoints::SETTINGS_VIEW, true);

        cases.insert(endpoints::ROOT, false);
        cases.insert(endpoints::EXPENSES_API, false);
        cases.insert(endpoints::ADMIN_DASHBOARD_VIEW, false);

        for (endpoint, should_be_active) in cases {
            let side_bar = SideBar::user(endpoint, store.current_user());

            assert_link_active(side_bar, endpoint, should_be_active);
        }
    }

    #[test]
    fn admin_set_active_endpoint() {
        let store = DemoStore::seeded();
        let mut cases = HashMap::new();
        cases.insert(endpoints::ADMIN_DASHBOARD_VIEW, true);
        cases.insert(endpoints::ADMIN_USERS_VIEW, true);
        cases.insert(endpoints::ADMIN_REPORTS_VIEW, true);
        cases.insert(endpoints::ADMIN_CATEGORIES_VIEW, true);
        cases.insert(endpoints::ADMIN_SETTINGS_VIEW, true);

        cases.insert(endpoints::DASHBOARD_VIEW, false);
        cases.insert(endpoints::ADMIN_USERS_API, false);

        for (endpoint, should_be_active) in cases {
            let side_bar = SideBar::admin(endpoint, store.admin_user());

            assert_link_active(side_bar, endpoint, should_be_active);
        }
    }

    #[test]
    fn renders_user_info_and_brand() {
        let store = DemoStore::seeded();

        let html = SideBar::user(endpoints::DASHBOARD_VIEW, store.current_user())
            .into_html()
            .into_string();

        assert!(html.contains("SpendTrack"));
        assert!(html.contains("John Doe"));
        assert!(html.contains("john@example.com"));
        assert!(html.contains("JD"));
        assert!(html.contains("Personal Finance"));
    }

    #[test]
    fn admin_sidebar_links_back_to_user_view() {
        let store = DemoStore::seeded();

        let html = SideBar::admin(endpoints::ADMIN_DASHBOARD_VIEW, store.admin_user())
            .into_html()
            .into_string();

        assert!(html.contains("Admin Panel"));
        assert!(html.contains("User View"));
        assert!(html.contains("Admin User"));
    }

    #[track_caller]
    fn assert_link_active(side_bar: SideBar<'_>, endpoint: &str, should_be_active: bool) {
        let get_active_string = |is_active: bool| -> &str {
            if is_active {
                "active (true)"
            } else {
                "inactive (false)"
            }
        };

        for link in side_bar.links {
            if link.url == endpoint {
                assert_eq!(
                    link.is_current,
                    should_be_active,
                    "Link for current page should be {} but got {}",
                    get_active_string(should_be_active),
                    get_active_string(link.is_current),
                )
            } else {
                assert!(
                    !link.is_current,
                    "Link for inactive page should be {} but got {}",
                    get_active_string(false),
                    get_active_string(link.is_current)
                )
            }
        }
    }
}
