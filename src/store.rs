//! The immutable in-memory demo data set and the read-only queries over it.
//!
//! The store is seeded once at startup and handed to the router inside an
//! `Arc`. No handler mutates it: action endpoints validate their input and
//! confirm the simulated effect with a toast instead.

use time::{Date, macros::date};

use crate::{
    Error,
    category::{Category, CategoryId, CategorySpending},
    expense::{Expense, ExpenseId},
    user::{Role, User, UserId},
};

/// A single month of spending for the trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// The abbreviated month label, e.g. "Jan".
    pub month: &'static str,
    /// The total spent in that month in dollars.
    pub amount: f64,
}

/// System-wide headline figures shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewStats {
    /// The number of regular (non-admin) accounts.
    pub total_users: usize,
    /// The all-time expense total across users in dollars.
    pub total_expenses: f64,
    /// The average monthly spend per user in dollars.
    pub average_monthly_expense: f64,
    /// The name of the most used category.
    pub top_category: &'static str,
    /// Month-over-month growth in percent.
    pub monthly_growth: f64,
}

/// The immutable demo data backing every page and endpoint.
#[derive(Debug, Clone)]
pub struct DemoStore {
    users: Vec<User>,
    categories: Vec<Category>,
    expenses: Vec<Expense>,
    monthly_totals: Vec<MonthlyTotal>,
    overview_stats: OverviewStats,
}

impl DemoStore {
    /// Create the store with the demo data set: three users (two regular
    /// accounts and one admin), eight categories, and five expenses.
    pub fn seeded() -> Self {
        Self {
            users: seed_users(),
            categories: seed_categories(),
            expenses: seed_expenses(),
            monthly_totals: seed_monthly_totals(),
            overview_stats: OverviewStats {
                total_users: 2,
                total_expenses: 3456.50,
                average_monthly_expense: 1728.25,
                top_category: "Food & Dining",
                monthly_growth: 12.5,
            },
        }
    }

    /// All user accounts, admin included.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All expense categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All recorded expenses, in seed order (newest first).
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The six months of trend data for the reports page.
    pub fn monthly_totals(&self) -> &[MonthlyTotal] {
        &self.monthly_totals
    }

    /// The headline figures for the admin dashboard.
    pub fn overview_stats(&self) -> &OverviewStats {
        &self.overview_stats
    }

    /// The demo user the personal pages are rendered for.
    ///
    /// # Panics
    /// Panics if the seed data contains no regular user. The seed data is a
    /// compile-time constant, so this cannot happen in practice.
    pub fn current_user(&self) -> &User {
        self.users
            .iter()
            .find(|user| user.role == Role::User)
            .expect("seed data must contain a regular user")
    }

    /// The demo admin the admin panel is rendered for.
    ///
    /// # Panics
    /// Panics if the seed data contains no admin user.
    pub fn admin_user(&self) -> &User {
        self.users
            .iter()
            .find(|user| user.role == Role::Admin)
            .expect("seed data must contain an admin user")
    }

    /// Look up an expense by ID.
    ///
    /// # Errors
    /// Returns [Error::UnknownExpense] if no expense has the given ID.
    pub fn expense(&self, id: ExpenseId) -> Result<&Expense, Error> {
        self.expenses
            .iter()
            .find(|expense| expense.id == id)
            .ok_or(Error::UnknownExpense(id))
    }

    /// Look up a category by ID.
    ///
    /// # Errors
    /// Returns [Error::UnknownCategory] if no category has the given ID.
    pub fn category(&self, id: CategoryId) -> Result<&Category, Error> {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .ok_or(Error::UnknownCategory(id))
    }

    /// Look up a user by ID.
    ///
    /// # Errors
    /// Returns [Error::UnknownUser] if no user has the given ID.
    pub fn user(&self, id: UserId) -> Result<&User, Error> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(Error::UnknownUser(id))
    }

    /// The date the demo data set treats as "today".
    ///
    /// The data set is static, so date-relative figures (this month's
    /// spending, budget usage) anchor on the newest expense date rather than
    /// the wall clock. This keeps the demo rendering identically no matter
    /// when it is run.
    pub fn anchor_date(&self) -> Date {
        self.expenses
            .iter()
            .map(|expense| expense.date)
            .max()
            .expect("seed data must contain at least one expense")
    }

    /// The expenses recorded by `user_id`, in seed order.
    pub fn expenses_for_user(&self, user_id: UserId) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| expense.user_id == user_id)
            .collect()
    }

    /// The `count` most recent expenses across all users, newest first.
    pub fn recent_expenses(&self, count: usize) -> Vec<&Expense> {
        let mut expenses: Vec<&Expense> = self.expenses.iter().collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        expenses.truncate(count);
        expenses
    }

    /// The total spent by `user_id` in the anchor month (see
    /// [DemoStore::anchor_date]).
    pub fn current_month_total(&self, user_id: UserId) -> f64 {
        let anchor = self.anchor_date();

        self.expenses
            .iter()
            .filter(|expense| {
                expense.user_id == user_id
                    && expense.date.year() == anchor.year()
                    && expense.date.month() == anchor.month()
            })
            .map(|expense| expense.amount)
            .sum()
    }

    /// Each category joined with its total spending and expense count,
    /// in seed (ID) order.
    pub fn category_spending(&self) -> Vec<CategorySpending> {
        self.categories
            .iter()
            .map(|category| {
                let in_category: Vec<&Expense> = self
                    .expenses
                    .iter()
                    .filter(|expense| expense.category_id == category.id)
                    .collect();

                CategorySpending {
                    category: category.clone(),
                    spent: in_category.iter().map(|expense| expense.amount).sum(),
                    expense_count: in_category.len(),
                }
            })
            .collect()
    }

    /// The top `count` categories by amount spent, skipping categories with
    /// no spending.
    pub fn top_categories(&self, count: usize) -> Vec<CategorySpending> {
        let mut spending: Vec<CategorySpending> = self
            .category_spending()
            .into_iter()
            .filter(|summary| summary.spent > 0.0)
            .collect();
        spending.sort_by(|a, b| {
            b.spent
                .total_cmp(&a.spent)
                .then(a.category.id.cmp(&b.category.id))
        });
        spending.truncate(count);
        spending
    }
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            role: Role::User,
            total_expenses: 2450.75,
            monthly_budget: 3000.0,
            created_at: date!(2024 - 01 - 15),
        },
        User {
            id: 2,
            name: "Sarah Smith".to_owned(),
            email: "sarah@example.com".to_owned(),
            role: Role::User,
            total_expenses: 1890.20,
            monthly_budget: 2500.0,
            created_at: date!(2024 - 02 - 20),
        },
        User {
            id: 3,
            name: "Admin User".to_owned(),
            email: "admin@example.com".to_owned(),
            role: Role::Admin,
            total_expenses: 0.0,
            monthly_budget: 0.0,
            created_at: date!(2024 - 01 - 01),
        },
    ]
}

fn seed_categories() -> Vec<Category> {
    let category = |id, name: &str, icon: &str, color: &str, budget| Category {
        id,
        name: name.to_owned(),
        icon: icon.to_owned(),
        color: color.to_owned(),
        budget,
    };

    vec![
        category(1, "Food & Dining", "utensils", "#FF6B6B", 800.0),
        category(2, "Transportation", "car", "#4ECDC4", 400.0),
        category(3, "Shopping", "shopping-bag", "#45B7D1", 300.0),
        category(4, "Entertainment", "film", "#96CEB4", 200.0),
        category(5, "Bills & Utilities", "zap", "#FECA57", 600.0),
        category(6, "Healthcare", "heart", "#FF9FF3", 200.0),
        category(7, "Education", "book", "#54A0FF", 150.0),
        category(8, "Travel", "map-pin", "#5F27CD", 250.0),
    ]
}

fn seed_expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: 1,
            user_id: 1,
            amount: 45.50,
            category_id: 1,
            category_name: "Food & Dining".to_owned(),
            description: "Lunch at Italian restaurant".to_owned(),
            date: date!(2025 - 01 - 20),
            notes: Some("Business lunch with client".to_owned()),
        },
        Expense {
            id: 2,
            user_id: 1,
            amount: 120.00,
            category_id: 2,
            category_name: "Transportation".to_owned(),
            description: "Monthly metro pass".to_owned(),
            date: date!(2025 - 01 - 19),
            notes: Some("Renewed for February".to_owned()),
        },
        Expense {
            id: 3,
            user_id: 1,
            amount: 85.25,
            category_id: 3,
            category_name: "Shopping".to_owned(),
            description: "Groceries at supermarket".to_owned(),
            date: date!(2025 - 01 - 18),
            notes: Some("Weekly grocery shopping".to_owned()),
        },
        Expense {
            id: 4,
            user_id: 2,
            amount: 25.00,
            category_id: 4,
            category_name: "Entertainment".to_owned(),
            description: "Movie tickets".to_owned(),
            date: date!(2025 - 01 - 17),
            notes: Some("Weekend movie with friends".to_owned()),
        },
        Expense {
            id: 5,
            user_id: 1,
            amount: 180.75,
            category_id: 5,
            category_name: "Bills & Utilities".to_owned(),
            description: "Electricity bill".to_owned(),
            date: date!(2025 - 01 - 16),
            notes: Some("January electricity usage".to_owned()),
        },
    ]
}

fn seed_monthly_totals() -> Vec<MonthlyTotal> {
    vec![
        MonthlyTotal {
            month: "Jan",
            amount: 2450.0,
        },
        MonthlyTotal {
            month: "Feb",
            amount: 2180.0,
        },
        MonthlyTotal {
            month: "Mar",
            amount: 2650.0,
        },
        MonthlyTotal {
            month: "Apr",
            amount: 2320.0,
        },
        MonthlyTotal {
            month: "May",
            amount: 2890.0,
        },
        MonthlyTotal {
            month: "Jun",
            amount: 2156.0,
        },
    ]
}
