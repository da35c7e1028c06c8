//! The expense record model.

use time::Date;

use crate::{category::CategoryId, user::UserId};

/// Alias for an expense ID.
pub type ExpenseId = i64;

/// A single recorded expense in the demo data set.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// The user that recorded the expense.
    pub user_id: UserId,
    /// The amount spent in dollars.
    pub amount: f64,
    /// The category the expense belongs to.
    pub category_id: CategoryId,
    /// The category name, denormalized for display.
    pub category_name: String,
    /// A short description, e.g. "Lunch at Italian restaurant".
    pub description: String,
    /// The date the expense occurred.
    pub date: Date,
    /// Free-form notes, if any.
    pub notes: Option<String>,
}
