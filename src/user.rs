//! The user account model for the demo data set.

use std::fmt::{Display, Formatter};

use time::Date;

/// Alias for a user ID.
pub type UserId = i64;

/// The access level of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A regular user that tracks their own expenses.
    User,
    /// An administrator with access to the admin panel.
    Admin,
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

/// A user account in the demo data set.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// The ID of the user.
    pub id: UserId,
    /// The user's full name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// The user's access level.
    pub role: Role,
    /// The user's all-time expense total in dollars.
    pub total_expenses: f64,
    /// The user's monthly budget in dollars.
    pub monthly_budget: f64,
    /// The date the account was created.
    pub created_at: Date,
}

impl User {
    /// The user's given name, i.e. the first word of their full name.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Whether the user has admin access.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod user_tests {
    use time::macros::date;

    use super::{Role, User};

    fn test_user(name: &str, role: Role) -> User {
        User {
            id: 1,
            name: name.to_owned(),
            email: "test@example.com".to_owned(),
            role,
            total_expenses: 0.0,
            monthly_budget: 0.0,
            created_at: date!(2024 - 01 - 01),
        }
    }

    #[test]
    fn first_name_takes_first_word() {
        assert_eq!(test_user("John Doe", Role::User).first_name(), "John");
    }

    #[test]
    fn first_name_falls_back_to_full_name() {
        assert_eq!(test_user("Cher", Role::User).first_name(), "Cher");
    }

    #[test]
    fn admin_role_is_admin() {
        assert!(test_user("Admin User", Role::Admin).is_admin());
        assert!(!test_user("John Doe", Role::User).is_admin());
    }
}
