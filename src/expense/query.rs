//! In-memory filtering and sorting for the expense list.

use serde::{Deserialize, Serialize};

use crate::{category::CategoryId, expense::Expense};

/// The column the expense list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Sort by the expense description.
    Description,
    /// Sort by the amount spent.
    Amount,
    /// Sort by the expense date.
    Date,
}

/// The direction the expense list is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

impl SortOrder {
    pub(crate) fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Select the expenses matching `search` and `category`.
///
/// The search term matches case-insensitively against the description and
/// the category name. The category filter composes with the search term.
pub(crate) fn filter_expenses<'a>(
    expenses: &'a [Expense],
    search: Option<&str>,
    category: Option<CategoryId>,
) -> Vec<&'a Expense> {
    let search = search.map(str::to_lowercase);

    expenses
        .iter()
        .filter(|expense| {
            let matches_search = match &search {
                Some(term) => {
                    expense.description.to_lowercase().contains(term)
                        || expense.category_name.to_lowercase().contains(term)
                }
                None => true,
            };
            let matches_category = match category {
                Some(category_id) => expense.category_id == category_id,
                None => true,
            };

            matches_search && matches_category
        })
        .collect()
}

/// Sort expenses by `field` in `order`, breaking ties by ID ascending so the
/// row order is stable across renders.
pub(crate) fn sort_expenses(expenses: &mut [&Expense], field: SortField, order: SortOrder) {
    expenses.sort_by(|a, b| {
        let ordering = match field {
            SortField::Description => a.description.cmp(&b.description),
            SortField::Amount => a.amount.total_cmp(&b.amount),
            SortField::Date => a.date.cmp(&b.date),
        };

        let ordering = match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        };

        ordering.then(a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use crate::{
        expense::{Expense, ExpenseId},
        store::DemoStore,
    };

    use super::{SortField, SortOrder, filter_expenses, sort_expenses};

    fn ids(expenses: &[&Expense]) -> Vec<ExpenseId> {
        expenses.iter().map(|expense| expense.id).collect()
    }

    #[test]
    fn search_matches_description_case_insensitively() {
        let store = DemoStore::seeded();

        let got = filter_expenses(store.expenses(), Some("LUNCH"), None);

        assert_eq!(ids(&got), vec![1]);
    }

    #[test]
    fn search_matches_category_name() {
        let store = DemoStore::seeded();

        let got = filter_expenses(store.expenses(), Some("transport"), None);

        assert_eq!(ids(&got), vec![2]);
    }

    #[test]
    fn category_filter_composes_with_search() {
        let store = DemoStore::seeded();

        let got = filter_expenses(store.expenses(), Some("monthly"), Some(5));

        // "Monthly metro pass" matches the search but is in category 2.
        assert!(got.is_empty());
    }

    #[test]
    fn no_filters_returns_everything() {
        let store = DemoStore::seeded();

        let got = filter_expenses(store.expenses(), None, None);

        assert_eq!(got.len(), store.expenses().len());
    }

    #[test]
    fn sorts_by_amount_ascending() {
        let store = DemoStore::seeded();
        let mut expenses = filter_expenses(store.expenses(), None, None);

        sort_expenses(&mut expenses, SortField::Amount, SortOrder::Ascending);

        assert_eq!(ids(&expenses), vec![4, 1, 3, 2, 5]);
    }

    #[test]
    fn sorts_by_date_descending() {
        let store = DemoStore::seeded();
        let mut expenses = filter_expenses(store.expenses(), None, None);

        sort_expenses(&mut expenses, SortField::Date, SortOrder::Descending);

        assert_eq!(ids(&expenses), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn equal_keys_fall_back_to_id_order() {
        let store = DemoStore::seeded();
        let template = store.expenses()[0].clone();
        let pool = [
            Expense {
                id: 7,
                ..template.clone()
            },
            Expense { id: 3, ..template },
        ];
        let mut tied: Vec<&Expense> = pool.iter().collect();

        sort_expenses(&mut tied, SortField::Date, SortOrder::Descending);

        assert_eq!(ids(&tied), vec![3, 7]);
    }

    #[test]
    fn toggled_flips_sort_order() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }
}
