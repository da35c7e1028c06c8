//! Aggregation for the dashboard stat cards.

use crate::store::DemoStore;

/// The previous month's spending total.
///
/// The demo data set only contains expenses for the anchor month, so the
/// comparison baseline is a fixed figure from the seeded trend data.
pub(super) const LAST_MONTH_TOTAL: f64 = 2180.0;

/// The figures shown in the dashboard stat cards.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct MonthSummary {
    /// Spending in the anchor month.
    pub this_month: f64,
    /// Change vs. [LAST_MONTH_TOTAL] in percent; negative means spending
    /// went down.
    pub change_percent: f64,
    /// Spending as a percentage of the monthly budget.
    pub budget_used_percent: f64,
}

/// Summarize the current user's anchor-month spending.
pub(super) fn month_summary(store: &DemoStore) -> MonthSummary {
    let user = store.current_user();
    let this_month = store.current_month_total(user.id);

    let change_percent = (this_month - LAST_MONTH_TOTAL) / LAST_MONTH_TOTAL * 100.0;

    let budget_used_percent = if user.monthly_budget > 0.0 {
        this_month / user.monthly_budget * 100.0
    } else {
        0.0
    };

    MonthSummary {
        this_month,
        change_percent,
        budget_used_percent,
    }
}

#[cfg(test)]
mod tests {
    use crate::store::DemoStore;

    use super::month_summary;

    #[test]
    fn sums_the_current_users_anchor_month() {
        let store = DemoStore::seeded();

        let summary = month_summary(&store);

        assert_eq!(summary.this_month, 431.50);
    }

    #[test]
    fn change_is_relative_to_last_month() {
        let store = DemoStore::seeded();

        let summary = month_summary(&store);

        // (431.50 - 2180.00) / 2180.00 * 100
        assert!((summary.change_percent - -80.2064).abs() < 0.001);
    }

    #[test]
    fn budget_used_is_relative_to_monthly_budget() {
        let store = DemoStore::seeded();

        let summary = month_summary(&store);

        // 431.50 / 3000.00 * 100
        assert!((summary.budget_used_percent - 14.3833).abs() < 0.001);
    }
}
