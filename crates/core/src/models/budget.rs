use serde::{Deserialize, Serialize};

/// Aggregate totals over all stored expenses.
///
/// Derived server-side and recomputed by the backend on every fetch —
/// the client never computes or patches these values locally, so the
/// rendered summary always equals the last `GET /api/budget` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Sum of all converted (USD) amounts
    pub total_expenses: f64,

    /// Number of stored expenses
    pub expense_count: u32,

    /// Currency all totals are expressed in. Backends speaking the
    /// two-field contract omit it; USD is assumed.
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
}

fn default_base_currency() -> String {
    "USD".to_string()
}

impl BudgetSummary {
    /// A summary over zero expenses.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_expenses: 0.0,
            expense_count: 0,
            base_currency: default_base_currency(),
        }
    }
}

impl Default for BudgetSummary {
    fn default() -> Self {
        Self::empty()
    }
}
