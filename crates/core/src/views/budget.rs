use crate::models::budget::BudgetSummary;

const HEADING: &str = "📊 Budget Summary";

/// Render the budget summary region: two-decimal dollar total plus the
/// expense count, exactly as the backend reported them.
#[must_use]
pub fn render(summary: &BudgetSummary) -> String {
    format!(
        "{HEADING}\n${:.2}\n{} expenses",
        summary.total_expenses, summary.expense_count
    )
}

/// Fallback shown when the summary fetch fails.
#[must_use]
pub fn render_unavailable() -> String {
    format!("{HEADING}\nFailed to load budget")
}
