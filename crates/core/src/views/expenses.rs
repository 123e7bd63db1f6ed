use chrono::Local;

use crate::models::expense::Expense;

/// Shown when the collection is empty — never an empty list of cards.
const EMPTY_STATE: &str = "📝 No expenses yet. Add your first expense above!";

const LOAD_FAILED: &str = "Failed to load expenses";

/// Render the expense list region, one card per expense in the order
/// the backend returned them.
#[must_use]
pub fn render(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return EMPTY_STATE.to_string();
    }
    expenses
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// A single expense card: description, local date-only creation date,
/// the original amount with its currency verbatim, and the
/// backend-converted USD amount to two decimals. The leading `#id` is
/// what a delete action is bound to.
#[must_use]
pub fn render_card(expense: &Expense) -> String {
    let date = expense.created_at.with_timezone(&Local).format("%x");
    format!(
        "[#{}] {}  ({})\n    {} {} → ${:.2} USD",
        expense.id,
        expense.description,
        date,
        expense.amount,
        expense.currency,
        expense.converted_amount,
    )
}

/// Fallback shown when the list fetch fails.
#[must_use]
pub fn render_unavailable() -> String {
    LOAD_FAILED.to_string()
}
