use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::budget::BudgetSummary;
use crate::models::expense::{Expense, NewExpense};

/// Trait abstraction over the expense backend's REST contract.
///
/// The HTTP implementation talks to the real service; the test suite
/// substitutes an in-memory double. Swapping transports touches only
/// this seam — the controller is untouched.
#[async_trait]
pub trait ExpenseBackend: Send + Sync {
    /// `GET /api/budget` — the current aggregate summary.
    async fn fetch_budget(&self) -> Result<BudgetSummary, CoreError>;

    /// `GET /api/expenses` — all stored expenses, possibly empty.
    async fn fetch_expenses(&self) -> Result<Vec<Expense>, CoreError>;

    /// `POST /api/expenses` — create a record. Returns the stored
    /// expense with its server-assigned id and converted amount.
    async fn create_expense(&self, new: &NewExpense) -> Result<Expense, CoreError>;

    /// `DELETE /api/expenses/{id}` — remove a record.
    async fn delete_expense(&self, id: i64) -> Result<(), CoreError>;
}
