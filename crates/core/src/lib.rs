pub mod backend;
pub mod errors;
pub mod models;
pub mod page;
pub mod prompt;
pub mod views;

use tracing::{error, info};

use backend::traits::ExpenseBackend;
use errors::CoreError;
use models::budget::BudgetSummary;
use models::expense::Expense;
use page::{ExpenseForm, Page};
use prompt::UserPrompt;

/// Main entry point: the page controller.
///
/// Owns the backend connection, the rendered page regions, and the
/// prompt surface. Exactly one controller exists per page session, and
/// every view-event handler goes through this handle.
///
/// All operations are total: network and validation failures are
/// surfaced through the page (placeholders) or the prompt (alerts),
/// never returned to the caller — the session stays interactive and
/// every operation remains independently retryable.
#[must_use]
pub struct ExpenseTracker {
    backend: Box<dyn ExpenseBackend>,
    prompt: Box<dyn UserPrompt>,
    page: Page,
}

impl std::fmt::Debug for ExpenseTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTracker")
            .field("page", &self.page)
            .finish()
    }
}

impl ExpenseTracker {
    pub fn new(backend: Box<dyn ExpenseBackend>, prompt: Box<dyn UserPrompt>) -> Self {
        Self {
            backend,
            prompt,
            page: Page::new(),
        }
    }

    /// Read access to the rendered page.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The entry form, for filling fields before [`add_expense`](Self::add_expense).
    pub fn form_mut(&mut self) -> &mut ExpenseForm {
        &mut self.page.form
    }

    // ── Startup ─────────────────────────────────────────────────────

    /// Populate the page: fetch the summary and the expense list
    /// concurrently and render both. The two loads are independent —
    /// neither waits on or can fail the other.
    pub async fn init(&mut self) {
        self.refresh().await;
    }

    /// Re-fetch and redraw both regions. Runs on startup and after
    /// every successful mutation: displayed state always reflects the
    /// last successful fetch, never a locally patched value.
    pub async fn refresh(&mut self) {
        let (budget, expenses) = tokio::join!(
            self.backend.fetch_budget(),
            self.backend.fetch_expenses(),
        );
        self.apply_budget(budget);
        self.apply_expenses(expenses);
    }

    // ── Read path ───────────────────────────────────────────────────

    /// Load the budget summary into its region. On failure the region
    /// degrades to a placeholder and the error is logged; the rest of
    /// the page keeps functioning. No automatic retry.
    pub async fn load_budget(&mut self) {
        let result = self.backend.fetch_budget().await;
        self.apply_budget(result);
    }

    /// Load the expense list into its region. An empty collection
    /// renders the empty-state placeholder, never an empty list of
    /// cards. Failure degrades this region only.
    pub async fn load_expenses(&mut self) {
        let result = self.backend.fetch_expenses().await;
        self.apply_expenses(result);
    }

    fn apply_budget(&mut self, result: Result<BudgetSummary, CoreError>) {
        match result {
            Ok(summary) => self.page.budget.set(views::budget::render(&summary)),
            Err(err) => {
                error!(%err, "Failed to load budget");
                self.page.budget.set(views::budget::render_unavailable());
            }
        }
    }

    fn apply_expenses(&mut self, result: Result<Vec<Expense>, CoreError>) {
        match result {
            Ok(expenses) => self.page.expenses.set(views::expenses::render(&expenses)),
            Err(err) => {
                error!(%err, "Failed to load expenses");
                self.page
                    .expenses
                    .set(views::expenses::render_unavailable());
            }
        }
    }

    // ── Write path ──────────────────────────────────────────────────

    /// Submit the entry form.
    ///
    /// Validation failures surface a blocking alert and send nothing;
    /// the form keeps its values so the user can correct and resubmit.
    /// On a successful create the form resets, both regions re-fetch,
    /// and the submit control flashes its success state. On a backend
    /// rejection the response body is surfaced in an alert and the
    /// pre-failure state is left untouched.
    pub async fn add_expense(&mut self) {
        let new = match self.page.form.validate() {
            Ok(new) => new,
            Err(CoreError::Validation(msg)) => {
                self.prompt.alert(&msg);
                return;
            }
            Err(err) => {
                self.prompt.alert(&err.to_string());
                return;
            }
        };

        match self.backend.create_expense(&new).await {
            Ok(created) => {
                info!(id = created.id, "Expense added");
                self.page.form.reset();
                self.refresh().await;
                self.page.form.flash_success();
            }
            Err(err) => {
                error!(%err, "Failed to add expense");
                self.prompt.alert(&format!("Failed to add expense: {err}"));
            }
        }
    }

    /// Delete a stored expense by its server-assigned id, after a
    /// blocking confirmation. Declining aborts with zero requests and
    /// no side effect. Success re-fetches both regions; failure alerts
    /// with the server's detail text and changes nothing.
    pub async fn delete_expense(&mut self, id: i64) {
        if !self
            .prompt
            .confirm("Are you sure you want to delete this expense?")
        {
            return;
        }

        match self.backend.delete_expense(id).await {
            Ok(()) => {
                info!(id, "Expense deleted");
                self.refresh().await;
            }
            Err(err) => {
                error!(%err, id, "Failed to delete expense");
                self.prompt
                    .alert(&format!("Failed to delete expense: {err}"));
            }
        }
    }
}
