use std::time::{Duration, Instant};

use crate::errors::CoreError;
use crate::models::currency;
use crate::models::expense::NewExpense;

/// How long the submit control shows its success state after a create.
pub const FLASH_DURATION: Duration = Duration::from_secs(2);

/// Default label on the form's submit control.
pub const SUBMIT_LABEL: &str = "Add Expense";

/// Label shown transiently after a successful create.
pub const SUBMIT_SUCCESS_LABEL: &str = "✅ Added!";

/// One independently rendered area of the page.
///
/// Concurrent operations each own a disjoint region, so in-flight loads
/// need no coordination: whichever result arrives writes its own region
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    content: String,
}

impl Region {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the region's rendered content wholesale.
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The expense entry form: three free-text fields and a submit control.
///
/// Field values survive failed submissions — only a successful create
/// resets them, so the user can correct and resubmit in place.
#[derive(Debug, Default)]
pub struct ExpenseForm {
    pub amount: String,
    pub currency: String,
    pub description: String,
    /// When the submit control's success state expires, if flashing.
    flash_until: Option<Instant>,
}

impl ExpenseForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all three fields at once, as a front end does before submit.
    pub fn fill(&mut self, amount: &str, currency: &str, description: &str) {
        self.amount = amount.to_string();
        self.currency = currency.to_string();
        self.description = description.to_string();
    }

    /// Clear all fields, as after a successful submission.
    pub fn reset(&mut self) {
        self.amount.clear();
        self.currency.clear();
        self.description.clear();
    }

    /// Validate the current field values into a create payload.
    ///
    /// Rules: all three fields non-empty, amount numeric, amount
    /// strictly greater than zero. The first violated rule is reported;
    /// no request may be sent when this fails.
    pub fn validate(&self) -> Result<NewExpense, CoreError> {
        if self.amount.trim().is_empty()
            || self.currency.trim().is_empty()
            || self.description.trim().is_empty()
        {
            return Err(CoreError::Validation("Please fill in all fields".into()));
        }

        let amount: f64 = self.amount.trim().parse().map_err(|_| {
            CoreError::Validation(format!(
                "'{}' is not a valid amount. Please enter a number.",
                self.amount.trim()
            ))
        })?;

        // `!(amount > 0.0)` also rejects NaN, which parses successfully.
        if !(amount > 0.0) {
            return Err(CoreError::Validation(
                "Amount must be greater than zero. Please enter a positive value.".into(),
            ));
        }

        Ok(NewExpense {
            amount,
            currency: currency::normalize_code(&self.currency),
            description: self.description.trim().to_string(),
        })
    }

    /// Start the transient success state on the submit control.
    pub fn flash_success(&mut self) {
        self.flash_until = Some(Instant::now() + FLASH_DURATION);
    }

    /// Whether the success state is still showing.
    #[must_use]
    pub fn flash_active(&self) -> bool {
        matches!(self.flash_until, Some(until) if Instant::now() < until)
    }

    /// Current label of the submit control.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.flash_active() {
            SUBMIT_SUCCESS_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

/// The fixed page structure the controller renders into.
///
/// Field names mirror the element ids the page template provides:
/// `budget` (summary container), `expenses` (list container), and
/// `expenseForm` (the entry form).
#[derive(Debug, Default)]
pub struct Page {
    pub budget: Region,
    pub expenses: Region,
    pub form: ExpenseForm,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
