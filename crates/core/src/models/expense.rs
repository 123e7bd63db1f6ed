use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded spend, as stored by the backend.
///
/// **Ownership**: the backend owns every `Expense`. The client only ever
/// holds a transient copy from the last successful fetch and never
/// mutates one locally — a record is immutable once created, except via
/// deletion by its server-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Server-assigned unique identifier
    pub id: i64,

    /// Original amount, in `currency`
    pub amount: f64,

    /// ISO-like code of the original currency (e.g. "EUR")
    pub currency: String,

    /// The amount expressed in USD, computed by the backend
    pub converted_amount: f64,

    /// Free-text description of the spend
    pub description: String,

    /// Creation timestamp, assigned by the backend
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new expense (`POST /api/expenses`).
/// Exactly these three fields are submitted; id, converted amount, and
/// timestamp are all assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub currency: String,
    pub description: String,
}

impl NewExpense {
    pub fn new(amount: f64, currency: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            description: description.into(),
        }
    }
}
