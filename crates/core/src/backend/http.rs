use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::traits::ExpenseBackend;
use crate::errors::CoreError;
use crate::models::budget::BudgetSummary;
use crate::models::expense::{Expense, NewExpense};

/// Environment variable naming the backend address.
const ENV_BASE_URL: &str = "EXPENSE_API_URL";

/// Backend address used when `EXPENSE_API_URL` is not set.
const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// HTTP client for the expense backend's REST API.
///
/// Non-success responses are read as plain text — the backend explains
/// rejections in the body — and surface as [`CoreError::Backend`].
/// Transport failures surface as [`CoreError::Network`].
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url,
        }
    }

    /// Resolve the backend address from `EXPENSE_API_URL`, falling back
    /// to `http://localhost:8081`.
    pub fn from_env() -> Self {
        let base = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into a `Backend` error carrying the
    /// plain-text body.
    async fn status_error(resp: reqwest::Response) -> CoreError {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        CoreError::Backend { status, message }
    }
}

#[async_trait]
impl ExpenseBackend for HttpBackend {
    async fn fetch_budget(&self) -> Result<BudgetSummary, CoreError> {
        let url = format!("{}/api/budget", self.base_url);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }
        resp.json::<BudgetSummary>()
            .await
            .map_err(|e| CoreError::Deserialization(format!("Invalid budget payload: {e}")))
    }

    async fn fetch_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        let url = format!("{}/api/expenses", self.base_url);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }
        resp.json::<Vec<Expense>>()
            .await
            .map_err(|e| CoreError::Deserialization(format!("Invalid expense list payload: {e}")))
    }

    async fn create_expense(&self, new: &NewExpense) -> Result<Expense, CoreError> {
        let url = format!("{}/api/expenses", self.base_url);
        let resp = self.client.post(&url).json(new).send().await?;
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }
        resp.json::<Expense>()
            .await
            .map_err(|e| CoreError::Deserialization(format!("Invalid created-expense payload: {e}")))
    }

    async fn delete_expense(&self, id: i64) -> Result<(), CoreError> {
        let url = format!("{}/api/expenses/{id}", self.base_url);
        let resp = self.client.delete(&url).send().await?;
        if !resp.status().is_success() {
            return Err(Self::status_error(resp).await);
        }
        Ok(())
    }
}
