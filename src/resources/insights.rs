use crate::client::Client;
use crate::error::BasiqError;
use crate::models::{
    Affordability, AffordabilitySummaryList, AffordabilityTransaction, ExpenseSummary,
    IncomeSummary, SnapshotParams,
};
use reqwest::Method;

impl Client {
    pub async fn affordability(
        &self,
        user_id: &str,
        snapshot_id: &str,
    ) -> Result<Affordability, BasiqError> {
        let url = self.endpoint(&["users", user_id, "affordability", snapshot_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    /// Generate a new affordability report from the user's connected accounts.
    pub async fn create_affordability(
        &self,
        user_id: &str,
        params: &SnapshotParams,
    ) -> Result<Affordability, BasiqError> {
        let url = self.endpoint(&["users", user_id, "affordability"])?;
        self.with_reauth(|| self.send_json(Method::POST, &url, Some(params)))
            .await
    }

    pub async fn affordability_summaries(
        &self,
        user_id: &str,
    ) -> Result<AffordabilitySummaryList, BasiqError> {
        let url = self.endpoint(&["users", user_id, "affordability"])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    /// Transactions a snapshot was computed from, across all pages.
    pub async fn affordability_transactions(
        &self,
        user_id: &str,
        snapshot_id: &str,
    ) -> Result<Vec<AffordabilityTransaction>, BasiqError> {
        let url = self.endpoint(&["users", user_id, "affordability", snapshot_id, "transactions"])?;
        self.with_reauth(|| self.collect_pages(&url)).await
    }

    pub async fn expense_summary(
        &self,
        user_id: &str,
        snapshot_id: &str,
    ) -> Result<ExpenseSummary, BasiqError> {
        let url = self.endpoint(&["users", user_id, "expenses", snapshot_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn create_expense_summary(
        &self,
        user_id: &str,
        params: &SnapshotParams,
    ) -> Result<ExpenseSummary, BasiqError> {
        let url = self.endpoint(&["users", user_id, "expenses"])?;
        self.with_reauth(|| self.send_json(Method::POST, &url, Some(params)))
            .await
    }

    pub async fn income_summary(
        &self,
        user_id: &str,
        snapshot_id: &str,
    ) -> Result<IncomeSummary, BasiqError> {
        let url = self.endpoint(&["users", user_id, "income", snapshot_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn create_income_summary(
        &self,
        user_id: &str,
        params: &SnapshotParams,
    ) -> Result<IncomeSummary, BasiqError> {
        let url = self.endpoint(&["users", user_id, "income"])?;
        self.with_reauth(|| self.send_json(Method::POST, &url, Some(params)))
            .await
    }
}
