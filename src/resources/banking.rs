use crate::client::Client;
use crate::error::BasiqError;
use crate::models::{
    Account, AccountList, Connection, ConnectionList, Identity, IdentityList, Job, JobList,
    Transaction,
};
use log::debug;
use reqwest::Method;

impl Client {
    pub async fn account(&self, user_id: &str, account_id: &str) -> Result<Account, BasiqError> {
        let url = self.endpoint(&["users", user_id, "accounts", account_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn accounts(&self, user_id: &str) -> Result<AccountList, BasiqError> {
        let url = self.endpoint(&["users", user_id, "accounts"])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn transaction(
        &self,
        user_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction, BasiqError> {
        let url = self.endpoint(&["users", user_id, "transactions", transaction_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    /// Fetch every transaction of a user, following pagination to the end.
    pub async fn transactions(&self, user_id: &str) -> Result<Vec<Transaction>, BasiqError> {
        let url = self.endpoint(&["users", user_id, "transactions"])?;
        let txns: Vec<Transaction> = self.with_reauth(|| self.collect_pages(&url)).await?;
        debug!("Fetched {} transactions for user", txns.len());
        Ok(txns)
    }

    pub async fn connection(
        &self,
        user_id: &str,
        connection_id: &str,
    ) -> Result<Connection, BasiqError> {
        let url = self.endpoint(&["users", user_id, "connections", connection_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn connections(&self, user_id: &str) -> Result<ConnectionList, BasiqError> {
        let url = self.endpoint(&["users", user_id, "connections"])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    /// Ask the institution for fresh data. Progress is reported through the
    /// returned job.
    pub async fn refresh_connection(
        &self,
        user_id: &str,
        connection_id: &str,
    ) -> Result<Job, BasiqError> {
        let url = self.endpoint(&["users", user_id, "connections", connection_id, "refresh"])?;
        self.with_reauth(|| self.send_json(Method::POST, &url, None::<&()>))
            .await
    }

    /// Refresh all connections of a user; one job per connection.
    pub async fn refresh_connections(&self, user_id: &str) -> Result<JobList, BasiqError> {
        let url = self.endpoint(&["users", user_id, "connections", "refresh"])?;
        self.with_reauth(|| self.send_json(Method::POST, &url, None::<&()>))
            .await
    }

    pub async fn delete_connection(
        &self,
        user_id: &str,
        connection_id: &str,
    ) -> Result<(), BasiqError> {
        let url = self.endpoint(&["users", user_id, "connections", connection_id])?;
        self.with_reauth(|| self.delete(&url)).await
    }

    pub async fn identity(&self, user_id: &str, identity_id: &str) -> Result<Identity, BasiqError> {
        let url = self.endpoint(&["users", user_id, "identities", identity_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn identities(&self, user_id: &str) -> Result<Vec<Identity>, BasiqError> {
        let url = self.endpoint(&["users", user_id, "identities"])?;
        let list: IdentityList = self.with_reauth(|| self.get_json(&url)).await?;
        Ok(list.data)
    }
}
