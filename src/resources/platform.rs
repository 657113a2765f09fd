use crate::client::Client;
use crate::error::BasiqError;
use crate::models::{Connector, ConnectorList, EventList, Job, JobList, Mfa, MfaParams};
use reqwest::Method;

impl Client {
    pub async fn job(&self, job_id: &str) -> Result<Job, BasiqError> {
        let url = self.endpoint(&["jobs", job_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn user_jobs(&self, user_id: &str) -> Result<JobList, BasiqError> {
        let url = self.endpoint(&["users", user_id, "jobs"])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    /// Answer the multi-factor challenge a connection job is waiting on.
    pub async fn create_mfa_response(
        &self,
        job_id: &str,
        params: &MfaParams,
    ) -> Result<Mfa, BasiqError> {
        let url = self.endpoint(&["jobs", job_id, "mfa"])?;
        self.with_reauth(|| self.send_json(Method::POST, &url, Some(params)))
            .await
    }

    /// Look up one institution connector; `method` is e.g. `web` or `open-banking`.
    pub async fn connector(&self, connector_id: &str, method: &str) -> Result<Connector, BasiqError> {
        let url = self.endpoint(&["connectors", connector_id, method])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn connectors(&self) -> Result<ConnectorList, BasiqError> {
        let url = self.endpoint(&["connectors"])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn events(&self) -> Result<EventList, BasiqError> {
        let url = self.endpoint(&["events"])?;
        self.with_reauth(|| self.get_json(&url)).await
    }
}
