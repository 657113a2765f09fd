use crate::client::Client;
use crate::error::BasiqError;
use crate::models::{
    FloatAccount, FloatAccountList, PayRequest, PayRequestParams, PaymentJobList, Payout,
    PayoutParams,
};
use log::info;
use reqwest::Method;

impl Client {
    pub async fn pay_request(&self, pay_request_id: &str) -> Result<PayRequest, BasiqError> {
        let url = self.endpoint(&["payments", "payrequests", pay_request_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    /// All pay requests, across every page.
    pub async fn pay_requests(&self) -> Result<Vec<PayRequest>, BasiqError> {
        let url = self.endpoint(&["payments", "payrequests"])?;
        self.with_reauth(|| self.collect_pages(&url)).await
    }

    /// Submit a batch of pay requests. Each one is processed asynchronously;
    /// poll the returned jobs for the outcome.
    pub async fn create_pay_requests(
        &self,
        params: &PayRequestParams,
    ) -> Result<PaymentJobList, BasiqError> {
        if params.pay_requests.is_empty() {
            return Err(BasiqError::InvalidParameter(
                "at least one pay request is required",
            ));
        }
        let url = self.endpoint(&["payments", "payrequests"])?;
        let jobs: PaymentJobList = self
            .with_reauth(|| self.send_json(Method::POST, &url, Some(params)))
            .await?;
        info!("Submitted {} pay requests", jobs.jobs.len());
        Ok(jobs)
    }

    pub async fn payout(&self, payout_id: &str) -> Result<Payout, BasiqError> {
        let url = self.endpoint(&["payments", "payouts", payout_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn payouts(&self) -> Result<Vec<Payout>, BasiqError> {
        let url = self.endpoint(&["payments", "payouts"])?;
        self.with_reauth(|| self.collect_pages(&url)).await
    }

    pub async fn create_payout(&self, params: &PayoutParams) -> Result<PaymentJobList, BasiqError> {
        let url = self.endpoint(&["payments", "payouts"])?;
        let jobs: PaymentJobList = self
            .with_reauth(|| self.send_json(Method::POST, &url, Some(params)))
            .await?;
        info!("Submitted payout {}", params.request_id);
        Ok(jobs)
    }

    pub async fn float_account(&self, float_account_id: &str) -> Result<FloatAccount, BasiqError> {
        let url = self.endpoint(&["payments", "float-accounts", float_account_id])?;
        self.with_reauth(|| self.get_json(&url)).await
    }

    pub async fn float_accounts(&self) -> Result<FloatAccountList, BasiqError> {
        let url = self.endpoint(&["payments", "float-accounts"])?;
        self.with_reauth(|| self.get_json(&url)).await
    }
}
