use super::{List, SelfLink, deserialize_decimal_opt, null_as_empty};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST payments/payrequests`: a batch of collections.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequestParams {
    pub pay_requests: Vec<NewPayRequest>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayRequest {
    pub request_id: String,
    pub description: String,
    /// Amount in cents.
    pub amount: u64,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collect_funds_to_float: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub check_account_balance: bool,
    pub payer: PayerParams,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayerParams {
    pub payer_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_bank_branch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_account_number: Option<String>,
}

/// Body of `POST payments/payouts`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutParams {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub description: String,
    /// Amount in cents.
    pub amount: u64,
    pub payee: PayeeParams,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayeeParams {
    pub payee_user_id: String,
    pub payee_bank_branch_code: String,
    pub payee_account_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaymentReason {
    pub code: Option<String>,
    pub title: Option<String>,
    /// Pay requests send `details`, payouts send `detail`.
    #[serde(alias = "details")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaymentLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub request_id: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub method: Option<String>,
    pub status: Option<String>,
    pub reason: Option<PaymentReason>,
    pub payer: Option<Payer>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    #[serde(default)]
    pub links: PaymentLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payer {
    pub payer_user_id: Option<String>,
    pub payer_account_id: Option<String>,
    pub payer_bank_branch_code: Option<String>,
    pub payer_account_number: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub request_id: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub method: Option<String>,
    pub status: Option<String>,
    pub reason: Option<PaymentReason>,
    pub payee: Option<Payee>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    #[serde(default)]
    pub links: PaymentLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payee {
    pub payee_user_id: Option<String>,
    pub payee_account_id: Option<String>,
    pub payee_bank_branch_code: Option<String>,
    pub payee_account_number: Option<String>,
}

/// Jobs created by a pay request or payout submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentJobList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub jobs: Vec<PaymentJob>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentJob {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub request_id: Option<String>,
    #[serde(default)]
    pub links: SelfLink,
}

pub type FloatAccountList = List<FloatAccount>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloatAccount {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub bank_branch_code: Option<String>,
    pub account_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub available_balance: Option<Decimal>,
    pub status: Option<String>,
    #[serde(default)]
    pub links: SelfLink,
}
