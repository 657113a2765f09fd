use super::{List, SelfLink, null_as_empty};
use serde::{Deserialize, Serialize};

pub type JobList = List<Job>;

/// Progress of an asynchronous operation (connection refresh, payment, ...).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub institution: Option<JobInstitution>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub steps: Vec<JobStep>,
    #[serde(default)]
    pub links: JobLinks,
}

impl Job {
    /// True once every step reports `success`.
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty()
            && self
                .steps
                .iter()
                .all(|s| s.status.as_deref() == Some("success"))
    }

    /// The first step that reported `failed`, if any.
    pub fn failed_step(&self) -> Option<&JobStep> {
        self.steps
            .iter()
            .find(|s| s.status.as_deref() == Some("failed"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobInstitution {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    #[serde(default)]
    pub links: JobLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobStep {
    pub title: Option<String>,
    pub status: Option<String>,
    pub result: Option<StepResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StepResult {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub code: Option<String>,
    pub title: Option<String>,
    pub details: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub source: Option<String>,
}

/// Answers to a multi-factor challenge raised by a connection job.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MfaParams {
    #[serde(rename = "mfa-response")]
    pub mfa_response: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Mfa {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    #[serde(default)]
    pub links: SelfLink,
}

pub type ConnectorList = List<Connector>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub status: Option<String>,
    pub method: Option<String>,
    pub authorization: Option<ConnectorAuthorization>,
    pub institution: Option<ConnectorInstitution>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scopes: Vec<String>,
    pub stage: Option<String>,
    pub stats: Option<ConnectorStats>,
    #[serde(default)]
    pub links: SelfLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConnectorAuthorization {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub meta: Option<LoginCaptions>,
}

/// Labels the institution uses on its login form. The API uses snake_case here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginCaptions {
    pub forgotten_password_url: Option<String>,
    pub login_id_caption: Option<String>,
    pub password_caption: Option<String>,
    pub secondary_login_id_caption: Option<String>,
    pub security_code_caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorInstitution {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub country: Option<String>,
    pub tier: Option<String>,
    pub logo: Option<Logo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Logo {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub colors: Option<LogoColors>,
    pub links: Option<LogoLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogoColors {
    pub primary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogoLinks {
    pub full: Option<String>,
    pub square: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorStats {
    pub average_duration_ms: Option<StageDurations>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageDurations {
    pub retrieve_accounts: Option<u64>,
    pub retrieve_meta: Option<u64>,
    pub retrieve_transactions: Option<u64>,
    pub total: Option<u64>,
    pub verify_credentials: Option<u64>,
}

pub type EventList = List<Event>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub created_date: Option<String>,
    pub entity: Option<String>,
    pub event_type: Option<String>,
    pub user_id: Option<String>,
    pub data_ref: Option<String>,
    /// Payload of the event; its shape depends on `entity`.
    pub data: Option<serde_json::Value>,
    pub links: Option<serde_json::Value>,
}
