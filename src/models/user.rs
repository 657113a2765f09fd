use super::{List, ResourceRef, SelfLink, null_as_empty};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub name: Option<String>,
    pub business_name: Option<String>,
    pub business_id_no: Option<String>,
    pub accounts: Option<List<ResourceRef>>,
    pub connections: Option<List<ResourceRef>>,
    #[serde(default)]
    pub links: UserLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserLinks {
    pub accounts: Option<String>,
    pub connections: Option<String>,
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub transactions: Option<String>,
}

/// Body of create/update user calls. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthLink {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    /// Sent as a number by some API versions and as a string by others.
    pub mobile: Option<serde_json::Value>,
    pub user_id: Option<String>,
    pub expires_at: Option<String>,
    #[serde(default)]
    pub links: AuthLinkLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthLinkLinks {
    pub public: Option<String>,
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuthLinkParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

pub type UserConsentList = List<UserConsent>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConsent {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub expiry_date: Option<String>,
    pub status: Option<String>,
    pub purpose: Option<ConsentPurpose>,
    pub data: Option<ConsentData>,
    #[serde(default)]
    pub links: SelfLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConsentPurpose {
    pub primary: Option<PurposeText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PurposeText {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentData {
    pub retain_data: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub permissions: Vec<ConsentPermission>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConsentPermission {
    pub scope: Option<String>,
    pub required: Option<bool>,
    pub entity: Option<String>,
    pub information: Option<PermissionInformation>,
    pub purpose: Option<PurposeText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionInformation {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attribute_list: Vec<String>,
}
