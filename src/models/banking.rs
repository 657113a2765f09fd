use super::{List, PhysicalAddress, ResourceRef, deserialize_decimal_opt, null_as_empty};
use rust_decimal::Decimal;
use serde::Deserialize;

pub type AccountList = List<Account>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub account_holder: Option<String>,
    pub account_no: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub available_funds: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub balance: Option<Decimal>,
    /// A single object in API v3, an array in older payloads.
    pub class: Option<serde_json::Value>,
    pub connection: Option<String>,
    pub currency: Option<String>,
    pub institution: Option<String>,
    pub last_updated: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transaction_intervals: Vec<TransactionInterval>,
    #[serde(default)]
    pub links: AccountLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountClass {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub product: Option<String>,
}

impl Account {
    /// Account classes, whichever shape the API sent.
    pub fn classes(&self) -> Vec<AccountClass> {
        match &self.class {
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect(),
            Some(v @ serde_json::Value::Object(_)) => {
                serde_json::from_value(v.clone()).into_iter().collect()
            }
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransactionInterval {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountLinks {
    pub institution: Option<String>,
    pub transactions: Option<String>,
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub account: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub balance: Option<Decimal>,
    pub class: Option<String>,
    pub connection: Option<String>,
    pub description: Option<String>,
    pub direction: Option<String>,
    pub enrich: Option<Enrich>,
    pub institution: Option<String>,
    pub post_date: Option<String>,
    pub status: Option<String>,
    pub transaction_date: Option<String>,
    pub sub_class: Option<CodeTitle>,
    #[serde(default)]
    pub links: TransactionLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransactionLinks {
    pub account: Option<String>,
    pub institution: Option<String>,
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

/// Merchant, location and category data attached to a transaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Enrich {
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub merchant: Option<Merchant>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub anzsic: Option<Anzsic>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Anzsic {
    pub division: Option<CodeTitle>,
    pub subdivision: Option<CodeTitle>,
    pub group: Option<CodeTitle>,
    pub class: Option<CodeTitle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CodeTitle {
    pub code: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub country: Option<String>,
    pub formatted_address: Option<String>,
    pub geometry: Option<Geometry>,
    pub postal_code: Option<String>,
    pub route: Option<String>,
    pub route_no: Option<String>,
    pub state: Option<String>,
    pub suburb: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Geometry {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: Option<String>,
    pub business_name: Option<String>,
    #[serde(rename = "ABN")]
    pub abn: Option<serde_json::Value>,
    pub logo_master: Option<String>,
    pub logo_thumb: Option<String>,
    pub phone_number: Option<PhoneNumber>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PhoneNumber {
    pub international: Option<String>,
    pub local: Option<String>,
}

pub type ConnectionList = List<Connection>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub method: Option<String>,
    pub created_date: Option<String>,
    pub last_used: Option<String>,
    pub status: Option<String>,
    pub accounts: Option<List<ConnectionAccount>>,
    pub institution: Option<ResourceRef>,
    pub profile: Option<Profile>,
    #[serde(default)]
    pub links: ConnectionLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionAccount {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub currency: Option<String>,
    pub class: Option<AccountClass>,
    pub account_no: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub available_funds: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub balance: Option<Decimal>,
    pub last_updated: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub links: AccountLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email_addresses: Vec<String>,
    pub first_name: Option<String>,
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_numbers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub physical_addresses: Vec<PhysicalAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConnectionLinks {
    pub accounts: Option<String>,
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub transactions: Option<String>,
    pub user: Option<String>,
}

pub type IdentityList = List<Identity>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub source: Option<String>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "DOB")]
    pub dob: Option<String>,
    pub occupation_code: Option<String>,
    pub occupation_code_version: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_numbers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub physical_addresses: Vec<PhysicalAddress>,
    pub organisation: Option<Organisation>,
    #[serde(default)]
    pub links: IdentityLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdentityLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    pub agent_first_name: Option<String>,
    pub agent_last_name: Option<String>,
    pub agent_role: Option<String>,
    pub business_name: Option<String>,
    pub legal_name: Option<String>,
    pub short_name: Option<String>,
    pub abn: Option<String>,
    pub acn: Option<String>,
    #[serde(rename = "isACNCRegistered")]
    pub is_acnc_registered: Option<bool>,
    pub industry_code: Option<String>,
    pub industry_code_version: Option<String>,
    pub organisation_type: Option<String>,
    pub registered_country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn parses_account_with_object_class() {
        let account: Account = serde_json::from_value(json!({
            "type": "account",
            "id": "s55bf3",
            "accountNo": "600000-157441965",
            "availableFunds": "7085.74",
            "balance": "-1300.39",
            "class": { "type": "transaction", "product": "Everyday Account" },
            "currency": "AUD",
            "institution": "AU00000",
            "name": "Master Savings",
            "status": "available",
            "transactionIntervals": [{ "from": "2018-06-01", "to": "2019-04-15" }],
            "links": { "self": "/users/u/accounts/s55bf3", "transactions": "/users/u/transactions" }
        }))
        .unwrap();
        assert_eq!(account.balance, Some(Decimal::from_str("-1300.39").unwrap()));
        assert_eq!(account.transaction_intervals.len(), 1);
        let classes = account.classes();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].product.as_deref(), Some("Everyday Account"));
    }

    #[test]
    fn parses_account_with_array_class() {
        let account: Account = serde_json::from_value(json!({
            "id": "a1",
            "class": [
                { "type": "savings", "product": "Saver" },
                { "type": "transaction", "product": "Everyday" }
            ]
        }))
        .unwrap();
        assert_eq!(account.classes().len(), 2);
    }

    #[test]
    fn parses_enriched_transaction() {
        let txn: Transaction = serde_json::from_value(json!({
            "type": "transaction",
            "id": "0f0b2d",
            "account": "aaaf2c3b",
            "amount": "-49.95",
            "balance": "",
            "class": "payment",
            "description": "NETFLIX.COM",
            "direction": "debit",
            "postDate": "2023-01-04T00:00:00Z",
            "status": "posted",
            "enrich": {
                "category": {
                    "anzsic": {
                        "division": { "code": "J", "title": "Information Media" },
                        "class": { "code": "5600", "title": "Broadcasting" }
                    }
                },
                "location": { "country": "Australia", "geometry": { "lat": "-33.8", "lng": "151.2" } },
                "merchant": {
                    "businessName": "Netflix",
                    "ABN": 12345678901_i64,
                    "phoneNumber": { "international": "+61 2 0000 0000" }
                }
            },
            "links": { "account": "/users/u/accounts/aaaf2c3b" }
        }))
        .unwrap();
        assert_eq!(txn.amount, Some(Decimal::from_str("-49.95").unwrap()));
        assert_eq!(txn.balance, None);
        let enrich = txn.enrich.unwrap();
        let division = enrich.category.unwrap().anzsic.unwrap().division.unwrap();
        assert_eq!(division.code.as_deref(), Some("J"));
        assert_eq!(
            enrich.merchant.unwrap().business_name.as_deref(),
            Some("Netflix")
        );
    }

    #[test]
    fn parses_connection_profile() {
        let connection: Connection = serde_json::from_value(json!({
            "type": "connection",
            "id": "8fce3b",
            "status": "active",
            "institution": { "type": "institution", "id": "AU00000", "links": { "self": "/institutions/AU00000" } },
            "accounts": { "type": "list", "data": [{ "id": "acc-1", "balance": "10.00" }] },
            "profile": {
                "fullName": "Gavin Belson",
                "emailAddresses": ["gavin@hooli.com"],
                "physicalAddresses": [{ "city": "Sydney", "postcode": "2000" }]
            }
        }))
        .unwrap();
        assert_eq!(
            connection.institution.unwrap().id.as_deref(),
            Some("AU00000")
        );
        let profile = connection.profile.unwrap();
        assert_eq!(profile.physical_addresses[0].city.as_deref(), Some("Sydney"));
        assert_eq!(connection.accounts.unwrap().data.len(), 1);
    }
}
