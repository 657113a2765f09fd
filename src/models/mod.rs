//! Typed shapes of the JSON documents exchanged with the API.
//!
//! The API omits and nulls fields freely, so scalar fields are `Option`s and
//! collections decode `null` as empty.

mod banking;
mod insight;
mod payment;
mod platform;
mod user;

pub use banking::*;
pub use insight::*;
pub use payment::*;
pub use platform::*;
pub use user::*;

use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Collection envelope: `{type, count, size, data: [...], links: {self, next}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct List<T> {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub count: Option<u64>,
    pub size: Option<u64>,
    pub total_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
    #[serde(default)]
    pub links: ListLinks,
}

/// Pages of a paginated collection share the list envelope.
pub(crate) type Page<T> = List<T>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

/// A `{type, id, links}` pointer to another resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceRef {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    #[serde(default)]
    pub links: SelfLink,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalAddress {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub formatted_address: Option<String>,
}

/// One dated amount in a history series.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChangeEntry {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub source: Option<String>,
    pub direction: Option<String>,
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Amounts arrive as strings (`"-12.50"`), numbers, empty strings or null.
pub(crate) fn deserialize_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Value> = Option::deserialize(deserializer)?;
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => parse_decimal(s.trim())
            .map(Some)
            .ok_or_else(|| D::Error::custom("invalid decimal value")),
        Some(Value::Number(n)) => parse_decimal(&n.to_string())
            .map(Some)
            .ok_or_else(|| D::Error::custom("invalid decimal value")),
        Some(_) => Err(D::Error::custom("expected decimal string or number")),
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
