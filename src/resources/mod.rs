//! Endpoint methods on [`Client`](crate::Client), grouped by API area. Every
//! call goes through the reauthenticate-once policy.

mod banking;
mod insights;
mod payments;
mod platform;
mod users;
