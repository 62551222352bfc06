//! Adapters - concrete storage implementations

pub mod json;

pub use json::{JsonCredentialStore, JsonLedgerStore};
