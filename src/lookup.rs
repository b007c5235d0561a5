#![forbid(unsafe_code)]

//! The mock data store behind `fizztool get`
//!
//! The store holds a single entry, `fizz`, whose value is `buzz`. Every other
//! key is reported as missing.

use crate::error::LookupError;
use serde::Serialize;

/// The only key the store knows about
pub const KNOWN_KEY: &str = "fizz";

/// Value stored under [`KNOWN_KEY`]
pub const KNOWN_VALUE: &str = "buzz";

/// A request for one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub key: String,
}

impl LookupRequest {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Resolve the request against the store
    pub fn resolve(&self) -> Result<FizzRecord, LookupError> {
        if self.key == KNOWN_KEY {
            Ok(FizzRecord {
                fizz: KNOWN_VALUE.to_string(),
            })
        } else {
            Err(LookupError::KeyNotFound {
                key: self.key.clone(),
            })
        }
    }
}

/// Successful lookup result, serialized as `{"fizz": "buzz"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FizzRecord {
    pub fizz: String,
}

/// Outcome of a lookup: the record, or the key that was not found
pub type LookupResult = Result<FizzRecord, LookupError>;

/// Look up a single key
pub fn lookup(key: &str) -> LookupResult {
    LookupRequest::new(key).resolve()
}
