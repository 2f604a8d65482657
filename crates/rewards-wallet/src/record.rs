//! The external wallet record and its JSON codec.
//!
//! Decoding happens in two steps: the payload is first read into a generic
//! `serde_json::Map`, then the recognized keys are projected into an
//! [`ExternalWalletRecord`]. A record is either fully built or not built at all.

use crate::constants::{self, WALLET_UPHOLD};
use crate::error::ParseError;
use crate::status::{StatusCode, WalletStatus};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Snapshot of an external wallet linked to a rewards account.
///
/// Absent string fields are empty, an absent status is [`WalletStatus::NotConnected`].
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExternalWalletRecord {
    account_url: String,
    add_url: String,
    address: String,
    status: StatusCode,
    token: String,
    #[serde(rename = "type")]
    wallet_type: String,
    user_name: String,
    verify_url: String,
    withdraw_url: String,
}

impl ExternalWalletRecord {
    /// Parse a record from a JSON object string.
    ///
    /// Unknown keys are skipped whatever their type. A recognized key with the
    /// wrong type, or input that is not a single JSON object, is
    /// [`ParseError::MalformedJson`].
    pub fn parse(json: &str) -> Result<Self, ParseError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Self::try_from(map),
            other => Err(ParseError::MalformedJson(format!(
                "expected a JSON object, found {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Canonical JSON form. Every key is written, status as an integer.
    pub fn to_json(&self) -> Result<String, ParseError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn account_url(&self) -> &str {
        &self.account_url
    }

    pub fn add_url(&self) -> &str {
        &self.add_url
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Raw status as received, possibly outside the known range.
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Known status, or `None` when the stored code is out of range.
    pub fn status(&self) -> Option<WalletStatus> {
        self.status.wallet_status()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Provider identifier, e.g. `"uphold"`.
    pub fn wallet_type(&self) -> &str {
        &self.wallet_type
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }

    pub fn withdraw_url(&self) -> &str {
        &self.withdraw_url
    }

    pub fn is_uphold(&self) -> bool {
        self.wallet_type == WALLET_UPHOLD
    }

    /// The link a verification screen should open, if the provider sent one.
    pub fn verification_url(&self) -> Option<&str> {
        Some(self.verify_url.as_str()).filter(|url| !url.is_empty())
    }
}

impl TryFrom<Map<String, Value>> for ExternalWalletRecord {
    type Error = ParseError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut record = ExternalWalletRecord::default();

        for (key, value) in map {
            match key.as_str() {
                constants::ACCOUNT_URL => record.account_url = string_field(&key, value)?,
                constants::ADD_URL => record.add_url = string_field(&key, value)?,
                constants::ADDRESS => record.address = string_field(&key, value)?,
                constants::STATUS => record.status = status_field(value)?,
                constants::TOKEN => record.token = string_field(&key, value)?,
                constants::TYPE => record.wallet_type = string_field(&key, value)?,
                constants::USER_NAME => record.user_name = string_field(&key, value)?,
                constants::VERIFY_URL => record.verify_url = string_field(&key, value)?,
                constants::WITHDRAW_URL => record.withdraw_url = string_field(&key, value)?,
                _ => tracing::debug!(key = %key, "skipping unrecognized wallet key"),
            }
        }

        Ok(record)
    }
}

impl FromStr for ExternalWalletRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for ExternalWalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalWalletRecord")
            .field("account_url", &self.account_url)
            .field("add_url", &self.add_url)
            .field("address", &self.address)
            .field("status", &self.status)
            .field(
                "token",
                &if self.token.is_empty() {
                    ""
                } else {
                    "[REDACTED]"
                },
            )
            .field("type", &self.wallet_type)
            .field("user_name", &self.user_name)
            .field("verify_url", &self.verify_url)
            .field("withdraw_url", &self.withdraw_url)
            .finish()
    }
}

impl fmt::Display for ExternalWalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let provider = if self.wallet_type.is_empty() {
            "unknown"
        } else {
            self.wallet_type.as_str()
        };
        write!(f, "{provider} wallet")?;
        if !self.user_name.is_empty() {
            write!(f, " '{}'", self.user_name)?;
        }
        write!(f, " ({})", self.status)
    }
}

fn string_field(key: &str, value: Value) -> Result<String, ParseError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(ParseError::MalformedJson(format!(
            "`{key}` must be a string, found {}",
            json_type_name(&other)
        ))),
    }
}

fn status_field(value: Value) -> Result<StatusCode, ParseError> {
    let code = match &value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        _ => None,
    };
    let code = code.ok_or_else(|| {
        ParseError::MalformedJson(format!(
            "`{}` must be a 32-bit integer, found {value}",
            constants::STATUS
        ))
    })?;

    let status = StatusCode(code);
    if status.wallet_status().is_none() {
        tracing::debug!(code, "storing out-of-range wallet status");
    }
    Ok(status)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(json: &str) -> bool {
        matches!(
            ExternalWalletRecord::parse(json),
            Err(ParseError::MalformedJson(_))
        )
    }

    #[test]
    fn test_parse_status_and_type() {
        let record = ExternalWalletRecord::parse(r#"{"status":2,"type":"uphold"}"#).unwrap();
        assert_eq!(record.status(), Some(WalletStatus::Verified));
        assert_eq!(record.wallet_type(), "uphold");
        assert!(record.is_uphold());
        assert_eq!(record.account_url(), "");
        assert_eq!(record.add_url(), "");
        assert_eq!(record.address(), "");
        assert_eq!(record.token(), "");
        assert_eq!(record.user_name(), "");
        assert_eq!(record.verify_url(), "");
        assert_eq!(record.withdraw_url(), "");
    }

    #[test]
    fn test_unknown_key_ignored() {
        let record = ExternalWalletRecord::parse(r#"{"foo":"bar","address":"0xabc"}"#).unwrap();
        assert_eq!(record.address(), "0xabc");
        assert_eq!(
            record,
            ExternalWalletRecord::parse(r#"{"address":"0xabc"}"#).unwrap()
        );
    }

    #[test]
    fn test_unknown_key_value_type_not_checked() {
        let json = r#"{"extra":{"nested":[1,2,null]},"flag":true,"n":null,"token":"t"}"#;
        let record = ExternalWalletRecord::parse(json).unwrap();
        assert_eq!(record.token(), "t");
    }

    #[test]
    fn test_empty_object_is_default() {
        let record = ExternalWalletRecord::parse("{}").unwrap();
        assert_eq!(record, ExternalWalletRecord::default());
        assert_eq!(record.status(), Some(WalletStatus::NotConnected));
    }

    #[test]
    fn test_malformed_inputs() {
        assert!(malformed("\"not an object\""));
        assert!(malformed("not an object"));
        assert!(malformed(r#"{"status":2,"type":"uph"#));
        assert!(malformed(r#"{"status":"notanumber"}"#));
        assert!(malformed("[]"));
        assert!(malformed(""));
        assert!(malformed(r#"{} {}"#));
    }

    #[test]
    fn test_wrong_type_for_string_field() {
        assert!(malformed(r#"{"address":5}"#));
        assert!(malformed(r#"{"user_name":null}"#));
        assert!(malformed(r#"{"verify_url":["https://x"]}"#));
    }

    #[test]
    fn test_status_must_be_i32() {
        assert!(malformed(r#"{"status":1.5}"#));
        assert!(malformed(r#"{"status":true}"#));
        assert!(malformed(r#"{"status":null}"#));
        assert!(malformed(r#"{"status":4294967296}"#));
        assert!(malformed(r#"{"status":"2"}"#));
    }

    #[test]
    fn test_out_of_range_status_is_kept() {
        let record = ExternalWalletRecord::parse(r#"{"status":17}"#).unwrap();
        assert_eq!(record.status_code(), StatusCode(17));
        assert_eq!(record.status(), None);

        let record = ExternalWalletRecord::parse(r#"{"status":-3}"#).unwrap();
        assert_eq!(record.status_code(), StatusCode(-3));
    }

    #[test]
    fn test_failure_returns_no_partial_record() {
        // The valid address before the bad status must not leak out anywhere.
        let err = ExternalWalletRecord::parse(r#"{"address":"0xabc","status":"x"}"#).unwrap_err();
        assert!(err.to_string().starts_with("malformed JSON"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let record =
            ExternalWalletRecord::parse(r#"{"user_name":"first","user_name":"second"}"#).unwrap();
        assert_eq!(record.user_name(), "second");
    }

    #[test]
    fn test_from_str() {
        let record: ExternalWalletRecord = r#"{"verify_url":"https://v"}"#.parse().unwrap();
        assert_eq!(record.verification_url(), Some("https://v"));
        assert_eq!(ExternalWalletRecord::default().verification_url(), None);
    }

    #[test]
    fn test_empty_verify_url_is_no_verification_url() {
        let record = ExternalWalletRecord::parse(r#"{"verify_url":""}"#).unwrap();
        assert_eq!(record.verify_url(), "");
        assert_eq!(record.verification_url(), None);
    }

    #[test]
    fn test_to_json_writes_every_key() {
        let json = ExternalWalletRecord::default().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), constants::RECOGNIZED_KEYS.len());
        for key in constants::RECOGNIZED_KEYS {
            assert!(map.contains_key(key), "missing {key}");
        }
        assert_eq!(map["status"], serde_json::json!(0));
    }

    #[test]
    fn test_debug_redacts_token() {
        let record = ExternalWalletRecord::parse(r#"{"token":"secret-token"}"#).unwrap();
        let debug = format!("{record:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_display_summary() {
        let record =
            ExternalWalletRecord::parse(r#"{"type":"uphold","user_name":"alice","status":1}"#)
                .unwrap();
        assert_eq!(record.to_string(), "uphold wallet 'alice' (Connected)");
        assert_eq!(
            ExternalWalletRecord::default().to_string(),
            "unknown wallet (NotConnected)"
        );
    }
}
