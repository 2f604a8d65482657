//! Display labels for wallet status codes.
//!
//! - [`StatusLabels`] — host-supplied lookup from a resource key to a localized string
//! - [`LabelTable`] — map-backed implementation, loadable from JSON
//! - [`status_label`] — resolves a status code through a provider at call time

use crate::error::LabelError;
use crate::status::{StatusCode, WalletStatus};
use serde_json::Value;
use std::collections::HashMap;

/// Source of localized status strings, keyed by [`WalletStatus::resource_key`].
pub trait StatusLabels {
    /// Look up the display string for a resource key.
    fn resolve(&self, resource_key: &str) -> Option<String>;
}

impl<T: StatusLabels + ?Sized> StatusLabels for &T {
    fn resolve(&self, resource_key: &str) -> Option<String> {
        (**self).resolve(resource_key)
    }
}

/// Label for a status code, or an empty string when the code is out of range
/// or the provider has no entry for it.
pub fn status_label(status: impl Into<StatusCode>, labels: &impl StatusLabels) -> String {
    let code = status.into();
    let Some(status) = code.wallet_status() else {
        return String::new();
    };

    match labels.resolve(status.resource_key()) {
        Some(label) => label,
        None => {
            tracing::warn!(
                resource_key = status.resource_key(),
                "no label for wallet status"
            );
            String::new()
        }
    }
}

/// In-memory label table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: HashMap<String, String>,
}

impl LabelTable {
    /// Built-in English labels.
    pub fn english() -> Self {
        WalletStatus::ALL
            .into_iter()
            .map(|status| {
                let label = match status {
                    WalletStatus::NotConnected => "Not connected",
                    WalletStatus::Connected => "Connected",
                    WalletStatus::Verified => "Verified",
                    WalletStatus::DisconnectedNotVerified => "Disconnected (not verified)",
                    WalletStatus::DisconnectedVerified => "Disconnected (verified)",
                    WalletStatus::Pending => "Pending",
                };
                (status.resource_key().to_string(), label.to_string())
            })
            .collect()
    }

    /// Parse a table from a JSON object of resource key to string.
    ///
    /// Keys that are not status resource keys are kept; a table may carry other
    /// strings of the host's locale bundle.
    pub fn from_json(json: &str) -> Result<Self, LabelError> {
        let Value::Object(map) = serde_json::from_str::<Value>(json)? else {
            return Err(LabelError::InvalidTable(
                "expected a JSON object of strings".to_string(),
            ));
        };

        map.into_iter()
            .map(|(key, value)| match value {
                Value::String(label) => Ok((key, label)),
                _ => Err(LabelError::InvalidTable(format!(
                    "label for `{key}` must be a string"
                ))),
            })
            .collect()
    }

    pub fn insert(&mut self, resource_key: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(resource_key.into(), label.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Statuses this table has no label for.
    pub fn missing(&self) -> Vec<WalletStatus> {
        WalletStatus::ALL
            .into_iter()
            .filter(|s| !self.entries.contains_key(s.resource_key()))
            .collect()
    }
}

impl StatusLabels for LabelTable {
    fn resolve(&self, resource_key: &str) -> Option<String> {
        self.entries.get(resource_key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
