//! Connection state of an external wallet.
//!
//! The wire format carries the state as a plain integer. [`StatusCode`] keeps that
//! integer exactly as received, including values no [`WalletStatus`] variant covers,
//! so a record never loses information the upstream ledger sent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six connection states an external wallet can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum WalletStatus {
    NotConnected = 0,
    Connected = 1,
    Verified = 2,
    DisconnectedNotVerified = 3,
    DisconnectedVerified = 4,
    Pending = 5,
}

impl WalletStatus {
    /// Every variant, in wire order.
    pub const ALL: [WalletStatus; 6] = [
        WalletStatus::NotConnected,
        WalletStatus::Connected,
        WalletStatus::Verified,
        WalletStatus::DisconnectedNotVerified,
        WalletStatus::DisconnectedVerified,
        WalletStatus::Pending,
    ];

    /// Integer used for this state on the wire.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Key of the localized display string for this state.
    pub fn resource_key(self) -> &'static str {
        match self {
            WalletStatus::NotConnected => "user_wallet_status_not_connected",
            WalletStatus::Connected => "user_wallet_status_connected",
            WalletStatus::Verified => "user_wallet_status_verified",
            WalletStatus::DisconnectedNotVerified => {
                "user_wallet_status_disconnected_not_verified"
            }
            WalletStatus::DisconnectedVerified => "user_wallet_status_disconnected_verified",
            WalletStatus::Pending => "user_wallet_status_pending",
        }
    }

    /// True for the states reached after the provider verification flow.
    pub fn is_verified(self) -> bool {
        matches!(
            self,
            WalletStatus::Verified | WalletStatus::DisconnectedVerified
        )
    }
}

impl TryFrom<i32> for WalletStatus {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        WalletStatus::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(code)
    }
}

/// Raw status integer as stored in a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(pub i32);

impl StatusCode {
    /// The known state this code maps to, or `None` when out of range.
    pub fn wallet_status(self) -> Option<WalletStatus> {
        WalletStatus::try_from(self.0).ok()
    }
}

impl From<WalletStatus> for StatusCode {
    fn from(status: WalletStatus) -> Self {
        StatusCode(status.code())
    }
}

impl From<i32> for StatusCode {
    fn from(code: i32) -> Self {
        StatusCode(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wallet_status() {
            Some(status) => write!(f, "{status:?}"),
            None => write!(f, "Unknown({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_wire_order() {
        for (i, status) in WalletStatus::ALL.iter().enumerate() {
            assert_eq!(status.code(), i as i32);
            assert_eq!(WalletStatus::try_from(i as i32), Ok(*status));
        }
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(WalletStatus::try_from(6), Err(6));
        assert_eq!(WalletStatus::try_from(-1), Err(-1));
        assert_eq!(StatusCode(42).wallet_status(), None);
    }

    #[test]
    fn default_code_is_not_connected() {
        assert_eq!(
            StatusCode::default().wallet_status(),
            Some(WalletStatus::NotConnected)
        );
    }

    #[test]
    fn verified_states() {
        assert!(WalletStatus::Verified.is_verified());
        assert!(WalletStatus::DisconnectedVerified.is_verified());
        assert!(!WalletStatus::Connected.is_verified());
        assert!(!WalletStatus::Pending.is_verified());
    }

    #[test]
    fn display_names_unknown_codes() {
        assert_eq!(StatusCode(2).to_string(), "Verified");
        assert_eq!(StatusCode(9).to_string(), "Unknown(9)");
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&StatusCode::from(WalletStatus::Pending)).unwrap();
        assert_eq!(json, "5");
    }
}
