//! External wallet records for rewards accounts.
//!
//! A rewards account can be linked to a third-party payment wallet (Uphold, for
//! example) that receives earned funds. The ledger describes that wallet as a flat
//! JSON object; this crate decodes it into an immutable [`ExternalWalletRecord`],
//! writes it back in canonical form, and maps its status to a display label.
//!
//! # Quick example
//!
//! ```
//! use rewards_wallet::{status_label, ExternalWalletRecord, LabelTable, WalletStatus};
//!
//! let record = ExternalWalletRecord::parse(r#"{"status":2,"type":"uphold"}"#).unwrap();
//! assert_eq!(record.status(), Some(WalletStatus::Verified));
//! assert!(record.is_uphold());
//!
//! let labels = LabelTable::english();
//! assert_eq!(status_label(record.status_code(), &labels), "Verified");
//! ```

pub mod constants;
pub mod error;
pub mod labels;
pub mod record;
pub mod status;

// Re-exports
pub use constants::{RECOGNIZED_KEYS, WALLET_UPHOLD};
pub use error::{LabelError, ParseError};
pub use labels::{status_label, LabelTable, StatusLabels};
pub use record::ExternalWalletRecord;
pub use status::{StatusCode, WalletStatus};
