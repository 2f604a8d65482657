/// Provider identifier reported in the `type` field for Uphold wallets.
pub const WALLET_UPHOLD: &str = "uphold";

/// Link to the wallet's account page.
pub const ACCOUNT_URL: &str = "account_url";

/// Link to add funds.
pub const ADD_URL: &str = "add_url";

/// Wallet address.
pub const ADDRESS: &str = "address";

/// Integer connection state, see [`crate::WalletStatus`].
pub const STATUS: &str = "status";

/// Provider auth token. Never log its value.
pub const TOKEN: &str = "token";

/// Provider identifier, e.g. [`WALLET_UPHOLD`].
pub const TYPE: &str = "type";

/// Display name of the wallet owner.
pub const USER_NAME: &str = "user_name";

/// Link to complete provider verification.
pub const VERIFY_URL: &str = "verify_url";

/// Link to withdraw funds.
pub const WITHDRAW_URL: &str = "withdraw_url";

/// Every key the parser projects into a record. Anything else is skipped.
pub const RECOGNIZED_KEYS: [&str; 9] = [
    ACCOUNT_URL,
    ADD_URL,
    ADDRESS,
    STATUS,
    TOKEN,
    TYPE,
    USER_NAME,
    VERIFY_URL,
    WITHDRAW_URL,
];
