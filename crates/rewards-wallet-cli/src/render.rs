use rewards_wallet::{status_label, ExternalWalletRecord, StatusLabels};

/// Field listing for a record, one `name: value` line per field.
///
/// The token is never printed, only whether one is present.
pub fn summary(record: &ExternalWalletRecord, labels: &impl StatusLabels) -> String {
    let code = record.status_code();
    let label = status_label(code, labels);
    let status = if label.is_empty() {
        format!("{} (no label)", code.0)
    } else {
        format!("{} ({label})", code.0)
    };
    let token = if record.token().is_empty() {
        "(none)"
    } else {
        "[REDACTED]"
    };

    let rows = [
        ("type", record.wallet_type()),
        ("user_name", record.user_name()),
        ("address", record.address()),
        ("status", status.as_str()),
        ("token", token),
        ("account_url", record.account_url()),
        ("add_url", record.add_url()),
        ("verify_url", record.verify_url()),
        ("withdraw_url", record.withdraw_url()),
    ];

    rows.iter()
        .map(|(name, value)| format!("{:<13} {value}", format!("{name}:")))
        .collect::<Vec<_>>()
        .join("\n")
}
