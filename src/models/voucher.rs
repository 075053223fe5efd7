use serde::{Deserialize, Serialize};

/// A gift voucher. This is a private resource; fetching it requires an
/// API token. Lookups with an unknown id fail with the server's invalid
/// redemption code message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    pub id: Option<i64>,
    /// Redemption code printed on the voucher.
    pub code: Option<String>,
    /// Remaining value; representation varies by account.
    pub balance: Option<serde_json::Value>,
    pub expires_at: Option<String>,
}
