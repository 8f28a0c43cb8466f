#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub userid: String,
    pub wallet_address: String,
    /// Signature scheme of the wallet, e.g. `ecdsa`.
    pub wallet_type: String,
    pub balance: f64,
    pub perp_balance: f64,
    pub escrow_balance: f64,
    pub stake_balance: f64,
    pub frozen_balance: f64,
    pub created_at: String,
}
