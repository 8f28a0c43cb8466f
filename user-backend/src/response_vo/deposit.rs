#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Deposit {
    pub id: String,
    pub userid: String,
    pub wallet_address: String,
    pub wallet_type: String,
    pub chain_id: String,
    pub block: String,
    pub block_hash: String,
    pub tx_hash: String,
    pub sender: String,
    pub deposit_nonce: String,
    pub asset: String,
    /// Raw token amount in the asset's smallest unit.
    pub amount: String,
    /// USD value at deposit time.
    pub value: f64,
    pub created_at: String,
}
