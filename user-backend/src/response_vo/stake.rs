#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Stake {
    pub id: String,
    pub userid: String,
    pub stake_type: String,
    pub amount: f64,
    pub created_at: String,
}
