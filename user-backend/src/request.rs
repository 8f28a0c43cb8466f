use crate::consts::query;

/// Body of the create call.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserReq {
    pub wallet_address: String,
    pub wallet_type: String,
}

impl CreateUserReq {
    pub fn new(wallet_address: &str, wallet_type: &str) -> Self {
        Self {
            wallet_address: wallet_address.to_string(),
            wallet_type: wallet_type.to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct UserByIdReq {
    pub query: &'static str,
    #[serde(rename = "user-id")]
    pub user_id: String,
}

impl UserByIdReq {
    pub fn new(user_id: &str) -> Self {
        Self {
            query: query::GET_USER_BY_ID,
            user_id: user_id.to_string(),
        }
    }

    pub fn deposits(user_id: &str) -> Self {
        Self {
            query: query::GET_DEPOSITS_BY_USER_ID,
            user_id: user_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct UserByAddressReq {
    pub query: &'static str,
    pub address: String,
    #[serde(rename = "type")]
    pub wallet_type: String,
}

impl UserByAddressReq {
    pub fn new(address: &str, wallet_type: &str) -> Self {
        Self {
            query: query::GET_USER_BY_ADDRESS,
            address: address.to_string(),
            wallet_type: wallet_type.to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DepositsByAddressReq {
    pub query: &'static str,
    #[serde(rename = "wallet-address")]
    pub wallet_address: String,
    #[serde(rename = "wallet-type")]
    pub wallet_type: String,
}

impl DepositsByAddressReq {
    pub fn new(wallet_address: &str, wallet_type: &str) -> Self {
        Self {
            query: query::GET_DEPOSITS_BY_USER_ADDRESS,
            wallet_address: wallet_address.to_string(),
            wallet_type: wallet_type.to_string(),
        }
    }
}

/// Optional filters shared by both stake lookups.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct StakeFilter {
    #[serde(rename = "stake-type", skip_serializing_if = "Option::is_none")]
    pub stake_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl StakeFilter {
    pub fn with_stake_type(mut self, stake_type: &str) -> Self {
        self.stake_type = Some(stake_type.to_string());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct StakesByIdReq {
    pub query: &'static str,
    #[serde(rename = "user-id")]
    pub user_id: String,
    #[serde(flatten)]
    pub filter: StakeFilter,
}

impl StakesByIdReq {
    pub fn new(user_id: &str, filter: StakeFilter) -> Self {
        Self {
            query: query::GET_STAKES_BY_USER_ID,
            user_id: user_id.to_string(),
            filter,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct StakesByAddressReq {
    pub query: &'static str,
    #[serde(rename = "wallet-address")]
    pub wallet_address: String,
    #[serde(rename = "wallet-type")]
    pub wallet_type: String,
    #[serde(flatten)]
    pub filter: StakeFilter,
}

impl StakesByAddressReq {
    pub fn new(wallet_address: &str, wallet_type: &str, filter: StakeFilter) -> Self {
        Self {
            query: query::GET_STAKES_BY_USER_ADDRESS,
            wallet_address: wallet_address.to_string(),
            wallet_type: wallet_type.to_string(),
            filter,
        }
    }
}
