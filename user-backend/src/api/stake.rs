use crate::{
    request::{StakeFilter, StakesByAddressReq, StakesByIdReq},
    response::ApiResponse,
    response_vo::stake::Stake,
};

use super::UserApi;

impl UserApi {
    pub async fn get_stakes_by_user_id(
        &self,
        user_id: &str,
        filter: StakeFilter,
    ) -> Result<ApiResponse<Vec<Stake>>, crate::Error> {
        self.get_request(&StakesByIdReq::new(user_id, filter)).await
    }

    pub async fn get_stakes_by_user_address(
        &self,
        wallet_address: &str,
        wallet_type: &str,
        filter: StakeFilter,
    ) -> Result<ApiResponse<Vec<Stake>>, crate::Error> {
        self.get_request(&StakesByAddressReq::new(wallet_address, wallet_type, filter))
            .await
    }
}
