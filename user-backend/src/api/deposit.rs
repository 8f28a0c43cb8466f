use crate::{
    request::{DepositsByAddressReq, UserByIdReq},
    response::ApiResponse,
    response_vo::deposit::Deposit,
};

use super::UserApi;

impl UserApi {
    pub async fn get_deposits_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<Vec<Deposit>>, crate::Error> {
        self.get_request(&UserByIdReq::deposits(user_id)).await
    }

    pub async fn get_deposits_by_user_address(
        &self,
        wallet_address: &str,
        wallet_type: &str,
    ) -> Result<ApiResponse<Vec<Deposit>>, crate::Error> {
        self.get_request(&DepositsByAddressReq::new(wallet_address, wallet_type))
            .await
    }
}
