use crate::{
    consts::endpoint,
    request::{CreateUserReq, UserByAddressReq, UserByIdReq},
    response::ApiResponse,
    response_vo::user::User,
};

use super::UserApi;

impl UserApi {
    /// Registers a wallet. The service resolves the user by address in the same call.
    pub async fn create_user(
        &self,
        wallet_address: &str,
        wallet_type: &str,
    ) -> Result<ApiResponse<User>, crate::Error> {
        let req = CreateUserReq::new(wallet_address, wallet_type);
        let query = UserByAddressReq::new(wallet_address, wallet_type);

        let res = self
            .client
            .post(endpoint::USER)
            .query(&query)
            .json(&req)
            .send::<ApiResponse<User>>()
            .await?;
        Ok(res)
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<ApiResponse<User>, crate::Error> {
        self.get_request(&UserByIdReq::new(user_id)).await
    }

    pub async fn get_user_by_address(
        &self,
        wallet_address: &str,
        wallet_type: &str,
    ) -> Result<ApiResponse<User>, crate::Error> {
        self.get_request(&UserByAddressReq::new(wallet_address, wallet_type))
            .await
    }
}
