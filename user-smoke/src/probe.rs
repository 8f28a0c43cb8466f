use std::fmt::Debug;

use user_backend::{request::StakeFilter, ApiResponse, Deposit, Stake, User, UserApi};

/// Request helpers for a smoke run.
///
/// Each helper issues exactly one request and never fails: the outcome is logged
/// and a failed call resolves to `None`.
#[derive(Debug, Clone, Copy)]
pub struct UserProbe<'a> {
    api: &'a UserApi,
}

impl<'a> UserProbe<'a> {
    pub fn new(api: &'a UserApi) -> Self {
        Self { api }
    }

    pub async fn create_user(
        &self,
        wallet_address: &str,
        wallet_type: &str,
    ) -> Option<ApiResponse<User>> {
        let res = self.api.create_user(wallet_address, wallet_type).await;
        settle("User created", "Error creating user", res)
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Option<ApiResponse<User>> {
        let res = self.api.get_user_by_id(user_id).await;
        settle("User found by ID", "Error fetching user by ID", res)
    }

    pub async fn get_user_by_address(
        &self,
        wallet_address: &str,
        wallet_type: &str,
    ) -> Option<ApiResponse<User>> {
        let res = self.api.get_user_by_address(wallet_address, wallet_type).await;
        settle("User found by address", "Error fetching user by address", res)
    }

    pub async fn get_deposits_by_user_id(
        &self,
        user_id: &str,
    ) -> Option<ApiResponse<Vec<Deposit>>> {
        let res = self.api.get_deposits_by_user_id(user_id).await;
        settle("Deposits found by ID", "Error fetching deposits by ID", res)
    }

    pub async fn get_deposits_by_user_address(
        &self,
        wallet_address: &str,
        wallet_type: &str,
    ) -> Option<ApiResponse<Vec<Deposit>>> {
        let res = self
            .api
            .get_deposits_by_user_address(wallet_address, wallet_type)
            .await;
        settle(
            "Deposits found by address",
            "Error fetching deposits by address",
            res,
        )
    }

    pub async fn get_stakes_by_user_id(
        &self,
        user_id: &str,
        filter: StakeFilter,
    ) -> Option<ApiResponse<Vec<Stake>>> {
        let res = self.api.get_stakes_by_user_id(user_id, filter).await;
        settle("Stakes found by ID", "Error fetching stakes by ID", res)
    }

    pub async fn get_stakes_by_user_address(
        &self,
        wallet_address: &str,
        wallet_type: &str,
        filter: StakeFilter,
    ) -> Option<ApiResponse<Vec<Stake>>> {
        let res = self
            .api
            .get_stakes_by_user_address(wallet_address, wallet_type, filter)
            .await;
        settle("Stakes found by address", "Error fetching stakes by address", res)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    /// The service answered with a non-2xx status.
    Remote,
    /// No response arrived.
    Network,
    Unexpected,
}

impl Failure {
    fn of(err: &user_backend::Error) -> Self {
        if err.is_backend_error() {
            Failure::Remote
        } else if err.is_network_error() {
            Failure::Network
        } else {
            Failure::Unexpected
        }
    }
}

fn settle<T: Debug>(
    found: &str,
    failed: &str,
    res: Result<T, user_backend::Error>,
) -> Option<T> {
    let err = match res {
        Ok(value) => {
            tracing::info!("{found}: {value:?}");
            return Some(value);
        }
        Err(err) => err,
    };

    match (Failure::of(&err), &err) {
        (Failure::Remote, user_backend::Error::Backend(e)) => match &e.detail {
            Some(detail) => tracing::error!(status = e.status, "{failed}: {detail:?}"),
            None => tracing::error!(status = e.status, "{failed}: {}", e.body),
        },
        (Failure::Network, _) => tracing::error!("{failed}: network error: {err}"),
        _ => tracing::error!("{failed}: unexpected error: {err}"),
    }
    None
}
