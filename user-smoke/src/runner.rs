use user_backend::{ApiResponse, User, UserApi};

use crate::{config::Fixtures, probe::UserProbe, SmokeConfig, SmokeError};

/// Outcome of one smoke run. `None` marks a step whose request failed.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct SmokeReport {
    pub created_user: Option<ApiResponse<User>>,
    pub user_by_id: Option<ApiResponse<User>>,
    pub user_by_address: Option<ApiResponse<User>>,
    pub non_existent_user: Option<ApiResponse<User>>,
}

impl SmokeReport {
    /// Checks the report against what a healthy service returns for `fixtures`.
    pub fn check(&self, fixtures: &Fixtures) -> Result<(), SmokeError> {
        let mut failed = Vec::new();

        match &self.created_user {
            Some(res) if res.data.wallet_address != fixtures.wallet_address => failed.push(format!(
                "created user has wallet address {}, expected {}",
                res.data.wallet_address, fixtures.wallet_address
            )),
            Some(_) => {}
            None => failed.push("create user returned no result".to_string()),
        }

        match &self.user_by_id {
            Some(res) if res.data.userid != fixtures.user_id => failed.push(format!(
                "user by id has userid {}, expected {}",
                res.data.userid, fixtures.user_id
            )),
            Some(_) => {}
            None => failed.push(format!("user {} not found by id", fixtures.user_id)),
        }

        match &self.user_by_address {
            Some(res)
                if res.data.wallet_address != fixtures.wallet_address
                    || res.data.wallet_type != fixtures.wallet_type =>
            {
                failed.push(format!(
                    "user by address has wallet {}/{}, expected {}/{}",
                    res.data.wallet_address,
                    res.data.wallet_type,
                    fixtures.wallet_address,
                    fixtures.wallet_type
                ))
            }
            Some(_) => {}
            None => failed.push(format!(
                "user {} not found by address",
                fixtures.wallet_address
            )),
        }

        if let Some(res) = &self.non_existent_user {
            failed.push(format!(
                "user {} should not exist, got userid {}",
                fixtures.nonexistent_user_id, res.data.userid
            ));
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(SmokeError::Expectation(failed))
        }
    }
}

/// Runs the four steps in order, each awaited before the next starts.
pub async fn run_sequence(api: &UserApi, fixtures: &Fixtures) -> SmokeReport {
    let probe = UserProbe::new(api);

    tracing::info!("Creating a user...");
    let created_user = probe
        .create_user(&fixtures.wallet_address, &fixtures.wallet_type)
        .await;

    tracing::info!("Fetching user by ID...");
    let user_by_id = probe.get_user_by_id(&fixtures.user_id).await;

    tracing::info!("Fetching user by address...");
    let user_by_address = probe
        .get_user_by_address(&fixtures.wallet_address, &fixtures.wallet_type)
        .await;

    tracing::info!("Fetching non-existent user by ID...");
    let non_existent_user = probe.get_user_by_id(&fixtures.nonexistent_user_id).await;

    SmokeReport {
        created_user,
        user_by_id,
        user_by_address,
        non_existent_user,
    }
}

/// Builds the client from `config` and runs the sequence.
///
/// Resolves to `None` when the run cannot start; the cause is logged.
pub async fn run_tests(config: &SmokeConfig) -> Option<SmokeReport> {
    let api = match config.user_api() {
        Ok(api) => api,
        Err(e) => {
            tracing::error!("Test execution failed: {e}");
            return None;
        }
    };

    Some(run_sequence(&api, &config.fixtures).await)
}
