use user_smoke::{run_tests, SmokeConfig, SmokeError};

/// Usage: `user-smoke [CONFIG_PATH]`
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SmokeError> {
    let config = match std::env::args().nth(1) {
        Some(path) => SmokeConfig::from_file(path)?,
        None => SmokeConfig::default(),
    };
    config.log.init()?;
    tracing::info!("running against {}", config.backend.base_url);

    let report = run_tests(&config).await;
    tracing::info!("Tests completed");

    let report = report.ok_or(SmokeError::Aborted)?;
    tracing::info!(
        "report: {}",
        user_utils::serde_func::serde_to_string(&report)?
    );
    report.check(&config.fixtures)
}
