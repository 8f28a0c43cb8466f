use std::{collections::HashMap, time::Duration};

pub mod deposit;
pub mod stake;
pub mod user;

/// Typed client for the user endpoint.
///
/// Holds its own [`HttpClient`](user_transport::client::HttpClient); callers pass the
/// `UserApi` around by reference instead of reaching for a global.
#[derive(Debug, Clone)]
pub struct UserApi {
    pub base_url: String,
    pub client: user_transport::client::HttpClient,
}

impl UserApi {
    pub fn new(
        backend_url: Option<String>,
        headers_opt: Option<HashMap<String, String>>,
        timeout: Option<Duration>,
    ) -> Result<Self, crate::Error> {
        let url = backend_url.unwrap_or(crate::consts::BASE_URL.to_string());

        let mut headers_opt = headers_opt.unwrap_or_default();
        headers_opt
            .entry("Accept-Encoding".to_string())
            .or_insert_with(|| "identity".to_string());

        Ok(Self {
            base_url: url.clone(),
            client: user_transport::client::HttpClient::new(&url, Some(headers_opt), timeout)?,
        })
    }

    pub(crate) async fn get_request<Q, R>(&self, query: &Q) -> Result<R, crate::Error>
    where
        Q: serde::Serialize + std::fmt::Debug,
        R: serde::de::DeserializeOwned,
    {
        let res = self
            .client
            .get(crate::consts::endpoint::USER)
            .query(query)
            .send::<R>()
            .await?;
        Ok(res)
    }
}
