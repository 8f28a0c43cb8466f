use crate::TransportError;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use user_utils::Error;

pub struct ReqBuilder(pub RequestBuilder);

impl ReqBuilder {
    pub fn json(mut self, v: impl Serialize + Debug) -> Self {
        match user_utils::serde_func::serde_to_string(&v) {
            Ok(body) => tracing::info!("request body: {}", body),
            Err(_) => tracing::info!("request body: {:?}", v),
        }
        self.0 = self.0.json(&v);
        self
    }

    pub fn query(mut self, v: impl Serialize + Debug) -> Self {
        tracing::debug!("request query: {:?}", v);
        self.0 = self.0.query(&v);
        self
    }

    /// Sends the request and decodes a 2xx body as `T`.
    ///
    /// Any other status becomes [`TransportError::NonSuccess`] carrying the raw body.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T, TransportError> {
        let res = self
            .0
            .send()
            .await
            .map_err(|e| TransportError::Utils(Error::Http(e.into())))?;

        let status = res.status();
        let response = res
            .text()
            .await
            .map_err(|e| TransportError::Utils(Error::Http(e.into())))?;

        if !status.is_success() {
            tracing::warn!("response status = {}, body = {}", status, response);
            return Err(TransportError::NonSuccess {
                status: status.as_u16(),
                body: response,
            });
        }

        tracing::info!("response = {}", response);
        Ok(user_utils::serde_func::serde_from_str(&response)?)
    }
}
